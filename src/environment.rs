use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Default address of a locally running status server.
pub const LOCAL_SERVER_URL: &str = "http://localhost:8000";

/// The status server the panel reads from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// A status server on this machine.
    #[default]
    Local,
    /// Any other status server, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Builds an environment from a base URL, collapsing the local address to `Local`.
    pub fn from_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed == LOCAL_SERVER_URL {
            Environment::Local
        } else {
            Environment::Custom {
                base_url: trimmed.to_string(),
            }
        }
    }

    /// Returns the base URL of the status server.
    pub fn server_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_SERVER_URL.to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    /// Accepts `local` or an absolute http(s) URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::from_url(s));
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { base_url } => write!(f, "Custom ({})", base_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.server_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_and_urls() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://status.example.com/".parse::<Environment>(),
            Ok(Environment::Custom {
                base_url: "https://status.example.com".to_string()
            })
        );
        assert!("status.example.com".parse::<Environment>().is_err());
    }

    #[test]
    fn local_url_collapses_to_local() {
        assert_eq!(
            Environment::from_url("http://localhost:8000/"),
            Environment::Local
        );
        assert_eq!(Environment::Local.server_url(), LOCAL_SERVER_URL);
    }
}
