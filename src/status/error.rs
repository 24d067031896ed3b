//! Error handling for the status module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// The request could not complete: connection refused, DNS failure, timeout.
    #[error("{path} request failed: {}", transport_cause(.source))]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{path} -> {status}")]
    Status { path: String, status: u16 },

    /// The body was not valid JSON.
    #[error("{path} returned invalid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The whole `source()` chain of a transport error. reqwest's own message only
/// names the URL; the reason (refused, DNS, timeout) sits further down.
fn transport_cause(error: &reqwest::Error) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        let text = inner.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = inner.source();
    }
    let chain = parts.join(": ");
    if error.is_timeout() {
        format!("timed out ({})", chain)
    } else {
        chain
    }
}

impl StatusError {
    pub fn from_response(path: &str, response: &reqwest::Response) -> StatusError {
        StatusError::Status {
            path: path.to_string(),
            status: response.status().as_u16(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_path_and_code() {
        let err = StatusError::Status {
            path: "/health".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "/health -> 500");
    }

    #[test]
    fn decode_error_mentions_invalid_json() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = StatusError::Decode {
            path: "/docker".to_string(),
            source,
        };
        let text = err.to_string();
        assert!(text.starts_with("/docker returned invalid JSON: "), "{}", text);
    }
}
