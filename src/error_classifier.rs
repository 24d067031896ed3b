use crate::logging::LogLevel;
use crate::status::error::StatusError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Picks the activity-log level for a failed surface.
    pub fn classify_fetch_error(&self, error: &StatusError) -> LogLevel {
        match error {
            // Server-side trouble, usually temporary
            StatusError::Status { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // The panel asked for something the server does not serve
            StatusError::Status { .. } => LogLevel::Error,

            // Malformed responses
            StatusError::Decode { .. } => LogLevel::Error,

            // Network issues
            StatusError::Transport { .. } => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusError {
        StatusError::Status {
            path: "/health".to_string(),
            status: code,
        }
    }

    #[test]
    fn server_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&status(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&status(503)), LogLevel::Warn);
    }

    #[test]
    fn client_errors_and_bad_json_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&status(404)), LogLevel::Error);

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode = StatusError::Decode {
            path: "/system".to_string(),
            source,
        };
        assert_eq!(classifier.classify_fetch_error(&decode), LogLevel::Error);
    }
}
