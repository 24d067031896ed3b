//! Unified messaging system for session and command output

use crate::environment::Environment;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_ERROR: &str = "\x1b[1;31m"; // Bold Red
pub const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    Info(String),
    Success(String),
    Warn(String),
    /// Printed to stderr
    Error(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// The message with its colored tag, without a trailing newline.
    pub fn formatted(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
            Self::Warn(msg) => format!("{}[WARN]{} {}", COLOR_WARN, COLOR_RESET, msg),
            Self::Error(msg) => format!("{}[ERROR]{} {}", COLOR_ERROR, COLOR_RESET, msg),
        }
    }

    pub fn print(&self) {
        match self {
            Self::Error(_) => eprintln!("{}", self.formatted()),
            _ => println!("{}", self.formatted()),
        }
    }
}

pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode against {}",
        mode,
        environment.server_url()
    ))
    .print();
}

pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("Status panel exited successfully").print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_messages_carry_their_tag() {
        assert_eq!(
            SessionMessage::success("done").formatted(),
            "\x1b[1;32m[SUCCESS]\x1b[0m done"
        );
        assert!(SessionMessage::warn("careful").formatted().contains("[WARN]"));
    }
}
