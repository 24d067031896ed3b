pub mod cli_consts {
    //! Status Panel Configuration Constants
    //!
    //! Constants grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the refresh worker and the front end.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffered refresh triggers. Extra activations beyond this are dropped.
    pub const TRIGGER_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // SURFACE TEXT
    // =============================================================================

    /// Text shown by a surface whose fetch is in flight.
    pub const LOADING_TEXT: &str = "Loading...";

    /// Marker every failed surface's text starts with.
    pub const ERROR_MARKER: &str = "Error";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Default request timeout in seconds. Zero disables the timeout.
        pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

        /// Converts a `--timeout-secs` value, treating zero as "no timeout".
        pub const fn request_timeout(secs: u64) -> Option<Duration> {
            if secs == 0 {
                None
            } else {
                Some(Duration::from_secs(secs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::cli_consts::network::{DEFAULT_TIMEOUT_SECS, request_timeout};
    use std::time::Duration;

    #[test]
    fn zero_timeout_disables_it() {
        assert_eq!(request_timeout(0), None);
        assert_eq!(
            request_timeout(DEFAULT_TIMEOUT_SECS),
            Some(Duration::from_secs(10))
        );
    }
}
