pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! This module contains all configuration constants for the monitor,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered worker events
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // TELEMETRY CONFIGURATION
    // =============================================================================

    /// Telemetry polling configuration
    pub mod telemetry {
        use std::time::Duration;

        /// Interval between status polls (milliseconds)
        /// The controller refreshes its status roughly once per second.
        pub const POLL_INTERVAL_MS: u64 = 1_000;

        /// Timeout for a single controller request (milliseconds)
        pub const REQUEST_TIMEOUT_MS: u64 = 5_000;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        }
    }

    // =============================================================================
    // GAUGE CONFIGURATION
    // =============================================================================

    /// Gauge scaling constants
    pub mod gauges {
        /// Full-scale pressure for the gauge fill (bar). Raw readings above
        /// this still display numerically; only the fill is clamped.
        pub const PRESSURE_FULL_SCALE_BAR: f64 = 15.0;

        /// Headroom factor applied to the setpoint when a boiler reports no
        /// maximum temperature for its gauge scale.
        pub const TEMP_SETPOINT_HEADROOM: f64 = 1.15;
    }
}
