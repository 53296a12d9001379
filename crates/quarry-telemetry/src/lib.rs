//! Logging for quarry.
//!
//! Decoders in this workspace never fail loudly: a missing, malformed or
//! rejected parameter collapses into `None`. The reason a present value was
//! rejected is still worth knowing while debugging, so the composite decoders
//! emit `trace`-level events through [`trace_absent!`]. This crate owns that
//! macro and the subscriber setup that renders its events.
//!
//! # Example
//!
//! ```rust,ignore
//! use quarry_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//!
//! // Rejections now show up as:
//! // TRACE quarry_core::composite: parameter rejected param="ids" reason="$[1]: expected number"
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[doc(hidden)]
pub use tracing;

/// Emits a `trace` event for a parameter that was present but rejected.
///
/// ```rust,ignore
/// quarry_telemetry::trace_absent!("ids", "nested parse failed: {err}");
/// ```
#[macro_export]
macro_rules! trace_absent {
    ($param:expr, $($reason:tt)+) => {
        $crate::tracing::trace!(
            param = %$param,
            reason = %format_args!($($reason)+),
            "parameter rejected"
        );
    };
}
