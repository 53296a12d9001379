//! Test error types.

use thiserror::Error;

/// Errors that can occur while building test parameters.
#[derive(Debug, Error)]
pub enum TestError {
    /// A raw query string could not be parsed.
    #[error("Query parse error: {0}")]
    Query(#[from] quarry_core::ParamsError),
}
