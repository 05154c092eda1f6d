//! Error types for TruncStat
//!
//! Evaluation queries on a distribution capability never error: invalid
//! parameters surface as the capability's bad-value sentinel (see
//! [`crate::types::DistributionMeta::bad_value`]). The error type below is for
//! the framework-level operations (currently sampling) that reject invalid
//! parameters up front instead of producing sentinel-filled output.

use thiserror::Error;

/// TruncStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
