//! Core contract for TruncStat.
//!
//! This crate defines the capability interface a continuous distribution must
//! expose so that generic layers (truncation, sampling) can be built on top of
//! it without knowing the distribution family:
//! - the [`ContinuousDistribution`] trait (density/cumulative/survival/quantile,
//!   support, parameter validity)
//! - descriptive metadata carried by every capability ([`DistributionMeta`])
//! - shared value types ([`SupportInterval`], [`MomentStrategy`])

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::ContinuousDistribution;
pub use types::{DistributionMeta, MomentStrategy, SupportInterval};
