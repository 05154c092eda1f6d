//! Generic truncation of continuous probability distributions.
//!
//! Given any capability implementing
//! [`ts_core::ContinuousDistribution`], [`truncate`] produces a new capability
//! restricted to an interval `[min, max]` and renormalized to unit mass. The
//! construction is closed-form: every truncated query is an affine rescale of
//! the base capability's cumulative/survival/quantile, so no integration or
//! root-finding happens here.
//!
//! The [`bridge`] module adapts `statrs` distributions to the capability
//! contract so they can be truncated out of the box.

pub mod bridge;
pub mod truncated;

pub use truncated::{truncate, TruncationParams, Truncated};
