//! Core traits for TruncStat
//!
//! This module defines the capability contract that generic layers program
//! against: any continuous distribution exposing these queries can be wrapped
//! (truncated, sampled from) without the wrapper knowing the family.

use rand::Rng;

use crate::error::{Error, Result};
use crate::types::{DistributionMeta, SupportInterval};

/// Continuous distribution capability.
///
/// Implementations are stateless with respect to parameters: every query takes
/// the full structured parameter value, so one capability instance serves all
/// parameter combinations. All queries are pure functions of their arguments
/// and safe to call concurrently.
///
/// Evaluation queries signal invalid parameters by returning
/// `meta().bad_value` (NaN unless the implementation says otherwise); they do
/// not panic and they do not return errors.
pub trait ContinuousDistribution: Send + Sync {
    /// Structured query parameters for this distribution family.
    type Params;

    /// Descriptive metadata (name, shape-parameter names, defaults).
    fn meta(&self) -> &DistributionMeta;

    /// Probability density at `x`.
    fn density(&self, x: f64, params: &Self::Params) -> f64;

    /// Natural log of the density at `x`.
    fn log_density(&self, x: f64, params: &Self::Params) -> f64 {
        self.density(x, params).ln()
    }

    /// Cumulative probability `P(X <= x)`, in `[0, 1]`.
    fn cumulative(&self, x: f64, params: &Self::Params) -> f64;

    /// Survival probability `P(X > x)`, in `[0, 1]`.
    ///
    /// Defaults to the complement of [`Self::cumulative`]; implementations may
    /// override with a form that is more accurate in the upper tail.
    fn survival(&self, x: f64, params: &Self::Params) -> f64 {
        1.0 - self.cumulative(x, params)
    }

    /// Generalized inverse of [`Self::cumulative`]: the smallest `x` with
    /// `cumulative(x) >= q`.
    fn inverse_cumulative(&self, q: f64, params: &Self::Params) -> f64;

    /// Interval outside which the density is zero, for these parameters.
    fn support(&self, params: &Self::Params) -> SupportInterval;

    /// Whether `params` is an admissible parameter combination.
    fn valid(&self, params: &Self::Params) -> bool;

    /// Draw `n` values by inverse-transform sampling: `inverse_cumulative(u)`
    /// over uniform `u` in `[0, 1)`.
    ///
    /// Unlike the evaluation queries, sampling rejects invalid parameters with
    /// an error rather than returning `n` sentinels.
    fn sample<R: Rng + ?Sized>(
        &self,
        params: &Self::Params,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        if !self.valid(params) {
            return Err(Error::Validation(format!(
                "invalid parameters for {}",
                self.meta().name
            )));
        }
        Ok((0..n).map(|_| self.inverse_cumulative(rng.random::<f64>(), params)).collect())
    }
}
