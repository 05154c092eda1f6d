//! Capability adapters for `statrs` distributions.
//!
//! The truncation layer consumes the capability contract; these adapters let
//! already-correct `statrs` implementations supply it. Each adapter is a thin
//! delegating shell: parameters arrive per call, the matching `statrs` value
//! is built on the spot, and invalid parameters (or a quantile outside
//! `[0, 1]`, where `statrs` would panic) come back as the bad-value sentinel.

use statrs::distribution::{Continuous, ContinuousCDF, Exp, Normal as StatrsNormal};
use ts_core::{ContinuousDistribution, DistributionMeta, SupportInterval};

/// Parameters of a [`Normal`] query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    /// Location
    pub mean: f64,

    /// Scale; must be finite and positive
    pub std_dev: f64,
}

/// Normal distribution capability backed by [`statrs::distribution::Normal`].
#[derive(Debug, Clone)]
pub struct Normal {
    meta: DistributionMeta,
}

impl Normal {
    /// Create the capability. Parameters are supplied per query.
    pub fn new() -> Self {
        Self { meta: DistributionMeta::new("normal").with_shape_names(&["mean", "std_dev"]) }
    }

    fn dist(&self, p: &NormalParams) -> Option<StatrsNormal> {
        if !self.valid(p) {
            return None;
        }
        StatrsNormal::new(p.mean, p.std_dev).ok()
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuousDistribution for Normal {
    type Params = NormalParams;

    fn meta(&self) -> &DistributionMeta {
        &self.meta
    }

    fn density(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.pdf(x),
            None => self.meta.bad_value,
        }
    }

    fn log_density(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.ln_pdf(x),
            None => self.meta.bad_value,
        }
    }

    fn cumulative(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.cdf(x),
            None => self.meta.bad_value,
        }
    }

    fn survival(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.sf(x),
            None => self.meta.bad_value,
        }
    }

    fn inverse_cumulative(&self, q: f64, p: &Self::Params) -> f64 {
        if !(0.0..=1.0).contains(&q) {
            return self.meta.bad_value;
        }
        match self.dist(p) {
            Some(d) => d.inverse_cdf(q),
            None => self.meta.bad_value,
        }
    }

    fn support(&self, _p: &Self::Params) -> SupportInterval {
        SupportInterval::REAL_LINE
    }

    fn valid(&self, p: &Self::Params) -> bool {
        p.mean.is_finite() && p.std_dev.is_finite() && p.std_dev > 0.0
    }
}

/// Parameters of an [`Exponential`] query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialParams {
    /// Rate (inverse scale); must be finite and positive
    pub rate: f64,
}

/// Exponential distribution capability backed by [`statrs::distribution::Exp`].
#[derive(Debug, Clone)]
pub struct Exponential {
    meta: DistributionMeta,
}

impl Exponential {
    /// Create the capability. Parameters are supplied per query.
    pub fn new() -> Self {
        Self {
            meta: DistributionMeta::new("exponential")
                .with_shape_names(&["rate"])
                .with_default_support(SupportInterval::NON_NEGATIVE),
        }
    }

    fn dist(&self, p: &ExponentialParams) -> Option<Exp> {
        if !self.valid(p) {
            return None;
        }
        Exp::new(p.rate).ok()
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuousDistribution for Exponential {
    type Params = ExponentialParams;

    fn meta(&self) -> &DistributionMeta {
        &self.meta
    }

    fn density(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.pdf(x),
            None => self.meta.bad_value,
        }
    }

    fn log_density(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.ln_pdf(x),
            None => self.meta.bad_value,
        }
    }

    fn cumulative(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.cdf(x),
            None => self.meta.bad_value,
        }
    }

    fn survival(&self, x: f64, p: &Self::Params) -> f64 {
        match self.dist(p) {
            Some(d) => d.sf(x),
            None => self.meta.bad_value,
        }
    }

    fn inverse_cumulative(&self, q: f64, p: &Self::Params) -> f64 {
        if !(0.0..=1.0).contains(&q) {
            return self.meta.bad_value;
        }
        match self.dist(p) {
            Some(d) => d.inverse_cdf(q),
            None => self.meta.bad_value,
        }
    }

    fn support(&self, _p: &Self::Params) -> SupportInterval {
        SupportInterval::NON_NEGATIVE
    }

    fn valid(&self, p: &Self::Params) -> bool {
        p.rate.is_finite() && p.rate > 0.0
    }
}
