//! Common data types for TruncStat

use serde::{Deserialize, Serialize};

/// Closed interval `[low, high]` describing where a distribution places mass.
///
/// Either endpoint may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportInterval {
    /// Lower endpoint (possibly `-inf`)
    pub low: f64,

    /// Upper endpoint (possibly `+inf`)
    pub high: f64,
}

impl SupportInterval {
    /// The whole real line `(-inf, +inf)`.
    pub const REAL_LINE: Self = Self { low: f64::NEG_INFINITY, high: f64::INFINITY };

    /// The non-negative half line `[0, +inf)`.
    pub const NON_NEGATIVE: Self = Self { low: 0.0, high: f64::INFINITY };

    /// Create a new interval.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `x` lies in `[low, high]`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Intersection of two intervals: `[max(lows), min(highs)]`.
    #[inline]
    pub fn intersect(&self, other: Self) -> Self {
        Self { low: self.low.max(other.low), high: self.high.min(other.high) }
    }
}

/// How a host framework should compute generic moments for a capability.
///
/// Carried as descriptive metadata only; nothing in this workspace integrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MomentStrategy {
    /// Integrate `x^n * density(x)` over the support.
    #[default]
    Density,
    /// Integrate `inverse_cumulative(q)^n` over `q` in `[0, 1]`.
    Quantile,
}

/// Descriptive metadata every distribution capability carries.
///
/// A derived capability (e.g. a truncated variant) copies most of this through
/// from its base unchanged; only the name and shape-parameter list change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionMeta {
    /// Identifier, e.g. `"normal"` or `"truncated_normal"`
    pub name: String,

    /// Ordered shape-parameter names (empty for a parameter-free family)
    pub shape_names: Vec<String>,

    /// Support before any per-call parameters are considered
    pub default_support: SupportInterval,

    /// Sentinel returned by evaluation queries when parameters are invalid
    pub bad_value: f64,

    /// Absolute tolerance a host may use for quantile root-finding
    pub quantile_tolerance: f64,

    /// Moment-computation strategy tag for a host framework
    pub moment_strategy: MomentStrategy,
}

impl DistributionMeta {
    /// Create metadata with the conventional defaults: unbounded support,
    /// NaN bad value, `1e-14` quantile tolerance, density-based moments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape_names: Vec::new(),
            default_support: SupportInterval::REAL_LINE,
            bad_value: f64::NAN,
            quantile_tolerance: 1e-14,
            moment_strategy: MomentStrategy::default(),
        }
    }

    /// Set the shape-parameter names.
    pub fn with_shape_names(mut self, names: &[&str]) -> Self {
        self.shape_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the default support.
    pub fn with_default_support(mut self, support: SupportInterval) -> Self {
        self.default_support = support;
        self
    }

    /// Set the bad-value sentinel.
    pub fn with_bad_value(mut self, bad_value: f64) -> Self {
        self.bad_value = bad_value;
        self
    }

    /// Set the quantile root-finding tolerance.
    pub fn with_quantile_tolerance(mut self, tolerance: f64) -> Self {
        self.quantile_tolerance = tolerance;
        self
    }

    /// Set the moment-computation strategy.
    pub fn with_moment_strategy(mut self, strategy: MomentStrategy) -> Self {
        self.moment_strategy = strategy;
        self
    }
}
