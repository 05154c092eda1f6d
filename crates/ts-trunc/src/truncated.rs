//! Truncated distribution adapter.
//!
//! [`Truncated`] wraps a base capability and restricts it to `[min, max]`,
//! renormalizing by the probability mass the base assigns to that interval:
//!
//! - `density(x)   = base_density(x) / mass` inside the interval, 0 outside
//! - `cumulative(x) = (F(x) - F(min)) / mass`, forced to 0 below `min` and
//!   clamped to 1 above `max`
//! - `survival(x)  = (S(x) - S(max)) / mass`, zeroed above `max` and clamped
//!   to 1
//! - `inverse_cumulative(q) = F^-1(q * mass + F(min))`
//!
//! where `mass = F(max) - F(min)`. Each query makes a constant number of calls
//! into the base capability.

use std::fmt;

use ts_core::{ContinuousDistribution, DistributionMeta, SupportInterval};

/// Parameters of a truncated distribution: the base family's own parameters
/// plus the truncation interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationParams<P> {
    /// Parameters forwarded to the base capability
    pub base: P,

    /// Lower truncation bound
    pub min: f64,

    /// Upper truncation bound; must exceed `min` to be valid
    pub max: f64,
}

impl<P> TruncationParams<P> {
    /// Bundle base parameters with a truncation interval.
    pub fn new(base: P, min: f64, max: f64) -> Self {
        Self { base, min, max }
    }
}

/// A base capability restricted to an interval and renormalized.
///
/// Construction never fails: parameter problems (including an empty or
/// inverted interval) surface at evaluation time as the base capability's
/// bad-value sentinel, mirroring the base's own error-signalling convention.
pub struct Truncated<D: ContinuousDistribution> {
    base: D,
    meta: DistributionMeta,
}

/// Restrict `base` to a caller-chosen interval and renormalize.
///
/// Equivalent to [`Truncated::new`].
pub fn truncate<D: ContinuousDistribution>(base: D) -> Truncated<D> {
    Truncated::new(base)
}

impl<D: ContinuousDistribution> Truncated<D> {
    /// Wrap `base`. The derived metadata prefixes the name with `truncated_`,
    /// appends `trunc_min` / `trunc_max` to the shape-parameter list, and
    /// copies everything else through unchanged.
    pub fn new(base: D) -> Self {
        let bm = base.meta();
        let mut shape_names = bm.shape_names.clone();
        shape_names.push("trunc_min".to_string());
        shape_names.push("trunc_max".to_string());
        let meta = DistributionMeta {
            name: format!("truncated_{}", bm.name),
            shape_names,
            default_support: bm.default_support,
            bad_value: bm.bad_value,
            quantile_tolerance: bm.quantile_tolerance,
            moment_strategy: bm.moment_strategy,
        };
        Self { base, meta }
    }

    /// The wrapped capability.
    pub fn base(&self) -> &D {
        &self.base
    }

    /// Unwrap, returning the base capability.
    pub fn into_inner(self) -> D {
        self.base
    }

    /// `(F(min), F(max) - F(min))`: the base cumulative at the lower bound and
    /// the probability mass the base assigns to the interval.
    ///
    /// Only meaningful after `valid` has passed; `max > min` keeps the mass
    /// away from the degenerate zero-width case.
    #[inline]
    fn renorm(&self, p: &TruncationParams<D::Params>) -> (f64, f64) {
        let cdf_min = self.base.cumulative(p.min, &p.base);
        let cdf_max = self.base.cumulative(p.max, &p.base);
        (cdf_min, cdf_max - cdf_min)
    }
}

impl<D: ContinuousDistribution> ContinuousDistribution for Truncated<D> {
    type Params = TruncationParams<D::Params>;

    fn meta(&self) -> &DistributionMeta {
        &self.meta
    }

    fn density(&self, x: f64, p: &Self::Params) -> f64 {
        if !self.valid(p) {
            return self.meta.bad_value;
        }
        if x < p.min || x > p.max {
            return 0.0;
        }
        let (_, mass) = self.renorm(p);
        self.base.density(x, &p.base) / mass
    }

    fn log_density(&self, x: f64, p: &Self::Params) -> f64 {
        if !self.valid(p) {
            return self.meta.bad_value;
        }
        if x < p.min || x > p.max {
            return f64::NEG_INFINITY;
        }
        let (_, mass) = self.renorm(p);
        self.base.log_density(x, &p.base) - mass.ln()
    }

    fn cumulative(&self, x: f64, p: &Self::Params) -> f64 {
        if !self.valid(p) {
            return self.meta.bad_value;
        }
        if x < p.min {
            return 0.0;
        }
        let (cdf_min, mass) = self.renorm(p);
        // Clamp guards numerical overshoot past the upper bound.
        ((self.base.cumulative(x, &p.base) - cdf_min) / mass).min(1.0)
    }

    fn survival(&self, x: f64, p: &Self::Params) -> f64 {
        if !self.valid(p) {
            return self.meta.bad_value;
        }
        if x > p.max {
            return 0.0;
        }
        let (_, mass) = self.renorm(p);
        let sf_max = self.base.survival(p.max, &p.base);
        // Below `min` the unclamped rescale is >= 1, so the clamp alone pins
        // the value to 1; there is no lower-side indicator.
        ((self.base.survival(x, &p.base) - sf_max) / mass).min(1.0)
    }

    fn inverse_cumulative(&self, q: f64, p: &Self::Params) -> f64 {
        if !self.valid(p) {
            return self.meta.bad_value;
        }
        let (cdf_min, mass) = self.renorm(p);
        // Out-of-[0,1] q is delegated as-is; the base's own edge policy applies.
        self.base.inverse_cumulative(q * mass + cdf_min, &p.base)
    }

    fn support(&self, p: &Self::Params) -> SupportInterval {
        self.base.support(&p.base).intersect(SupportInterval::new(p.min, p.max))
    }

    fn valid(&self, p: &Self::Params) -> bool {
        // NaN bounds fail the comparison and are rejected with everything else.
        self.base.valid(&p.base) && p.max > p.min
    }
}

impl<D: ContinuousDistribution> fmt::Display for Truncated<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Truncated {} distribution", self.base.meta().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniform on `[0, 1]`: every query has an exact closed form, which makes
    /// the indicator and clamp behavior observable without float slack.
    struct UnitUniform {
        meta: DistributionMeta,
    }

    impl UnitUniform {
        fn new() -> Self {
            Self {
                meta: DistributionMeta::new("uniform")
                    .with_default_support(SupportInterval::new(0.0, 1.0)),
            }
        }
    }

    impl ContinuousDistribution for UnitUniform {
        type Params = ();

        fn meta(&self) -> &DistributionMeta {
            &self.meta
        }

        fn density(&self, x: f64, _: &()) -> f64 {
            if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 }
        }

        fn cumulative(&self, x: f64, _: &()) -> f64 {
            x.clamp(0.0, 1.0)
        }

        fn inverse_cumulative(&self, q: f64, _: &()) -> f64 {
            q.clamp(0.0, 1.0)
        }

        fn support(&self, _: &()) -> SupportInterval {
            SupportInterval::new(0.0, 1.0)
        }

        fn valid(&self, _: &()) -> bool {
            true
        }
    }

    fn quarter() -> TruncationParams<()> {
        TruncationParams::new((), 0.25, 0.75)
    }

    #[test]
    fn test_density_rescaled_inside_interval() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.density(0.5, &p), 2.0);
        assert_eq!(d.density(0.25, &p), 2.0);
        assert_eq!(d.density(0.75, &p), 2.0);
    }

    #[test]
    fn test_density_zero_outside_interval() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.density(0.2, &p), 0.0);
        assert_eq!(d.density(0.8, &p), 0.0);
        assert_eq!(d.density(-3.0, &p), 0.0);
    }

    #[test]
    fn test_log_density_matches_density() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert!((d.log_density(0.5, &p) - 2.0f64.ln()).abs() < 1e-15);
        let lp = d.log_density(0.9, &p);
        assert!(lp.is_infinite() && lp.is_sign_negative());
    }

    #[test]
    fn test_cumulative_affine_rescale() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.cumulative(0.25, &p), 0.0);
        assert_eq!(d.cumulative(0.5, &p), 0.5);
        assert_eq!(d.cumulative(0.75, &p), 1.0);
    }

    #[test]
    fn test_cumulative_clamps_exactly() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        // Exactly 0 below the interval, exactly 1 above it.
        assert_eq!(d.cumulative(0.1, &p), 0.0);
        assert_eq!(d.cumulative(-5.0, &p), 0.0);
        assert_eq!(d.cumulative(0.9, &p), 1.0);
        assert_eq!(d.cumulative(5.0, &p), 1.0);
    }

    #[test]
    fn test_survival_inside_interval() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.survival(0.5, &p), 0.5);
        assert_eq!(d.survival(0.75, &p), 0.0);
        assert_eq!(d.survival(0.9, &p), 0.0);
    }

    #[test]
    fn test_survival_below_interval_pinned_by_clamp() {
        // There is deliberately no `x >= min` indicator on the survival side:
        // the unclamped rescale is >= 1 for x below the interval and the <= 1
        // clamp pins it to exactly 1, the correct value there.
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.survival(0.1, &p), 1.0);
        assert_eq!(d.survival(-2.0, &p), 1.0);
    }

    #[test]
    fn test_inverse_cumulative_spans_interval() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        assert_eq!(d.inverse_cumulative(0.0, &p), 0.25);
        assert_eq!(d.inverse_cumulative(0.5, &p), 0.5);
        assert_eq!(d.inverse_cumulative(1.0, &p), 0.75);
    }

    #[test]
    fn test_cumulative_inverse_roundtrip() {
        let d = truncate(UnitUniform::new());
        let p = quarter();
        for i in 0..=20 {
            let q = i as f64 / 20.0;
            let x = d.inverse_cumulative(q, &p);
            let q_back = d.cumulative(x, &p);
            assert!((q - q_back).abs() < 1e-12, "q={} roundtripped to {}", q, q_back);
        }
    }

    #[test]
    fn test_support_is_intersection() {
        let d = truncate(UnitUniform::new());

        let inner = d.support(&quarter());
        assert_eq!((inner.low, inner.high), (0.25, 0.75));

        // Bounds wider than the base support do not widen it.
        let wide = d.support(&TruncationParams::new((), -1.0, 0.5));
        assert_eq!((wide.low, wide.high), (0.0, 0.5));

        let upper = d.support(&TruncationParams::new((), 0.5, 5.0));
        assert_eq!((upper.low, upper.high), (0.5, 1.0));
    }

    #[test]
    fn test_invalid_interval_yields_bad_value() {
        let d = truncate(UnitUniform::new());
        for p in [
            TruncationParams::new((), 0.75, 0.25),
            TruncationParams::new((), 0.5, 0.5),
            TruncationParams::new((), f64::NAN, 0.5),
        ] {
            assert!(!d.valid(&p), "interval ({}, {}) should be invalid", p.min, p.max);
            assert!(d.density(0.5, &p).is_nan());
            assert!(d.log_density(0.5, &p).is_nan());
            assert!(d.cumulative(0.5, &p).is_nan());
            assert!(d.survival(0.5, &p).is_nan());
            assert!(d.inverse_cumulative(0.5, &p).is_nan());
        }
    }

    #[test]
    fn test_metadata_derivation() {
        let d = truncate(UnitUniform::new());
        let meta = d.meta();
        assert_eq!(meta.name, "truncated_uniform");
        assert_eq!(meta.shape_names, ["trunc_min", "trunc_max"]);
        // Everything else is copied from the base unchanged.
        assert_eq!(meta.default_support, SupportInterval::new(0.0, 1.0));
        assert!(meta.bad_value.is_nan());
        assert_eq!(meta.quantile_tolerance, 1e-14);
    }

    #[test]
    fn test_display_label() {
        let d = truncate(UnitUniform::new());
        let label = format!("{}", d);
        assert!(label.starts_with("Truncated"), "label was {:?}", label);
        assert_eq!(label, "Truncated uniform distribution");
    }

    #[test]
    fn test_base_accessors() {
        let d = truncate(UnitUniform::new());
        assert_eq!(d.base().meta().name, "uniform");
        let inner = d.into_inner();
        assert_eq!(inner.meta().name, "uniform");
    }
}
