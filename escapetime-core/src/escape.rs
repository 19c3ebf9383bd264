use crate::error::CoreError;

/// The outcome of iterating a single point.
///
/// `escaped == false` means the iteration cap was reached without the
/// magnitude bound being exceeded, so the point is presumed in the set;
/// in that case `iterations` equals the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeResult {
    /// Number of completed iterations, `<= iteration_cap`.
    pub iterations: u32,
    /// Whether the squared magnitude exceeded the escape bound.
    pub escaped: bool,
}

impl EscapeResult {
    #[inline]
    fn escaped_at(iterations: u32) -> Self {
        Self {
            iterations,
            escaped: true,
        }
    }

    #[inline]
    fn capped_at(cap: u32) -> Self {
        Self {
            iterations: cap,
            escaped: false,
        }
    }
}

/// Parameters controlling escape-time iteration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EscapeParams {
    /// Maximum number of iterations before presuming a point is in the set.
    pub iteration_cap: u32,

    /// Squared-magnitude threshold beyond which the orbit has escaped.
    /// The default of 4.0 corresponds to |z| = 2.
    pub escape_bound: f32,
}

impl EscapeParams {
    pub const DEFAULT_ITERATION_CAP: u32 = 1000;
    pub const DETAIL_ITERATION_CAP: u32 = 5000;
    pub const DEFAULT_ESCAPE_BOUND: f32 = 4.0;

    pub fn new(iteration_cap: u32, escape_bound: f32) -> crate::Result<Self> {
        if iteration_cap < 1 {
            return Err(CoreError::InvalidIterationCap(iteration_cap));
        }
        if escape_bound <= 0.0 || !escape_bound.is_finite() {
            return Err(CoreError::InvalidEscapeBound(escape_bound));
        }
        Ok(Self {
            iteration_cap,
            escape_bound,
        })
    }

    /// Detail-oriented preset: a higher cap resolves thin filaments near
    /// the set boundary at the cost of more work per in-set pixel.
    pub fn detail() -> Self {
        Self {
            iteration_cap: Self::DETAIL_ITERATION_CAP,
            escape_bound: Self::DEFAULT_ESCAPE_BOUND,
        }
    }

    /// Return a copy with a different iteration cap.
    pub fn with_iteration_cap(self, iteration_cap: u32) -> Self {
        Self {
            iteration_cap,
            ..self
        }
    }
}

impl Default for EscapeParams {
    fn default() -> Self {
        Self {
            iteration_cap: Self::DEFAULT_ITERATION_CAP,
            escape_bound: Self::DEFAULT_ESCAPE_BOUND,
        }
    }
}

/// Returns `true` if `c` lies inside the main cardioid.
///
/// Closed-form interior check that avoids iterating a large fraction of
/// visible points at the default viewports.
#[inline]
fn in_cardioid(re: f32, im: f32) -> bool {
    let im2 = im * im;
    let q = (re - 0.25) * (re - 0.25) + im2;
    q * (q + (re - 0.25)) <= 0.25 * im2
}

/// Returns `true` if `c` lies inside the period-2 bulb.
#[inline]
fn in_period2_bulb(re: f32, im: f32) -> bool {
    (re + 1.0) * (re + 1.0) + im * im <= 0.0625
}

/// Escape-time evaluator for the Mandelbrot recurrence `z ← z² + c`.
///
/// Iteration starts at `z₀ = 0` with `c` the mapped pixel coordinate, and
/// counts iterations until the squared magnitude of `z` strictly exceeds
/// the escape bound or the cap is reached. Evaluated once per pixel; the
/// loop allocates nothing and performs no I/O.
#[derive(Debug, Clone)]
pub struct EscapeTime {
    params: EscapeParams,
}

impl EscapeTime {
    pub fn new(params: EscapeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EscapeParams {
        &self.params
    }

    /// Evaluate the point `c = x0 + i·y0`.
    ///
    /// The magnitude test uses `|z|²` against the squared bound (no square
    /// root) and strict `>` for escape, so a point sitting exactly on the
    /// bound keeps iterating. A non-finite magnitude terminates immediately
    /// as escaped rather than propagating NaN downstream.
    pub fn evaluate(&self, x0: f32, y0: f32) -> EscapeResult {
        let cap = self.params.iteration_cap;
        let bound = self.params.escape_bound;

        // Fast rejection: in-set orbits never leave |z|² ≤ 4, so for bounds
        // of at least 4 the closed-form interior checks produce the same
        // result as iterating to the cap. Smaller bounds can be crossed by
        // an interior orbit, so they take the full loop.
        if bound >= EscapeParams::DEFAULT_ESCAPE_BOUND
            && (in_cardioid(x0, y0) || in_period2_bulb(x0, y0))
        {
            return EscapeResult::capped_at(cap);
        }

        let mut x = 0.0f32;
        let mut y = 0.0f32;
        let mut n = 0u32;

        loop {
            let norm_sq = x * x + y * y;
            if norm_sq > bound || !norm_sq.is_finite() {
                return EscapeResult::escaped_at(n);
            }
            if n >= cap {
                return EscapeResult::capped_at(cap);
            }
            // z = z² + c, done on the components to skip a complex type.
            let x_next = x * x - y * y + x0;
            y = 2.0 * x * y + y0;
            x = x_next;
            n += 1;
        }
    }
}

impl Default for EscapeTime {
    fn default() -> Self {
        Self::new(EscapeParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn et() -> EscapeTime {
        EscapeTime::default()
    }

    #[test]
    fn origin_never_escapes() {
        let r = et().evaluate(0.0, 0.0);
        assert!(!r.escaped);
        assert_eq!(r.iterations, EscapeParams::DEFAULT_ITERATION_CAP);
    }

    #[test]
    fn origin_never_escapes_for_any_cap() {
        for cap in [1, 7, 100, 5000] {
            let e = EscapeTime::new(EscapeParams::new(cap, 4.0).unwrap());
            let r = e.evaluate(0.0, 0.0);
            assert!(!r.escaped, "z stays at 0 for c = 0");
            assert_eq!(r.iterations, cap);
        }
    }

    #[test]
    fn far_point_escapes_on_first_iteration() {
        // |c| > 2 already, so z₁ = c trips the bound at n = 1.
        let r = et().evaluate(10.0, 0.0);
        assert!(r.escaped);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z₁=1 (|z|²=1), z₂=2 (|z|²=4, on the bound, keeps going),
        // z₃=5 (|z|²=25 > 4) → escapes at n = 3.
        let r = et().evaluate(1.0, 0.0);
        assert!(r.escaped);
        assert_eq!(r.iterations, 3);
        assert!(r.iterations < 10, "points outside the set escape quickly");
    }

    #[test]
    fn bound_is_strict() {
        // c = -2: the orbit is 0 → -2 → 2 → 2 → … with |z|² pinned at 4,
        // never strictly above the bound, so the point caps out.
        let r = et().evaluate(-2.0, 0.0);
        assert!(!r.escaped);
        assert_eq!(r.iterations, EscapeParams::DEFAULT_ITERATION_CAP);
    }

    #[test]
    fn minus_one_is_interior() {
        // c = -1 gives the orbit 0 → -1 → 0 → -1 … (period 2)
        let r = et().evaluate(-1.0, 0.0);
        assert!(!r.escaped);
    }

    #[test]
    fn cardioid_cusp_is_interior() {
        let r = et().evaluate(0.24, 0.0);
        assert!(!r.escaped);
        assert_eq!(r.iterations, EscapeParams::DEFAULT_ITERATION_CAP);
    }

    #[test]
    fn positive_real_axis_escapes() {
        let r = et().evaluate(0.5, 0.0);
        assert!(r.escaped, "0.5 + 0i is outside the set");
    }

    #[test]
    fn small_bound_overrides_interior_shortcut() {
        // With a bound below 4 even period-2 interior orbits can escape:
        // c = -1 gives z₁ = -1 with |z₁|² = 1 > 0.5.
        let e = EscapeTime::new(EscapeParams::new(1000, 0.5).unwrap());
        let r = e.evaluate(-1.0, 0.0);
        assert!(r.escaped);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn small_bound_still_caps_the_origin() {
        // z stays at 0 for c = 0, below any positive bound.
        let e = EscapeTime::new(EscapeParams::new(100, 0.5).unwrap());
        let r = e.evaluate(0.0, 0.0);
        assert!(!r.escaped);
        assert_eq!(r.iterations, 100);
    }

    #[test]
    fn larger_bound_delays_escape() {
        // c = 1 under the default bound escapes at n = 3 (|z₃|² = 25);
        // a bound of 30 lets z₃ through and trips on z₄ = 26 instead.
        let e = EscapeTime::new(EscapeParams::new(1000, 30.0).unwrap());
        let r = e.evaluate(1.0, 0.0);
        assert!(r.escaped);
        assert_eq!(r.iterations, 4);
    }

    #[test]
    fn nan_input_terminates_as_escaped() {
        let r = et().evaluate(f32::NAN, 0.0);
        assert!(r.escaped, "non-finite magnitude must terminate the loop");
        assert!(r.iterations <= EscapeParams::DEFAULT_ITERATION_CAP);
    }

    #[test]
    fn huge_input_terminates_as_escaped() {
        let r = et().evaluate(f32::MAX, f32::MAX);
        assert!(r.escaped);
    }

    #[test]
    fn deterministic_results() {
        let e = et();
        let points = [
            (0.0, 0.0),
            (-0.75, 0.1),
            (0.3, 0.5),
            (-2.0, 0.0),
            (1.0, 1.0),
        ];
        let run1: Vec<_> = points.iter().map(|&(x, y)| e.evaluate(x, y)).collect();
        let run2: Vec<_> = points.iter().map(|&(x, y)| e.evaluate(x, y)).collect();
        assert_eq!(run1, run2, "evaluation must be deterministic");
    }

    #[test]
    fn default_params() {
        let p = EscapeParams::default();
        assert_eq!(p.iteration_cap, 1000);
        assert!((p.escape_bound - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn detail_preset_raises_cap() {
        let p = EscapeParams::detail();
        assert_eq!(p.iteration_cap, 5000);
        assert!((p.escape_bound - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn invalid_iteration_cap() {
        assert!(EscapeParams::new(0, 4.0).is_err());
    }

    #[test]
    fn invalid_escape_bound() {
        assert!(EscapeParams::new(1000, 0.0).is_err());
        assert!(EscapeParams::new(1000, -1.0).is_err());
        assert!(EscapeParams::new(1000, f32::NAN).is_err());
        assert!(EscapeParams::new(1000, f32::INFINITY).is_err());
    }

    #[test]
    fn params_serde_round_trip() {
        let p = EscapeParams::new(2500, 4.0).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: EscapeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
