//! Safeguarded Newton solver for scalar equations.
//!
//! Newton iteration with an always-maintained sign-change bracket. Any step
//! that leaves the bracket or meets an ill-conditioned derivative degrades to
//! a bisection step, so the search cannot escape or stall outside the
//! bracket.

use crate::error::{SolverError, SolverResult};

/// Root solver configuration.
#[derive(Debug, Clone)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual |f(x)|
    pub abs_tol: f64,
    /// Relative tolerance on the bracket width
    pub rel_tol: f64,
    /// Derivative magnitude below which Newton is considered ill-conditioned
    pub derivative_floor: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-9,
            rel_tol: 1e-12,
            derivative_floor: 1e-14,
        }
    }
}

/// Root solve outcome.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// Solution
    pub root: f64,
    /// Final residual f(root)
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
    /// How many iterations fell back to bisection
    pub bisection_steps: usize,
}

/// Find a root of `f` inside `[lo, hi]` starting from `x0`.
///
/// The bracket endpoints must straddle a sign change of `f`. The initial
/// guess is clamped into the bracket; a guess outside it is not an error.
///
/// `f` and `df` are expected to be total on the bracket (the property
/// correlations that drive this solver are smooth polynomials and
/// logarithms). Non-finite evaluations abort with a `Numeric` error.
pub fn find_root<F, D>(
    f: F,
    df: D,
    bracket: (f64, f64),
    x0: f64,
    config: &RootConfig,
) -> SolverResult<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = bracket;
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(SolverError::InvalidBracket {
            what: format!("bounds [{lo}, {hi}] are not an increasing finite interval"),
        });
    }

    let f_lo = eval(&f, lo)?;
    let f_hi = eval(&f, hi)?;

    if f_lo.abs() <= config.abs_tol {
        return Ok(RootResult {
            root: lo,
            residual: f_lo,
            iterations: 0,
            bisection_steps: 0,
        });
    }
    if f_hi.abs() <= config.abs_tol {
        return Ok(RootResult {
            root: hi,
            residual: f_hi,
            iterations: 0,
            bisection_steps: 0,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(SolverError::InvalidBracket {
            what: format!(
                "no sign change on [{lo}, {hi}] (f(lo) = {f_lo:.3e}, f(hi) = {f_hi:.3e})"
            ),
        });
    }

    // Orient so that f(lo) < 0 < f(hi)
    let mut sign = 1.0;
    if f_lo > 0.0 {
        sign = -1.0;
    }

    let mut x = x0.clamp(lo, hi);
    let mut bisection_steps = 0usize;

    for iter in 0..config.max_iterations {
        let fx = eval(&f, x)?;
        if fx.abs() <= config.abs_tol {
            tracing::debug!(iter, bisection_steps, root = x, "root found");
            return Ok(RootResult {
                root: x,
                residual: fx,
                iterations: iter,
                bisection_steps,
            });
        }

        // Tighten the bracket around the sign change
        if sign * fx < 0.0 {
            lo = x;
        } else {
            hi = x;
        }

        if (hi - lo).abs() <= config.rel_tol * hi.abs().max(lo.abs()) {
            let mid = 0.5 * (lo + hi);
            let residual = eval(&f, mid)?;
            return Ok(RootResult {
                root: mid,
                residual,
                iterations: iter,
                bisection_steps,
            });
        }

        let dfx = eval(&df, x)?;
        let newton_x = x - fx / dfx;

        x = if dfx.abs() < config.derivative_floor
            || !newton_x.is_finite()
            || newton_x <= lo
            || newton_x >= hi
        {
            bisection_steps += 1;
            0.5 * (lo + hi)
        } else {
            newton_x
        };
    }

    let residual = eval(&f, x)?;
    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {:.3e}",
            config.max_iterations, residual
        ),
    })
}

fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> SolverResult<f64> {
    let v = f(x);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SolverError::Numeric {
            what: format!("non-finite evaluation at x = {x}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, x > 0
        let f = |x: f64| x * x - 4.0;
        let df = |x: f64| 2.0 * x;

        let config = RootConfig::default();
        let result = find_root(f, df, (0.1, 10.0), 3.0, &config).unwrap();

        assert!((result.root - 2.0).abs() < 1e-8);
        assert!(result.iterations < 20);
    }

    #[test]
    fn logarithmic_inversion() {
        // The shape the property engine actually inverts: c*ln(x/x0) = target
        let target = 1200.0;
        let f = move |x: f64| 20_000.0 * (x / 300.0).ln() - target;
        let df = |x: f64| 20_000.0 / x;

        let result = find_root(f, df, (150.0, 3000.0), 300.0, &RootConfig::default()).unwrap();
        let expected = 300.0 * (target / 20_000.0_f64).exp();
        assert!((result.root - expected).abs() < 1e-6);
    }

    #[test]
    fn bad_initial_guess_recovers_by_bisection() {
        // Newton from the flat region of x^3 - 8 overshoots; the bracket
        // safeguard must still find the root.
        let f = |x: f64| x * x * x - 8.0;
        let df = |x: f64| 3.0 * x * x;

        let result = find_root(f, df, (-10.0, 10.0), 0.001, &RootConfig::default()).unwrap();
        assert!((result.root - 2.0).abs() < 1e-8);
        assert!(result.bisection_steps > 0);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let err = find_root(f, df, (-1.0, 1.0), 0.0, &RootConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::InvalidBracket { .. }));
    }

    #[test]
    fn rejects_inverted_bracket() {
        let f = |x: f64| x;
        let df = |_x: f64| 1.0;

        let err = find_root(f, df, (1.0, -1.0), 0.0, &RootConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::InvalidBracket { .. }));
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let f = |x: f64| x.tanh();
        let df = |x: f64| 1.0 / x.cosh().powi(2);

        let config = RootConfig {
            max_iterations: 1,
            abs_tol: 1e-15,
            ..RootConfig::default()
        };
        let err = find_root(f, df, (-5.0, 9.0), 4.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }

    #[test]
    fn endpoint_root_is_returned_directly() {
        let f = |x: f64| x - 2.0;
        let df = |_x: f64| 1.0;

        let result = find_root(f, df, (2.0, 5.0), 3.0, &RootConfig::default()).unwrap();
        assert_eq!(result.root, 2.0);
        assert_eq!(result.iterations, 0);
    }
}
