//! Specific-heat correlations for the working fluid.
//!
//! Everything here is on a molar basis: cv in J/(kmol·K), internal energy in
//! J/kmol, entropy in J/(kmol·K). The solver in `engine` only assumes that
//! cv(T) > 0 on the declared range, so u(T) and s0(T) are strictly
//! increasing and the temperature inversions have unique solutions.

use ac_core::units::constants::{P_ATM, R_UNIVERSAL};

/// Reference temperature [K] at which u and s0 are zero.
pub const T_REF: f64 = 300.0;

/// Reference molar volume [m³/kmol] for the entropy volume term,
/// v_ref = R̄·T_ref / P_atm.
pub const V_REF: f64 = R_UNIVERSAL * T_REF / P_ATM;

/// Temperature-dependent specific-heat model.
///
/// Implementations must be thread-safe (Send + Sync) so independent cycle
/// instances can live on different threads.
pub trait CvCorrelation: Send + Sync {
    /// Get the correlation name (for debugging/logging).
    fn name(&self) -> &str;

    /// Temperature range [K] on which the correlation is usable.
    ///
    /// Also serves as the bracket for temperature inversions.
    fn temperature_range(&self) -> (f64, f64);

    /// Molar specific heat at constant volume [J/(kmol·K)].
    fn cv(&self, t_k: f64) -> f64;

    /// Molar internal energy u(T) = ∫cv dT [J/kmol], zero at `T_REF`.
    fn u(&self, t_k: f64) -> f64;

    /// Temperature-only part of molar entropy s0(T) = ∫(cv/T) dT
    /// [J/(kmol·K)], zero at `T_REF`.
    fn s0(&self, t_k: f64) -> f64;

    /// Molar enthalpy h(T) = u(T) + R̄·T [J/kmol].
    fn h(&self, t_k: f64) -> f64 {
        self.u(t_k) + R_UNIVERSAL * t_k
    }
}

/// Cubic polynomial correlation for dry air.
///
/// Molar cp fit: cp = 28.11 + 0.1967e-2·T + 0.4802e-5·T² − 1.966e-9·T³
/// in kJ/(kmol·K), nominal fit range 273–1800 K. cv = cp − R̄, with u and s0
/// obtained by closed-form integration from `T_REF`.
///
/// The usable range is wider than the nominal fit so isentropic legs of hot
/// cycles can resolve; the cubic keeps cv positive well past 3000 K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirPolynomialCv {
    /// cv polynomial coefficients [J/(kmol·K^(i+1))], cv = Σ cᵢ·Tⁱ
    coeffs: [f64; 4],
}

impl Default for AirPolynomialCv {
    fn default() -> Self {
        Self {
            coeffs: [
                28.11e3 - R_UNIVERSAL, // 19_795.537 J/(kmol·K)
                1.967,
                4.802e-3,
                -1.966e-6,
            ],
        }
    }
}

impl AirPolynomialCv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CvCorrelation for AirPolynomialCv {
    fn name(&self) -> &str {
        "air-cubic-cp"
    }

    fn temperature_range(&self) -> (f64, f64) {
        (150.0, 3000.0)
    }

    fn cv(&self, t_k: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        c0 + t_k * (c1 + t_k * (c2 + t_k * c3))
    }

    fn u(&self, t_k: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        let poly = |t: f64| {
            c0 * t + c1 / 2.0 * t.powi(2) + c2 / 3.0 * t.powi(3) + c3 / 4.0 * t.powi(4)
        };
        poly(t_k) - poly(T_REF)
    }

    fn s0(&self, t_k: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        let poly = |t: f64| c1 * t + c2 / 2.0 * t.powi(2) + c3 / 3.0 * t.powi(3);
        c0 * (t_k / T_REF).ln() + poly(t_k) - poly(T_REF)
    }
}

/// Constant-cv ideal gas with γ = 1.4 exactly (cv = 5/2·R̄).
///
/// Closed-form u and s0 make cycle results comparable against the analytic
/// air-standard efficiency formulas, which is what the verification tests
/// use it for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCv {
    /// Molar cv [J/(kmol·K)]
    pub cv: f64,
}

impl Default for ConstantCv {
    fn default() -> Self {
        Self {
            cv: 2.5 * R_UNIVERSAL,
        }
    }
}

impl ConstantCv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heat capacity ratio γ = (cv + R̄)/cv.
    pub fn gamma(&self) -> f64 {
        (self.cv + R_UNIVERSAL) / self.cv
    }
}

impl CvCorrelation for ConstantCv {
    fn name(&self) -> &str {
        "constant-cv"
    }

    fn temperature_range(&self) -> (f64, f64) {
        (50.0, 6000.0)
    }

    fn cv(&self, _t_k: f64) -> f64 {
        self.cv
    }

    fn u(&self, t_k: f64) -> f64 {
        self.cv * (t_k - T_REF)
    }

    fn s0(&self, t_k: f64) -> f64 {
        self.cv * (t_k / T_REF).ln()
    }
}
