//! Two-property state recovery for air.
//!
//! Given any supported pair of independent properties, `AirModel::solve`
//! returns a fully populated [`StateRecord`]. Pairs that include temperature
//! (or pressure and volume together) evaluate directly through the ideal-gas
//! relation P·v = R̄·T; the remaining pairs invert u(T) or s(T, v) for
//! temperature with the safeguarded Newton solver from `ac-solve`.
//!
//! Every solve is a pure function of its inputs and the active correlation;
//! no scratch state survives between calls.

use ac_core::units::constants::R_UNIVERSAL;
use ac_solve::{RootConfig, find_root};
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

use crate::correlation::{AirPolynomialCv, CvCorrelation, T_REF, V_REF};
use crate::error::{PropertyError, PropertyResult};
use crate::state::{StateInput, StateRecord};

/// The air property engine.
///
/// Generic over the specific-heat correlation so the verification suite can
/// swap in [`ConstantCv`](crate::ConstantCv) and compare against closed-form
/// results.
#[derive(Debug, Clone)]
pub struct AirModel<C: CvCorrelation = AirPolynomialCv> {
    correlation: C,
    root_config: RootConfig,
}

impl AirModel<AirPolynomialCv> {
    /// Create the default engine for dry air.
    pub fn air() -> Self {
        Self::with_correlation(AirPolynomialCv::new())
    }
}

impl Default for AirModel<AirPolynomialCv> {
    fn default() -> Self {
        Self::air()
    }
}

impl<C: CvCorrelation> AirModel<C> {
    /// Create an engine over an arbitrary correlation.
    pub fn with_correlation(correlation: C) -> Self {
        Self {
            correlation,
            // Residuals are J/kmol or J/(kmol·K); 1e-6 is ~1e-11 relative at
            // cycle magnitudes, well inside double precision.
            root_config: RootConfig {
                abs_tol: 1e-6,
                ..RootConfig::default()
            },
        }
    }

    pub fn correlation(&self) -> &C {
        &self.correlation
    }

    /// Recover the complete state determined by `input`.
    pub fn solve(&self, input: StateInput, name: impl Into<String>) -> PropertyResult<StateRecord> {
        let label = input.label();
        let (t_k, v) = match input {
            StateInput::PT { p, t } => {
                let p_pa = p.get::<pascal>();
                let t_k = t.get::<kelvin>();
                validation::validate_pressure(p_pa)?;
                validation::validate_temperature(t_k)?;
                self.check_range(t_k)?;
                (t_k, R_UNIVERSAL * t_k / p_pa)
            }
            StateInput::TV { t, v } => {
                let t_k = t.get::<kelvin>();
                validation::validate_temperature(t_k)?;
                validation::validate_molar_volume(v)?;
                self.check_range(t_k)?;
                (t_k, v)
            }
            StateInput::PV { p, v } => {
                let p_pa = p.get::<pascal>();
                validation::validate_pressure(p_pa)?;
                validation::validate_molar_volume(v)?;
                let t_k = p_pa * v / R_UNIVERSAL;
                self.check_range(t_k)?;
                (t_k, v)
            }
            StateInput::VS { v, s } => {
                validation::validate_molar_volume(v)?;
                validation::validate_finite(s, "entropy")?;
                let t_k = self.invert_entropy_at_volume(v, s)?;
                (t_k, v)
            }
            StateInput::VU { v, u } => {
                validation::validate_molar_volume(v)?;
                validation::validate_finite(u, "internal energy")?;
                let t_k = self.invert_energy_at_volume(u)?;
                (t_k, v)
            }
            StateInput::PS { p, s } => {
                let p_pa = p.get::<pascal>();
                validation::validate_pressure(p_pa)?;
                validation::validate_finite(s, "entropy")?;
                let t_k = self.invert_entropy_at_pressure(p_pa, s)?;
                (t_k, R_UNIVERSAL * t_k / p_pa)
            }
            StateInput::PH { p, h } => {
                let p_pa = p.get::<pascal>();
                validation::validate_pressure(p_pa)?;
                validation::validate_finite(h, "enthalpy")?;
                let t_k = self.invert_enthalpy_at_pressure(h)?;
                (t_k, R_UNIVERSAL * t_k / p_pa)
            }
        };

        tracing::debug!(
            pair = label,
            correlation = self.correlation.name(),
            t_k,
            v,
            "state solved"
        );
        Ok(self.record(t_k, v, name.into()))
    }

    /// Assemble the full record from the resolved (T, v) pair.
    fn record(&self, t_k: f64, v: f64, name: String) -> StateRecord {
        let c = &self.correlation;
        StateRecord {
            name,
            pressure: R_UNIVERSAL * t_k / v,
            temperature: t_k,
            molar_volume: v,
            internal_energy: c.u(t_k),
            enthalpy: c.h(t_k),
            entropy: c.s0(t_k) + R_UNIVERSAL * (v / V_REF).ln(),
        }
    }

    fn check_range(&self, t_k: f64) -> PropertyResult<()> {
        let (lo, hi) = self.correlation.temperature_range();
        if t_k < lo || t_k > hi {
            return Err(PropertyError::InvalidState {
                what: format!(
                    "temperature {t_k:.1} K outside correlation range [{lo}, {hi}] K"
                ),
            });
        }
        Ok(())
    }

    /// Find T such that s(T, v) = s_target at fixed molar volume.
    fn invert_entropy_at_volume(&self, v: f64, s_target: f64) -> PropertyResult<f64> {
        let c = &self.correlation;
        let volume_term = R_UNIVERSAL * (v / V_REF).ln();
        let f = |t: f64| c.s0(t) + volume_term - s_target;
        let df = |t: f64| c.cv(t) / t;

        // Constant-cv closed form as the Newton starting point
        let guess = T_REF * ((s_target - volume_term) / c.cv(T_REF)).exp();
        let result = find_root(f, df, c.temperature_range(), guess, &self.root_config)?;
        tracing::debug!(
            iterations = result.iterations,
            t_k = result.root,
            "s(T, v) inversion"
        );
        Ok(result.root)
    }

    /// Find T such that u(T) = u_target (volume does not enter u).
    fn invert_energy_at_volume(&self, u_target: f64) -> PropertyResult<f64> {
        let c = &self.correlation;
        let f = |t: f64| c.u(t) - u_target;
        let df = |t: f64| c.cv(t);

        let guess = T_REF + u_target / c.cv(T_REF);
        let result = find_root(f, df, c.temperature_range(), guess, &self.root_config)?;
        tracing::debug!(
            iterations = result.iterations,
            t_k = result.root,
            "u(T) inversion"
        );
        Ok(result.root)
    }

    /// Find T such that s(T, R̄T/P) = s_target at fixed pressure.
    fn invert_entropy_at_pressure(&self, p_pa: f64, s_target: f64) -> PropertyResult<f64> {
        let c = &self.correlation;
        let f = move |t: f64| {
            c.s0(t) + R_UNIVERSAL * (R_UNIVERSAL * t / (p_pa * V_REF)).ln() - s_target
        };
        // d/dT [s0 + R·ln T + const] = (cv + R)/T = cp/T
        let df = |t: f64| (c.cv(t) + R_UNIVERSAL) / t;

        let offset = R_UNIVERSAL * (R_UNIVERSAL * T_REF / (p_pa * V_REF)).ln();
        let guess = T_REF * ((s_target - offset) / (c.cv(T_REF) + R_UNIVERSAL)).exp();
        let result = find_root(f, df, c.temperature_range(), guess, &self.root_config)?;
        tracing::debug!(
            iterations = result.iterations,
            t_k = result.root,
            "s(T, P) inversion"
        );
        Ok(result.root)
    }

    /// Find T such that h(T) = h_target (pressure does not enter h).
    fn invert_enthalpy_at_pressure(&self, h_target: f64) -> PropertyResult<f64> {
        let c = &self.correlation;
        let f = |t: f64| c.h(t) - h_target;
        let df = |t: f64| c.cv(t) + R_UNIVERSAL;

        let guess = T_REF + (h_target - c.h(T_REF)) / (c.cv(T_REF) + R_UNIVERSAL);
        let result = find_root(f, df, c.temperature_range(), guess, &self.root_config)?;
        tracing::debug!(
            iterations = result.iterations,
            t_k = result.root,
            "h(T) inversion"
        );
        Ok(result.root)
    }
}

/// Validation helpers for solve inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p_pa: f64) -> PropertyResult<()> {
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(PropertyError::InvalidInput {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure absolute temperature is positive and finite.
    pub fn validate_temperature(t_k: f64) -> PropertyResult<()> {
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(PropertyError::InvalidInput {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure molar volume is positive and finite.
    pub fn validate_molar_volume(v: f64) -> PropertyResult<()> {
        if !v.is_finite() || v <= 0.0 {
            return Err(PropertyError::InvalidInput {
                what: "molar volume must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure a target property value is finite.
    pub fn validate_finite(value: f64, what: &'static str) -> PropertyResult<()> {
        if !value.is_finite() {
            return Err(PropertyError::InvalidInput { what });
        }
        Ok(())
    }
}
