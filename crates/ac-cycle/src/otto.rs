//! Air-standard Otto cycle.
//!
//! 1→2 isentropic compression, 2→3 constant-volume heat addition to the
//! peak temperature, 3→4 isentropic expansion back to the initial volume,
//! 4→1 constant-volume heat rejection (implicit; it only enters the heat
//! balance).

use ac_air::{AirModel, AirPolynomialCv, CvCorrelation, StateInput};
use ac_core::units::constants::M_AIR;
use uom::si::{thermodynamic_temperature::kelvin, volume::cubic_meter};

use crate::curves::CurveBuilder;
use crate::error::CycleError;
use crate::inputs::CycleInputs;
use crate::result::{CycleResult, EnergyBalance};

/// Otto cycle sequencer.
///
/// Owns its property engine and curve builder; `solve` is pure, so a failed
/// re-solve cannot disturb a previously returned result.
#[derive(Debug, Clone)]
pub struct OttoCycle<C: CvCorrelation = AirPolynomialCv> {
    model: AirModel<C>,
    curve_builder: CurveBuilder,
    name: String,
}

impl OttoCycle<AirPolynomialCv> {
    /// Otto cycle over the default dry-air correlation.
    pub fn new() -> Self {
        Self::with_model(AirModel::air())
    }
}

impl Default for OttoCycle<AirPolynomialCv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CvCorrelation> OttoCycle<C> {
    pub fn with_model(model: AirModel<C>) -> Self {
        Self {
            model,
            curve_builder: CurveBuilder::default(),
            name: "Air-Standard Otto Cycle".into(),
        }
    }

    pub fn with_curve_builder(mut self, curve_builder: CurveBuilder) -> Self {
        self.curve_builder = curve_builder;
        self
    }

    pub fn model(&self) -> &AirModel<C> {
        &self.model
    }

    /// Solve the four corner states, the molar energy balance, and the
    /// plotting curves for the given boundary conditions.
    pub fn solve(&self, inputs: &CycleInputs) -> Result<CycleResult, CycleError> {
        let state1 = self.model.solve(
            StateInput::PT {
                p: inputs.p_initial,
                t: inputs.t_initial,
            },
            "1",
        )?;

        let state2 = self.model.solve(
            StateInput::VS {
                v: state1.molar_volume / inputs.compression_ratio,
                s: state1.entropy,
            },
            "2",
        )?;

        // Heat addition must actually heat: a peak temperature at or below
        // T2 would make the 2→3 leg a cooling process.
        if inputs.t_peak.get::<kelvin>() <= state2.temperature {
            return Err(CycleError::InvalidInput {
                what: "peak temperature does not exceed the end-of-compression temperature",
            });
        }

        let state3 = self.model.solve(
            StateInput::TV {
                t: inputs.t_peak,
                v: state2.molar_volume,
            },
            "3",
        )?;

        let state4 = self.model.solve(
            StateInput::VS {
                v: state1.molar_volume,
                s: state3.entropy,
            },
            "4",
        )?;

        let compression_work = state2.internal_energy - state1.internal_energy;
        let power_work = state3.internal_energy - state4.internal_energy;
        let net_work = power_work - compression_work;
        let heat_added = state3.internal_energy - state2.internal_energy;
        let heat_rejected = state4.internal_energy - state1.internal_energy;
        let efficiency_pct = 100.0 * net_work / heat_added;

        let moles_kmol = inputs.v_cylinder.get::<cubic_meter>() / state1.molar_volume;
        let mass_kg = moles_kmol * M_AIR;

        let states = [state1, state2, state3, state4];
        let (lower_curve, upper_curve) = self.curve_builder.build_otto(&self.model, &states)?;

        tracing::debug!(efficiency_pct, net_work, moles_kmol, "otto cycle solved");

        Ok(CycleResult {
            name: self.name.clone(),
            states,
            energy: EnergyBalance {
                compression_work,
                power_work,
                net_work,
                heat_added,
                heat_rejected,
                efficiency_pct,
                cutoff_ratio: None,
            },
            moles_kmol,
            mass_kg,
            lower_curve,
            upper_curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_air::ConstantCv;

    fn textbook_inputs() -> CycleInputs {
        CycleInputs::from_si(101_325.0, 300.0, 1.0, 1500.0, 8.0).unwrap()
    }

    #[test]
    fn textbook_scenario_solves() {
        let result = OttoCycle::new().solve(&textbook_inputs()).unwrap();

        let [s1, s2, s3, s4] = &result.states;
        assert!((s1.temperature - 300.0).abs() < 1e-9);
        assert!(s2.temperature > 300.0 && s2.temperature < 1500.0);
        assert!((s3.temperature - 1500.0).abs() < 1e-9);
        assert!(s4.temperature > 300.0 && s4.temperature < s3.temperature);

        assert!(result.energy.efficiency_pct > 0.0);
        assert!(result.energy.efficiency_pct < 100.0);
        assert!(result.energy.cutoff_ratio.is_none());
    }

    #[test]
    fn isentropic_legs_hold_entropy() {
        let result = OttoCycle::new().solve(&textbook_inputs()).unwrap();
        let [s1, s2, s3, s4] = &result.states;
        assert!((s1.entropy - s2.entropy).abs() < 1e-6);
        assert!((s3.entropy - s4.entropy).abs() < 1e-6);
    }

    #[test]
    fn compression_ratio_sets_volume_ratio() {
        let result = OttoCycle::new().solve(&textbook_inputs()).unwrap();
        let [s1, s2, _, s4] = &result.states;
        assert!((s2.molar_volume - s1.molar_volume / 8.0).abs() < 1e-9);
        // Expansion returns to the initial volume
        assert!((s4.molar_volume - s1.molar_volume).abs() < 1e-9);
    }

    #[test]
    fn first_law_closes() {
        let result = OttoCycle::new().solve(&textbook_inputs()).unwrap();
        let e = &result.energy;
        let closure = e.net_work - (e.heat_added - e.heat_rejected);
        assert!(closure.abs() < 1e-3, "closure residual = {closure}");
    }

    #[test]
    fn extensive_scaling_is_cylinder_over_molar_volume() {
        let result = OttoCycle::new().solve(&textbook_inputs()).unwrap();
        let expected_n = 1.0 / result.states[0].molar_volume;
        assert!((result.moles_kmol - expected_n).abs() < 1e-12);
        assert!((result.mass_kg - expected_n * M_AIR).abs() < 1e-9);
        // About 1.18 kg of air in 1 m³ at ambient conditions
        assert!((result.mass_kg - 1.177).abs() < 0.01);
    }

    #[test]
    fn constant_cv_efficiency_matches_air_standard_formula() {
        let corr = ConstantCv::new();
        let gamma = corr.gamma();
        let cycle = OttoCycle::with_model(AirModel::with_correlation(corr));

        let ratio = 8.0;
        let inputs = CycleInputs::from_si(101_325.0, 300.0, 1.0, 1500.0, ratio).unwrap();
        let result = cycle.solve(&inputs).unwrap();

        let analytic = 100.0 * (1.0 - ratio.powf(1.0 - gamma));
        assert!(
            (result.energy.efficiency_pct - analytic).abs() < 1e-6,
            "solved = {}, analytic = {}",
            result.energy.efficiency_pct,
            analytic
        );
    }

    #[test]
    fn peak_temperature_below_compression_end_is_rejected() {
        // T2 for r = 8 lands near 670 K, so a 500 K "peak" must fail
        let inputs = CycleInputs::from_si(101_325.0, 300.0, 1.0, 500.0, 8.0).unwrap();
        let err = OttoCycle::new().solve(&inputs).unwrap_err();
        assert!(matches!(err, CycleError::InvalidInput { .. }));
    }

    #[test]
    fn curves_are_rebuilt_with_configured_resolution() {
        let cycle = OttoCycle::new().with_curve_builder(CurveBuilder::new(12).unwrap());
        let result = cycle.solve(&textbook_inputs()).unwrap();
        assert_eq!(result.lower_curve.len(), 12);
        assert_eq!(result.upper_curve.len(), 36);
    }
}
