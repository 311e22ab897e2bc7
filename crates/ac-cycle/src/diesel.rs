//! Air-standard Diesel cycle.
//!
//! Differs from Otto only on the second leg: heat is added at constant
//! pressure until the peak temperature, so the charge expands during
//! addition and the cut-off ratio v₃/v₂ is recorded.

use ac_air::{AirModel, AirPolynomialCv, CvCorrelation, StateInput};
use ac_core::units::constants::M_AIR;
use ac_core::units::pa;
use uom::si::{thermodynamic_temperature::kelvin, volume::cubic_meter};

use crate::curves::CurveBuilder;
use crate::error::CycleError;
use crate::inputs::CycleInputs;
use crate::result::{CycleResult, EnergyBalance};

/// Diesel cycle sequencer.
#[derive(Debug, Clone)]
pub struct DieselCycle<C: CvCorrelation = AirPolynomialCv> {
    model: AirModel<C>,
    curve_builder: CurveBuilder,
    name: String,
}

impl DieselCycle<AirPolynomialCv> {
    /// Diesel cycle over the default dry-air correlation.
    pub fn new() -> Self {
        Self::with_model(AirModel::air())
    }
}

impl Default for DieselCycle<AirPolynomialCv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CvCorrelation> DieselCycle<C> {
    pub fn with_model(model: AirModel<C>) -> Self {
        Self {
            model,
            curve_builder: CurveBuilder::default(),
            name: "Air-Standard Diesel Cycle".into(),
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

        // Constant-pressure "heat addition" below T2 would be a cooling leg
        if inputs.t_peak.get::<kelvin>() <= state2.temperature {
            return Err(CycleError::InvalidInput {
                what: "peak temperature does not exceed the end-of-compression temperature",
            });
        }

        let state3 = self.model.solve(
            StateInput::PT {
                p: pa(state2.pressure),
                t: inputs.t_peak,
            },
            "3",
        )?;
        let cutoff_ratio = state3.molar_volume / state2.molar_volume;

        let state4 = self.model.solve(
            StateInput::VS {
                v: state1.molar_volume,
                s: state3.entropy,
            },
            "4",
        )?;

        let compression_work = state2.internal_energy - state1.internal_energy;
        // Boundary work of the constant-pressure leg, P·(v₃ − v₂)
        let addition_work = (state3.enthalpy - state2.enthalpy)
            - (state3.internal_energy - state2.internal_energy);
        let expansion_work = state3.internal_energy - state4.internal_energy;
        let power_work = addition_work + expansion_work;
        let net_work = power_work - compression_work;
        let heat_added = state3.enthalpy - state2.enthalpy;
        let heat_rejected = state4.internal_energy - state1.internal_energy;
        let efficiency_pct = 100.0 * (1.0 - heat_rejected / heat_added);

        let moles_kmol = inputs.v_cylinder.get::<cubic_meter>() / state1.molar_volume;
        let mass_kg = moles_kmol * M_AIR;

        let states = [state1, state2, state3, state4];
        let (lower_curve, upper_curve) = self.curve_builder.build_diesel(&self.model, &states)?;

        tracing::debug!(efficiency_pct, cutoff_ratio, moles_kmol, "diesel cycle solved");

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
                cutoff_ratio: Some(cutoff_ratio),
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
        CycleInputs::from_si(101_325.0, 300.0, 1.0, 1500.0, 18.0).unwrap()
    }

    #[test]
    fn textbook_scenario_solves() {
        let result = DieselCycle::new().solve(&textbook_inputs()).unwrap();

        let [s1, s2, s3, s4] = &result.states;
        assert!((s1.temperature - 300.0).abs() < 1e-9);
        assert!(s2.temperature > 300.0 && s2.temperature < 1500.0);
        assert!((s3.temperature - 1500.0).abs() < 1e-9);
        assert!(s4.temperature > 300.0);

        // Heat added at constant pressure expands the charge
        let cutoff = result.energy.cutoff_ratio.expect("diesel records cutoff");
        assert!(cutoff > 1.0);
        assert!((s3.pressure - s2.pressure).abs() < 1e-6 * s2.pressure);

        assert!(result.energy.efficiency_pct > 0.0);
        assert!(result.energy.efficiency_pct < 100.0);
    }

    #[test]
    fn cutoff_ratio_is_temperature_ratio_at_constant_pressure() {
        let result = DieselCycle::new().solve(&textbook_inputs()).unwrap();
        let [_, s2, s3, _] = &result.states;
        let cutoff = result.energy.cutoff_ratio.unwrap();
        // Ideal gas at fixed P: v₃/v₂ = T₃/T₂
        assert!((cutoff - s3.temperature / s2.temperature).abs() < 1e-9);
    }

    #[test]
    fn efficiency_forms_agree() {
        let result = DieselCycle::new().solve(&textbook_inputs()).unwrap();
        let e = &result.energy;
        let from_heat = 100.0 * (1.0 - e.heat_rejected / e.heat_added);
        let from_work = 100.0 * e.net_work / e.heat_added;
        assert!((from_heat - from_work).abs() < 1e-6);
        assert!((e.efficiency_pct - from_heat).abs() < 1e-12);
    }

    #[test]
    fn first_law_closes() {
        let result = DieselCycle::new().solve(&textbook_inputs()).unwrap();
        let e = &result.energy;
        let closure = e.net_work - (e.heat_added - e.heat_rejected);
        assert!(closure.abs() < 1e-3, "closure residual = {closure}");
    }

    #[test]
    fn constant_cv_efficiency_matches_air_standard_formula() {
        let corr = ConstantCv::new();
        let gamma = corr.gamma();
        let cycle = DieselCycle::with_model(AirModel::with_correlation(corr));

        let ratio = 18.0;
        let inputs = CycleInputs::from_si(101_325.0, 300.0, 1.0, 1500.0, ratio).unwrap();
        let result = cycle.solve(&inputs).unwrap();

        // η = 1 − (1/r^(γ−1)) · (rc^γ − 1)/(γ·(rc − 1))
        let rc = result.energy.cutoff_ratio.unwrap();
        let analytic = 100.0
            * (1.0
                - ratio.powf(1.0 - gamma) * (rc.powf(gamma) - 1.0) / (gamma * (rc - 1.0)));
        assert!(
            (result.energy.efficiency_pct - analytic).abs() < 1e-6,
            "solved = {}, analytic = {}",
            result.energy.efficiency_pct,
            analytic
        );
    }

    #[test]
    fn peak_temperature_below_compression_end_is_rejected() {
        // T2 for r = 18 lands near 900 K, so an 800 K "peak" must fail
        let inputs = CycleInputs::from_si(101_325.0, 300.0, 1.0, 800.0, 18.0).unwrap();
        let err = DieselCycle::new().solve(&inputs).unwrap_err();
        assert!(matches!(err, CycleError::InvalidInput { .. }));
    }

    #[test]
    fn upper_curve_starts_on_the_constant_pressure_leg() {
        let result = DieselCycle::new().solve(&textbook_inputs()).unwrap();
        let [_, s2, s3, _] = &result.states;
        let first = result.upper_curve.first().unwrap();
        let mid = &result.upper_curve.states[10];
        assert!((first.pressure - s2.pressure).abs() < 1e-6 * s2.pressure);
        assert!((mid.pressure - s2.pressure).abs() < 1e-6 * s2.pressure);
        assert!(mid.molar_volume > s2.molar_volume && mid.molar_volume < s3.molar_volume);
    }
}
