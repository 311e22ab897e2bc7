//! Solved-cycle data.

use ac_air::{MolarEnergy, StateRecord};
use serde::{Deserialize, Serialize};

use crate::curves::Curve;

/// Molar energy balance of one solved cycle.
///
/// All terms are J/kmol and follow the convention that compression work is
/// stored positive; net work is power work minus compression work, so
/// first-law closure `net_work = heat_added − heat_rejected` holds for both
/// cycle variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// Work of compression, u₂ − u₁ [J/kmol]
    pub compression_work: MolarEnergy,
    /// Work of the expansion stroke(s) [J/kmol]
    pub power_work: MolarEnergy,
    /// Net cycle work [J/kmol]
    pub net_work: MolarEnergy,
    /// Heat supplied during heat addition [J/kmol]
    pub heat_added: MolarEnergy,
    /// Heat rejected closing the cycle [J/kmol]
    pub heat_rejected: MolarEnergy,
    /// Thermal efficiency [percent]
    pub efficiency_pct: f64,
    /// Cut-off ratio v₃/v₂ (Diesel only)
    pub cutoff_ratio: Option<f64>,
}

/// Everything one cycle solve produces.
///
/// Built atomically by a single `solve` call and fully replaced by the next
/// one; the sequencers hold no result state, so a failed re-solve cannot
/// corrupt a previously returned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// Cycle display name
    pub name: String,
    /// Corner states 1–4 in cycle order
    pub states: [StateRecord; 4],
    /// Molar energy balance
    pub energy: EnergyBalance,
    /// Amount of working fluid, V_cyl / v₁ [kmol]
    pub moles_kmol: f64,
    /// Mass of working fluid, n·M [kg]
    pub mass_kg: f64,
    /// Compression leg 1→2
    pub lower_curve: Curve,
    /// Heat addition, expansion, and rejection legs 2→3→4→1
    pub upper_curve: Curve,
}

impl CycleResult {
    /// Scale a molar energy term [J/kmol] to the total for the cylinder [J].
    pub fn total_energy(&self, molar: MolarEnergy) -> f64 {
        molar * self.moles_kmol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Branch;

    fn state(name: &str) -> StateRecord {
        StateRecord {
            name: name.into(),
            pressure: 101_325.0,
            temperature: 300.0,
            molar_volume: 24.6,
            internal_energy: 0.0,
            enthalpy: 2.49e6,
            entropy: 0.0,
        }
    }

    #[test]
    fn result_serializes_and_round_trips() {
        let result = CycleResult {
            name: "Air-Standard Otto Cycle".into(),
            states: [state("1"), state("2"), state("3"), state("4")],
            energy: EnergyBalance {
                compression_work: 8.0e6,
                power_work: 2.0e7,
                net_work: 1.2e7,
                heat_added: 2.1e7,
                heat_rejected: 9.0e6,
                efficiency_pct: 57.1,
                cutoff_ratio: None,
            },
            moles_kmol: 0.0406,
            mass_kg: 1.177,
            lower_curve: Curve {
                branch: Branch::Lower,
                states: vec![state("1-2")],
            },
            upper_curve: Curve {
                branch: Branch::Upper,
                states: vec![state("2-3")],
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: CycleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn total_energy_scales_by_moles() {
        let result = CycleResult {
            name: "x".into(),
            states: [state("1"), state("2"), state("3"), state("4")],
            energy: EnergyBalance {
                compression_work: 0.0,
                power_work: 0.0,
                net_work: 0.0,
                heat_added: 0.0,
                heat_rejected: 0.0,
                efficiency_pct: 0.0,
                cutoff_ratio: None,
            },
            moles_kmol: 2.0,
            mass_kg: 57.9,
            lower_curve: Curve {
                branch: Branch::Lower,
                states: vec![],
            },
            upper_curve: Curve {
                branch: Branch::Upper,
                states: vec![],
            },
        };
        assert_eq!(result.total_energy(3.0), 6.0);
    }
}
