//! Unit-system and basis conversion for presentation.
//!
//! Everything upstream is SI on a molar basis; this module owns the fixed
//! factor/label table for the English system and the per-mass/total basis
//! rescaling. Conversion is display-only: switching the system never touches
//! solved states.

use ac_air::PropertyKey;
use ac_core::units::constants::M_AIR;
use serde::{Deserialize, Serialize};

const RANKINE_PER_KELVIN: f64 = 1.8;
const PA_PER_PSIA: f64 = 6_894.757;
const FT3_PER_M3: f64 = 35.314_667;
const LBMOL_PER_KMOL: f64 = 2.204_623;
const LBM_PER_KG: f64 = 2.204_623;
const J_PER_BTU: f64 = 1_055.055_85;

/// Active unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Si,
    English,
}

/// Basis for extensive properties (volume, energy, entropy).
///
/// Temperature and pressure are intensive and ignore the basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Basis {
    /// Per kmol, as stored
    #[default]
    Molar,
    /// Per kg (molar value ÷ M)
    PerMass,
    /// Total for the cylinder charge (molar value × n)
    Total,
}

/// Converts solved SI molar values for display and English inputs to SI.
///
/// One mutable flag (the system) plus a fixed factor table; owned by
/// whichever front end is presenting a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitConverter {
    system: UnitSystem,
}

impl UnitConverter {
    pub fn new(system: UnitSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn set_system(&mut self, system: UnitSystem) {
        self.system = system;
    }

    fn english(&self) -> bool {
        self.system == UnitSystem::English
    }

    // ---- input conversion (active system → SI) ----

    /// Temperature input in the active system → K.
    pub fn temperature_to_si(&self, value: f64) -> f64 {
        if self.english() {
            value / RANKINE_PER_KELVIN
        } else {
            value
        }
    }

    /// Pressure input in the active system → Pa.
    pub fn pressure_to_si(&self, value: f64) -> f64 {
        if self.english() {
            value * PA_PER_PSIA
        } else {
            value
        }
    }

    /// Cylinder-volume input in the active system → m³.
    pub fn volume_to_si(&self, value: f64) -> f64 {
        if self.english() {
            value / FT3_PER_M3
        } else {
            value
        }
    }

    // ---- display conversion (SI molar → active system + basis) ----

    /// Multiplier taking one stored property value to the active unit system
    /// and basis. `n_kmol` only enters for the total basis.
    pub fn property_factor(&self, key: PropertyKey, basis: Basis, n_kmol: f64) -> f64 {
        match key {
            PropertyKey::Temperature => {
                if self.english() {
                    RANKINE_PER_KELVIN
                } else {
                    1.0
                }
            }
            PropertyKey::Pressure => {
                if self.english() {
                    1.0 / PA_PER_PSIA
                } else {
                    1.0
                }
            }
            PropertyKey::MolarVolume => {
                let basis_factor = match basis {
                    Basis::Molar => 1.0,
                    Basis::PerMass => 1.0 / M_AIR,
                    Basis::Total => n_kmol,
                };
                let unit_factor = if self.english() {
                    match basis {
                        // ft³/lbmol and ft³/lbm share the numeric factor
                        // because kmol→lbmol and kg→lbm share 2.204623
                        Basis::Molar | Basis::PerMass => FT3_PER_M3 / LBMOL_PER_KMOL,
                        Basis::Total => FT3_PER_M3,
                    }
                } else {
                    1.0
                };
                basis_factor * unit_factor
            }
            PropertyKey::InternalEnergy | PropertyKey::Enthalpy => {
                let basis_factor = match basis {
                    Basis::Molar => 1.0,
                    Basis::PerMass => 1.0 / M_AIR,
                    Basis::Total => n_kmol,
                };
                let unit_factor = if self.english() {
                    match basis {
                        Basis::Molar | Basis::PerMass => {
                            1.0 / (J_PER_BTU * LBMOL_PER_KMOL) // = 1/2326
                        }
                        Basis::Total => 1.0 / J_PER_BTU,
                    }
                } else {
                    1.0
                };
                basis_factor * unit_factor
            }
            PropertyKey::Entropy => {
                let basis_factor = match basis {
                    Basis::Molar => 1.0,
                    Basis::PerMass => 1.0 / M_AIR,
                    Basis::Total => n_kmol,
                };
                let unit_factor = if self.english() {
                    match basis {
                        Basis::Molar | Basis::PerMass => {
                            1.0 / (J_PER_BTU * LBMOL_PER_KMOL * RANKINE_PER_KELVIN) // = 1/4186.8
                        }
                        Basis::Total => 1.0 / (J_PER_BTU * RANKINE_PER_KELVIN),
                    }
                } else {
                    1.0
                };
                basis_factor * unit_factor
            }
        }
    }

    /// Convert one stored value.
    pub fn convert(&self, value: f64, key: PropertyKey, basis: Basis, n_kmol: f64) -> f64 {
        value * self.property_factor(key, basis, n_kmol)
    }

    /// Convert a curve column in place-order.
    pub fn convert_column(
        &self,
        values: &[f64],
        key: PropertyKey,
        basis: Basis,
        n_kmol: f64,
    ) -> Vec<f64> {
        let factor = self.property_factor(key, basis, n_kmol);
        values.iter().map(|v| v * factor).collect()
    }

    /// Amount of substance for display (kmol or lbmol).
    pub fn amount(&self, n_kmol: f64) -> f64 {
        if self.english() {
            n_kmol * LBMOL_PER_KMOL
        } else {
            n_kmol
        }
    }

    /// Mass for display (kg or lbm).
    pub fn mass(&self, mass_kg: f64) -> f64 {
        if self.english() {
            mass_kg * LBM_PER_KG
        } else {
            mass_kg
        }
    }

    pub fn amount_label(&self) -> &'static str {
        if self.english() { "lbmol" } else { "kmol" }
    }

    pub fn mass_label(&self) -> &'static str {
        if self.english() { "lbm" } else { "kg" }
    }

    /// Unit label for one property in the active system and basis.
    pub fn property_label(&self, key: PropertyKey, basis: Basis) -> &'static str {
        let english = self.english();
        match key {
            PropertyKey::Temperature => {
                if english {
                    "°R"
                } else {
                    "K"
                }
            }
            PropertyKey::Pressure => {
                if english {
                    "psia"
                } else {
                    "Pa"
                }
            }
            PropertyKey::MolarVolume => match (english, basis) {
                (false, Basis::Molar) => "m³/kmol",
                (false, Basis::PerMass) => "m³/kg",
                (false, Basis::Total) => "m³",
                (true, Basis::Molar) => "ft³/lbmol",
                (true, Basis::PerMass) => "ft³/lbm",
                (true, Basis::Total) => "ft³",
            },
            PropertyKey::InternalEnergy | PropertyKey::Enthalpy => match (english, basis) {
                (false, Basis::Molar) => "J/kmol",
                (false, Basis::PerMass) => "J/kg",
                (false, Basis::Total) => "J",
                (true, Basis::Molar) => "BTU/lbmol",
                (true, Basis::PerMass) => "BTU/lbm",
                (true, Basis::Total) => "BTU",
            },
            PropertyKey::Entropy => match (english, basis) {
                (false, Basis::Molar) => "J/(kmol·K)",
                (false, Basis::PerMass) => "J/(kg·K)",
                (false, Basis::Total) => "J/K",
                (true, Basis::Molar) => "BTU/(lbmol·°R)",
                (true, Basis::PerMass) => "BTU/(lbm·°R)",
                (true, Basis::Total) => "BTU/°R",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> UnitConverter {
        UnitConverter::new(UnitSystem::English)
    }

    fn si() -> UnitConverter {
        UnitConverter::new(UnitSystem::Si)
    }

    #[test]
    fn si_factors_are_identity_on_molar_basis() {
        let uc = si();
        for key in PropertyKey::ALL {
            assert_eq!(uc.property_factor(key, Basis::Molar, 1.0), 1.0);
        }
    }

    #[test]
    fn english_temperature_is_rankine() {
        let uc = english();
        let t = uc.convert(300.0, PropertyKey::Temperature, Basis::Molar, 1.0);
        assert!((t - 540.0).abs() < 1e-9);
        // And the input direction undoes it
        assert!((uc.temperature_to_si(540.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn english_pressure_is_psia() {
        let uc = english();
        let p = uc.convert(101_325.0, PropertyKey::Pressure, Basis::Molar, 1.0);
        assert!((p - 14.6959).abs() < 1e-3);
    }

    #[test]
    fn english_molar_energy_is_btu_per_lbmol() {
        let uc = english();
        let e = uc.convert(2326.0 * LBMOL_PER_KMOL, PropertyKey::InternalEnergy, Basis::Molar, 1.0);
        // 2326 J/kg ≙ 1 BTU/lbm; on a molar basis the same numeric factor applies
        assert!((e - LBMOL_PER_KMOL).abs() < 1e-9);
    }

    #[test]
    fn per_mass_basis_divides_by_molar_mass() {
        let uc = si();
        let e = uc.convert(M_AIR, PropertyKey::Enthalpy, Basis::PerMass, 1.0);
        assert!((e - 1.0).abs() < 1e-12);
    }

    #[test]
    fn total_basis_multiplies_by_moles() {
        let uc = si();
        let n = 0.04;
        let e = uc.convert(1.0e6, PropertyKey::InternalEnergy, Basis::Total, n);
        assert!((e - 4.0e4).abs() < 1e-9);
    }

    #[test]
    fn total_english_energy_is_plain_btu() {
        let uc = english();
        let n = 2.0;
        let e = uc.convert(J_PER_BTU, PropertyKey::InternalEnergy, Basis::Total, n);
        assert!((e - 2.0).abs() < 1e-12);
    }

    #[test]
    fn switching_system_only_changes_the_flag() {
        let mut uc = si();
        let stored = 1234.5;
        let before = uc.convert(stored, PropertyKey::Entropy, Basis::Molar, 1.0);
        uc.set_system(UnitSystem::English);
        let after_english = uc.convert(stored, PropertyKey::Entropy, Basis::Molar, 1.0);
        uc.set_system(UnitSystem::Si);
        let after = uc.convert(stored, PropertyKey::Entropy, Basis::Molar, 1.0);
        // The stored value never moved; only the displayed value did
        assert_eq!(before, after);
        assert!((after_english - stored / 4186.8).abs() < 1e-6);
    }

    #[test]
    fn labels_follow_system_and_basis() {
        let uc = english();
        assert_eq!(uc.property_label(PropertyKey::Temperature, Basis::Molar), "°R");
        assert_eq!(
            uc.property_label(PropertyKey::Entropy, Basis::PerMass),
            "BTU/(lbm·°R)"
        );
        assert_eq!(uc.property_label(PropertyKey::MolarVolume, Basis::Total), "ft³");
        assert_eq!(si().property_label(PropertyKey::Pressure, Basis::Molar), "Pa");
    }
}
