//! Thermodynamic state definitions.
//!
//! States live on a molar basis and are stored in SI throughout: Pa, K,
//! m³/kmol, J/kmol, J/(kmol·K). Unit-system and basis conversion is a
//! presentation concern handled downstream; nothing here ever mutates a
//! solved state.

use ac_core::units::{Pressure, Temperature};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Molar volume [m³/kmol].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarVolume = f64;

/// Molar internal energy or enthalpy [J/kmol].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarEnergy = f64;

/// Molar entropy [J/(kmol·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarEntropy = f64;

/// Input specification for recovering a thermodynamic state.
///
/// Pressure and temperature arrive as uom quantities from the API boundary;
/// molar properties are plain SI f64s.
#[derive(Debug, Clone, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature.
    PT { p: Pressure, t: Temperature },
    /// Temperature and molar volume.
    TV { t: Temperature, v: MolarVolume },
    /// Pressure and molar volume.
    PV { p: Pressure, v: MolarVolume },
    /// Molar volume and molar entropy (isentropic legs).
    VS { v: MolarVolume, s: MolarEntropy },
    /// Molar volume and molar internal energy.
    VU { v: MolarVolume, u: MolarEnergy },
    /// Pressure and molar entropy.
    PS { p: Pressure, s: MolarEntropy },
    /// Pressure and molar enthalpy.
    PH { p: Pressure, h: MolarEnergy },
}

impl StateInput {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PT { .. } => "P-T",
            Self::TV { .. } => "T-v",
            Self::PV { .. } => "P-v",
            Self::VS { .. } => "v-s",
            Self::VU { .. } => "v-u",
            Self::PS { .. } => "P-s",
            Self::PH { .. } => "P-h",
        }
    }
}

/// One fully solved equilibrium state of the working fluid.
///
/// Created exclusively by [`AirModel::solve`](crate::AirModel::solve) and
/// immutable afterwards; re-solving produces a new record rather than
/// mutating an old one. All six properties are mutually consistent under the
/// correlation that solved them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Display name ("1" through "4" for cycle corner states)
    pub name: String,
    /// Pressure [Pa]
    pub pressure: f64,
    /// Temperature [K]
    pub temperature: f64,
    /// Molar volume [m³/kmol]
    pub molar_volume: MolarVolume,
    /// Molar internal energy [J/kmol]
    pub internal_energy: MolarEnergy,
    /// Molar enthalpy [J/kmol]
    pub enthalpy: MolarEnergy,
    /// Molar entropy [J/(kmol·K)]
    pub entropy: MolarEntropy,
}

impl StateRecord {
    /// Look up one property by key, for column-wise queries.
    pub fn property(&self, key: PropertyKey) -> f64 {
        match key {
            PropertyKey::Pressure => self.pressure,
            PropertyKey::Temperature => self.temperature,
            PropertyKey::MolarVolume => self.molar_volume,
            PropertyKey::InternalEnergy => self.internal_energy,
            PropertyKey::Enthalpy => self.enthalpy,
            PropertyKey::Entropy => self.entropy,
        }
    }
}

/// Identifies one of the six state properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKey {
    Pressure,
    Temperature,
    MolarVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 6] = [
        PropertyKey::Pressure,
        PropertyKey::Temperature,
        PropertyKey::MolarVolume,
        PropertyKey::InternalEnergy,
        PropertyKey::Enthalpy,
        PropertyKey::Entropy,
    ];

    /// Single-letter symbol used on plot axes and the CLI.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pressure => "P",
            Self::Temperature => "T",
            Self::MolarVolume => "v",
            Self::InternalEnergy => "u",
            Self::Enthalpy => "h",
            Self::Entropy => "s",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for PropertyKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "P" | "p" => Ok(Self::Pressure),
            "T" | "t" => Ok(Self::Temperature),
            "v" | "V" => Ok(Self::MolarVolume),
            "u" | "U" => Ok(Self::InternalEnergy),
            "h" | "H" => Ok(Self::Enthalpy),
            "s" | "S" => Ok(Self::Entropy),
            other => Err(format!(
                "unknown property '{other}' (expected one of P, T, v, u, h, s)"
            )),
        }
    }
}
