//! Cycle boundary conditions.

use ac_core::units::{Pressure, Temperature, Volume, k, m3, pa};
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin, volume::cubic_meter};

use crate::error::CycleError;

/// The six scalars that define a cycle solve (the cycle kind is the choice
/// of sequencer type; the unit system is a presentation concern and inputs
/// arrive here already in SI).
#[derive(Debug, Clone, PartialEq)]
pub struct CycleInputs {
    /// Initial (bottom-dead-center) pressure
    pub p_initial: Pressure,
    /// Initial temperature
    pub t_initial: Temperature,
    /// Cylinder volume at bottom dead center
    pub v_cylinder: Volume,
    /// Peak temperature reached at the end of heat addition
    pub t_peak: Temperature,
    /// Compression ratio V₁/V₂
    pub compression_ratio: f64,
}

impl CycleInputs {
    /// Validate and construct. Rejects inadmissible boundary conditions
    /// before any property solve is attempted.
    pub fn new(
        p_initial: Pressure,
        t_initial: Temperature,
        v_cylinder: Volume,
        t_peak: Temperature,
        compression_ratio: f64,
    ) -> Result<Self, CycleError> {
        let p = p_initial.get::<pascal>();
        if !p.is_finite() || p <= 0.0 {
            return Err(CycleError::InvalidInput {
                what: "initial pressure must be positive and finite",
            });
        }

        let t0 = t_initial.get::<kelvin>();
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(CycleError::InvalidInput {
                what: "initial temperature must be positive and finite",
            });
        }

        let v = v_cylinder.get::<cubic_meter>();
        if !v.is_finite() || v <= 0.0 {
            return Err(CycleError::InvalidInput {
                what: "cylinder volume must be positive and finite",
            });
        }

        let t_hi = t_peak.get::<kelvin>();
        if !t_hi.is_finite() || t_hi <= t0 {
            return Err(CycleError::InvalidInput {
                what: "peak temperature must exceed the initial temperature",
            });
        }

        if !compression_ratio.is_finite() || compression_ratio <= 1.0 {
            return Err(CycleError::InvalidInput {
                what: "compression ratio must exceed 1",
            });
        }

        Ok(Self {
            p_initial,
            t_initial,
            v_cylinder,
            t_peak,
            compression_ratio,
        })
    }

    /// Convenience constructor from raw SI scalars.
    pub fn from_si(
        p_initial_pa: f64,
        t_initial_k: f64,
        v_cylinder_m3: f64,
        t_peak_k: f64,
        compression_ratio: f64,
    ) -> Result<Self, CycleError> {
        Self::new(
            pa(p_initial_pa),
            k(t_initial_k),
            m3(v_cylinder_m3),
            k(t_peak_k),
            compression_ratio,
        )
    }
}
