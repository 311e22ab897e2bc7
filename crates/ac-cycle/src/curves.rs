//! Process-leg discretization for property diagrams.
//!
//! Rebuilt in full on every cycle solve. The lower curve is the compression
//! leg 1→2; the upper curve concatenates heat addition, expansion, and heat
//! rejection (2→3, 3→4, 4→1) in cycle order so plotting it in sequence
//! traces a continuous path.

use ac_air::{AirModel, CvCorrelation, PropertyKey, StateInput, StateRecord};
use ac_core::units::{k, pa};
use serde::{Deserialize, Serialize};

use crate::error::CycleError;

/// Which branch of the diagram a curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    /// Compression leg 1→2
    Lower,
    /// Heat addition + expansion + rejection legs 2→3→4→1
    Upper,
}

/// An ordered sequence of intermediate states along one branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub branch: Branch,
    pub states: Vec<StateRecord>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// One property of every sample, in order (column-wise query).
    pub fn column(&self, key: PropertyKey) -> Vec<f64> {
        self.states.iter().map(|s| s.property(key)).collect()
    }

    pub fn first(&self) -> Option<&StateRecord> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&StateRecord> {
        self.states.last()
    }
}

/// Discretizes the legs of a solved cycle by re-invoking the property engine
/// with each leg's governing constraint held fixed.
#[derive(Debug, Clone, Copy)]
pub struct CurveBuilder {
    samples_per_leg: usize,
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self {
            samples_per_leg: 30,
        }
    }
}

impl CurveBuilder {
    pub fn new(samples_per_leg: usize) -> Result<Self, CycleError> {
        if samples_per_leg < 2 {
            return Err(CycleError::InvalidInput {
                what: "curve legs need at least 2 samples",
            });
        }
        Ok(Self { samples_per_leg })
    }

    pub fn samples_per_leg(&self) -> usize {
        self.samples_per_leg
    }

    /// Curves for an Otto cycle: constant-volume heat addition sweeps
    /// temperature; both isentropic legs sweep volume.
    pub fn build_otto<C: CvCorrelation>(
        &self,
        model: &AirModel<C>,
        states: &[StateRecord; 4],
    ) -> Result<(Curve, Curve), CycleError> {
        let [s1, s2, s3, s4] = states;
        let n = self.samples_per_leg;

        let mut lower = Vec::with_capacity(n);
        for v in linspace(s1.molar_volume, s2.molar_volume, n) {
            lower.push(model.solve(StateInput::VS { v, s: s1.entropy }, "1-2")?);
        }

        let mut upper = Vec::with_capacity(3 * n);
        for t in linspace(s2.temperature, s3.temperature, n) {
            upper.push(model.solve(
                StateInput::TV {
                    t: k(t),
                    v: s2.molar_volume,
                },
                "2-3",
            )?);
        }
        for v in linspace(s3.molar_volume, s4.molar_volume, n) {
            upper.push(model.solve(StateInput::VS { v, s: s3.entropy }, "3-4")?);
        }
        for t in linspace(s4.temperature, s1.temperature, n) {
            upper.push(model.solve(
                StateInput::TV {
                    t: k(t),
                    v: s4.molar_volume,
                },
                "4-1",
            )?);
        }

        Ok((
            Curve {
                branch: Branch::Lower,
                states: lower,
            },
            Curve {
                branch: Branch::Upper,
                states: upper,
            },
        ))
    }

    /// Curves for a Diesel cycle: the constant-pressure heat addition sweeps
    /// volume at p₂; the remaining legs match the Otto layout.
    pub fn build_diesel<C: CvCorrelation>(
        &self,
        model: &AirModel<C>,
        states: &[StateRecord; 4],
    ) -> Result<(Curve, Curve), CycleError> {
        let [s1, s2, s3, s4] = states;
        let n = self.samples_per_leg;

        let mut lower = Vec::with_capacity(n);
        for v in linspace(s1.molar_volume, s2.molar_volume, n) {
            lower.push(model.solve(StateInput::VS { v, s: s1.entropy }, "1-2")?);
        }

        let mut upper = Vec::with_capacity(3 * n);
        for v in linspace(s2.molar_volume, s3.molar_volume, n) {
            upper.push(model.solve(
                StateInput::PV {
                    p: pa(s2.pressure),
                    v,
                },
                "2-3",
            )?);
        }
        for v in linspace(s3.molar_volume, s4.molar_volume, n) {
            upper.push(model.solve(StateInput::VS { v, s: s3.entropy }, "3-4")?);
        }
        for t in linspace(s4.temperature, s1.temperature, n) {
            upper.push(model.solve(
                StateInput::TV {
                    t: k(t),
                    v: s4.molar_volume,
                },
                "4-1",
            )?);
        }

        Ok((
            Curve {
                branch: Branch::Lower,
                states: lower,
            },
            Curve {
                branch: Branch::Upper,
                states: upper,
            },
        ))
    }
}

/// Uniformly spaced points with the exact endpoint enforced.
fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    if num_points <= 1 {
        return vec![start];
    }

    let mut points = Vec::with_capacity(num_points);
    let delta = (end - start) / (num_points - 1) as f64;
    for i in 0..num_points {
        points.push(start + i as f64 * delta);
    }

    // Ensure exact endpoint
    points[num_points - 1] = end;
    points
}
