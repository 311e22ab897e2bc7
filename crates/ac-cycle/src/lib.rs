//! ac-cycle: air-standard engine cycle analysis for aircycle.
//!
//! Provides:
//! - Validated cycle boundary conditions (`CycleInputs`)
//! - Otto and Diesel sequencers that chain four property solves through the
//!   cycle's process constraints and close the energy balance
//! - Curve discretization of each process leg for property diagrams
//! - Unit-system and basis conversion for presentation
//!
//! # Example
//!
//! ```
//! use ac_core::units::{pa, k, m3};
//! use ac_cycle::{CycleInputs, OttoCycle};
//!
//! let inputs = CycleInputs::new(pa(101_325.0), k(300.0), m3(1.0), k(1500.0), 8.0).unwrap();
//! let result = OttoCycle::new().solve(&inputs).unwrap();
//! assert!(result.energy.efficiency_pct > 0.0 && result.energy.efficiency_pct < 100.0);
//! ```

pub mod curves;
pub mod diesel;
pub mod error;
pub mod inputs;
pub mod otto;
pub mod result;
pub mod units;

// Re-exports for ergonomics
pub use curves::{Branch, Curve, CurveBuilder};
pub use diesel::DieselCycle;
pub use error::CycleError;
pub use inputs::CycleInputs;
pub use otto::OttoCycle;
pub use result::{CycleResult, EnergyBalance};
pub use units::{Basis, UnitConverter, UnitSystem};
