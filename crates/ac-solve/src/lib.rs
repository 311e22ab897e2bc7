//! ac-solve: scalar root-finding for aircycle.
//!
//! Provides one safeguarded Newton solver behind a narrow interface
//! (function, derivative, bracket, tolerances, iteration cap). The property
//! engine uses it to invert u(T) and s(T, v) for temperature; it knows
//! nothing about thermodynamics.

pub mod error;
pub mod newton;

pub use error::{SolverError, SolverResult};
pub use newton::{RootConfig, RootResult, find_root};
