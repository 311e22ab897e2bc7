//! ac-air: air property calculations for aircycle.
//!
//! Provides:
//! - cv(T) correlation trait with a cubic polynomial fit for dry air and a
//!   constant-cv model for analytic verification
//! - Thermodynamic state representation on a molar basis
//! - Two-property state recovery (the `AirModel` solve)
//!
//! # Architecture
//!
//! This crate defines a stable API (`CvCorrelation` trait) that isolates the
//! state solver from any particular specific-heat data. The solver works for
//! any correlation whose cv stays positive on its declared range, which makes
//! u(T) and s0(T) strictly monotonic and the temperature inversions
//! well-posed.
//!
//! # Example
//!
//! ```
//! use ac_air::{AirModel, StateInput};
//! use ac_core::units::{pa, k};
//!
//! let model = AirModel::air();
//! let state = model
//!     .solve(StateInput::PT { p: pa(101_325.0), t: k(300.0) }, "1")
//!     .unwrap();
//! assert!(state.molar_volume > 0.0);
//! ```

pub mod correlation;
pub mod engine;
pub mod error;
pub mod state;

// Re-exports for ergonomics
pub use correlation::{AirPolynomialCv, ConstantCv, CvCorrelation, T_REF, V_REF};
pub use engine::AirModel;
pub use error::{PropertyError, PropertyResult};
pub use state::{MolarEnergy, MolarEntropy, MolarVolume, PropertyKey, StateInput, StateRecord};
