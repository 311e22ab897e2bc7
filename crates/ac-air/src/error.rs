//! Property solver errors.

use ac_core::AcError;
use ac_solve::SolverError;
use thiserror::Error;

/// Result type for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur while recovering a state from two properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// A supplied value is physically inadmissible (non-positive absolute
    /// temperature or pressure, non-positive volume, non-finite input).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// The two supplied properties do not determine a consistent state
    /// within the correlation's temperature range.
    #[error("Inputs do not determine a state: {what}")]
    InvalidState { what: String },

    /// The temperature inversion exhausted its iteration budget.
    #[error("Convergence failed: {what}")]
    Convergence { what: String },
}

impl From<SolverError> for PropertyError {
    fn from(err: SolverError) -> Self {
        match err {
            // A missing sign change means the target lies outside the
            // property range spanned by the temperature bracket.
            SolverError::InvalidBracket { what } => PropertyError::InvalidState { what },
            SolverError::ConvergenceFailed { what } => PropertyError::Convergence { what },
            SolverError::Numeric { what } => PropertyError::Convergence { what },
        }
    }
}

impl From<PropertyError> for AcError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::InvalidInput { what } => AcError::InvalidArg { what },
            PropertyError::InvalidState { what: _ } => AcError::InvalidArg { what: "state" },
            PropertyError::Convergence { what: _ } => AcError::Invariant {
                what: "convergence",
            },
        }
    }
}
