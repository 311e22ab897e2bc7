//! Error types for root-finding.

use ac_core::error::AcError;
use thiserror::Error;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid bracket: {what}")]
    InvalidBracket { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for AcError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidBracket { what: _ } => AcError::InvalidArg { what: "bracket" },
            SolverError::ConvergenceFailed { what: _ } => AcError::Invariant {
                what: "convergence",
            },
            SolverError::Numeric { what: _ } => AcError::Invariant { what: "numeric" },
        }
    }
}
