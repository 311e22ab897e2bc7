//! Error types for cycle solving.

use ac_air::PropertyError;
use thiserror::Error;

/// Errors that can occur while solving a cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// A boundary condition is physically inadmissible.
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// A state solve inside the sequence failed; the whole cycle solve
    /// aborts and any previously returned result stays valid.
    #[error("Property error: {0}")]
    Property(#[from] PropertyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_errors_chain_through() {
        let err: CycleError = PropertyError::Convergence {
            what: "maximum iterations 100 reached".into(),
        }
        .into();
        assert!(err.to_string().contains("Property error"));
    }
}
