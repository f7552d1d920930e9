//! Error types for the rank system core
//!
//! Expected outcomes of rank commands (unknown user, missing rank, not enough
//! hours) are modelled as result variants, not errors. Only failures the
//! command dispatcher cannot turn into a chat message end up here.

use thiserror::Error;

/// Main error type for the rank system core
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a points ledger collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: u64, required: u64 },

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "python")]
impl From<RankError> for pyo3::PyErr {
    fn from(err: RankError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};

        match err {
            RankError::Ledger(e) => PyRuntimeError::new_err(format!("Ledger error: {}", e)),
            RankError::ConfigParse(e) => {
                PyValueError::new_err(format!("Config parse error: {}", e))
            }
            RankError::Io(e) => PyOSError::new_err(format!("I/O error: {}", e)),
        }
    }
}

/// Result type alias for the rank system core
pub type Result<T> = std::result::Result<T, RankError>;
