//! Error type of the command-line front end.

use rk_cycle::{CycleError, SweepError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read study file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid study file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_errors_convert() {
        let err: AppError = CycleError::InvalidParameters {
            what: "pump efficiency must be in (0,1]",
        }
        .into();
        assert!(err.to_string().contains("pump efficiency"));
    }
}
