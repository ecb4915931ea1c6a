//! Error types for cycle evaluation and sweeps.

use rk_core::RkError;
use rk_fluids::PropertyError;
use thiserror::Error;

/// Errors that can occur while building or reducing one cycle point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// The property provider could not resolve a state.
    #[error("Property lookup failed: {0}")]
    PropertyLookup(#[from] PropertyError),

    /// A balance denominator vanished or the result left its physical range.
    #[error("Degenerate energy balance: {what} = {value}")]
    DegenerateBalance { what: &'static str, value: f64 },

    #[error("Invalid cycle parameters: {what}")]
    InvalidParameters { what: &'static str },

    /// A state was handed to a component without the property it needs.
    #[error("State {point} has no {what}")]
    MissingProperty {
        point: &'static str,
        what: &'static str,
    },
}

pub type SolveResult<T> = Result<T, CycleError>;

impl From<RkError> for CycleError {
    fn from(e: RkError) -> Self {
        match e {
            RkError::NonFinite { what, value } => CycleError::DegenerateBalance { what, value },
        }
    }
}

/// Errors that end a whole sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Sweep point {index} at {temperature_c} °C failed: {source}")]
    PointFailed {
        index: usize,
        temperature_c: f64,
        source: CycleError,
    },

    #[error("Invalid sweep: {what}")]
    InvalidPlan { what: &'static str },
}
