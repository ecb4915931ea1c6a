//! Fluid property errors.

use crate::state::{Property, StateInput};
use rk_core::RkError;
use thiserror::Error;

/// Result type for property lookups.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur during property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Input point outside the provider's valid domain.
    #[error("{property} lookup out of range at {input}")]
    OutOfRange {
        property: Property,
        input: StateInput,
    },

    /// Inverse lookup (temperature from entropy) did not converge.
    #[error("{property} lookup failed to converge at {input}")]
    ConvergenceFailed {
        property: Property,
        input: StateInput,
    },

    /// The property backend rejected the query or failed to evaluate it.
    #[error("{property} lookup failed at {input}: {message}")]
    Backend {
        property: Property,
        input: StateInput,
        message: String,
    },

    /// Non-physical input (negative pressure, temperature below absolute zero).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// NaN or infinite input or result.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl PropertyError {
    /// The query input that failed, when the error is tied to one.
    pub fn input(&self) -> Option<&StateInput> {
        match self {
            Self::OutOfRange { input, .. }
            | Self::ConvergenceFailed { input, .. }
            | Self::Backend { input, .. } => Some(input),
            Self::NonPhysical { .. } | Self::NonFinite { .. } => None,
        }
    }
}

impl From<RkError> for PropertyError {
    fn from(err: RkError) -> Self {
        match err {
            RkError::NonFinite { what, value } => PropertyError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_core::units::{bar, degc};

    #[test]
    fn error_display_names_offending_point() {
        let err = PropertyError::OutOfRange {
            property: Property::Enthalpy,
            input: StateInput::PT {
                p: bar(300.0),
                t: degc(380.0),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("enthalpy"), "{msg}");
        assert!(msg.contains("300 bar"), "{msg}");
        assert!(err.input().is_some());
    }

    #[test]
    fn error_from_core() {
        let err: PropertyError = RkError::NonFinite {
            what: "enthalpy",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, PropertyError::NonFinite { what: "enthalpy", .. }));
        assert!(err.input().is_none());
    }
}
