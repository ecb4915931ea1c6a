use thiserror::Error;

pub type RkResult<T> = Result<T, RkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
