//! rk-core: stable foundation for the rankine workspace.
//!
//! Contains:
//! - units (uom SI types + bar/°C constructors)
//! - numeric (closeness bands, finite and ratio guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RkError, RkResult};
pub use numeric::*;
pub use units::*;
