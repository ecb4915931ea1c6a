//! rk-fluids: water/steam property lookups for the rankine workspace.
//!
//! Provides:
//! - `PropertyProvider` trait (the single boundary every cycle calculation goes through)
//! - CoolProp backend (`CoolPropWater`, IAPWS-95 through `rfluids`)
//! - IAPWS-IF97 backend (`If97Water`) for regions 1, 2 and the saturation line
//! - Property/input descriptors used in error reports
//! - Unit system of the boundary (bar, °C, kJ/kg, kJ/(kg·K), m³/kg)
//!
//! # Architecture
//!
//! Cycle code depends only on the trait, so backends can be swapped without
//! touching the cycle crate.
//!
//! # Example
//!
//! ```
//! use rk_core::units::{bar, degc};
//! use rk_fluids::{CoolPropWater, PropertyProvider};
//!
//! let water = CoolPropWater::new();
//! let (h, s) = water.enthalpy_entropy_pt(bar(70.0), degc(500.0)).unwrap();
//! let h_out = water.enthalpy_ps(bar(0.1), s).unwrap();
//! assert!(h_out < h);
//! ```

pub mod coolprop;
pub mod error;
pub mod if97;
pub mod model;
pub mod state;
pub mod units;

// Re-exports for ergonomics
pub use coolprop::CoolPropWater;
pub use error::{PropertyError, PropertyResult};
pub use if97::If97Water;
pub use model::PropertyProvider;
pub use state::{Property, SpecEnthalpy, SpecEntropy, SpecVolume, StateInput};
pub use units::{KJ_PER_BAR_M3, flow_work};
