//! Unit system of the property boundary.
//!
//! Every provider speaks one fixed unit system:
//!
//! | quantity          | unit        | carrier                 |
//! |-------------------|-------------|-------------------------|
//! | pressure          | bar         | uom `Pressure`          |
//! | temperature       | °C          | uom `Temperature`       |
//! | specific enthalpy | kJ/kg       | [`SpecEnthalpy`](crate::SpecEnthalpy) |
//! | specific entropy  | kJ/(kg·K)   | [`SpecEntropy`](crate::SpecEntropy) |
//! | specific volume   | m³/kg       | [`SpecVolume`](crate::SpecVolume) |
//!
//! Flow work `v·Δp` of a liquid comes out in bar·m³/kg and must be scaled by
//! [`KJ_PER_BAR_M3`] before it can be added to an enthalpy.

use crate::state::{SpecEnthalpy, SpecVolume};
use rk_core::units::{Pressure, to_bar};

/// kJ/kg per bar·m³/kg (1 bar = 100 kPa and 1 kPa·m³/kg = 1 kJ/kg).
pub const KJ_PER_BAR_M3: f64 = 100.0;

/// Reversible flow work `v·Δp` [kJ/kg] of an incompressible liquid.
pub fn flow_work(v: SpecVolume, dp: Pressure) -> SpecEnthalpy {
    v * to_bar(dp) * KJ_PER_BAR_M3
}
