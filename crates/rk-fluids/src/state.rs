//! Property kinds and the input points they are queried at.

use rk_core::units::{Pressure, Temperature, to_bar, to_degc};
use std::fmt;

/// Specific enthalpy [kJ/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [kJ/(kg·K)].
pub type SpecEntropy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

/// Property requested from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Enthalpy,
    Entropy,
    SaturatedLiquidEnthalpy,
    SaturatedVaporEnthalpy,
    SaturatedLiquidVolume,
    SaturationTemperature,
}

impl Property {
    pub fn label(self) -> &'static str {
        match self {
            Self::Enthalpy => "enthalpy",
            Self::Entropy => "entropy",
            Self::SaturatedLiquidEnthalpy => "saturated liquid enthalpy",
            Self::SaturatedVaporEnthalpy => "saturated vapour enthalpy",
            Self::SaturatedLiquidVolume => "saturated liquid specific volume",
            Self::SaturationTemperature => "saturation temperature",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Independent variables of a property query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature.
    PT { p: Pressure, t: Temperature },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
    /// Saturation state at pressure.
    Saturation { p: Pressure },
}

impl StateInput {
    pub fn pressure(&self) -> Pressure {
        match *self {
            Self::PT { p, .. } | Self::PS { p, .. } | Self::Saturation { p } => p,
        }
    }
}

impl fmt::Display for StateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PT { p, t } => write!(f, "p = {} bar, T = {} °C", to_bar(p), to_degc(t)),
            Self::PS { p, s } => write!(f, "p = {} bar, s = {} kJ/(kg·K)", to_bar(p), s),
            Self::Saturation { p } => write!(f, "saturation at p = {} bar", to_bar(p)),
        }
    }
}
