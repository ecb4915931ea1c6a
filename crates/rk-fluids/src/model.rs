//! Property provider trait and validation helpers.

use crate::error::{PropertyError, PropertyResult};
use crate::state::{SpecEnthalpy, SpecEntropy, SpecVolume};
use rk_core::units::{Pressure, Temperature};

/// Source of water/steam properties.
///
/// Implementations must be thread-safe (Send + Sync) so a single provider can be
/// shared across parallel sweep workers. Every method validates its inputs and
/// reports the property and query point on failure.
pub trait PropertyProvider: Send + Sync {
    /// Get the provider name (for debugging/logging).
    fn name(&self) -> &str;

    /// Specific enthalpy [kJ/kg] of single-phase water at (p, T).
    fn enthalpy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEnthalpy>;

    /// Specific entropy [kJ/(kg·K)] of single-phase water at (p, T).
    fn entropy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEntropy>;

    /// Enthalpy and entropy at (p, T) in one call.
    ///
    /// Default implementation makes two lookups; providers that evaluate both from
    /// the same equation of state should override.
    fn enthalpy_entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
    ) -> PropertyResult<(SpecEnthalpy, SpecEntropy)> {
        Ok((self.enthalpy_pt(p, t)?, self.entropy_pt(p, t)?))
    }

    /// Specific enthalpy [kJ/kg] at (p, s), two-phase states included.
    fn enthalpy_ps(&self, p: Pressure, s: SpecEntropy) -> PropertyResult<SpecEnthalpy>;

    /// Saturated liquid enthalpy hf [kJ/kg] at p.
    fn saturated_liquid_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy>;

    /// Saturated vapour enthalpy hg [kJ/kg] at p.
    fn saturated_vapor_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy>;

    /// Saturated liquid specific volume vf [m³/kg] at p.
    fn saturated_liquid_volume(&self, p: Pressure) -> PropertyResult<SpecVolume>;

    /// Saturation temperature at p.
    fn saturation_temperature(&self, p: Pressure) -> PropertyResult<Temperature>;
}

/// Validation helpers for provider inputs and outputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> PropertyResult<()> {
        if !p.value.is_finite() {
            return Err(PropertyError::NonFinite {
                what: "pressure",
                value: p.value,
            });
        }
        if p.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "pressure must be positive",
            });
        }
        Ok(())
    }

    /// Ensure absolute temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> PropertyResult<()> {
        if !t.value.is_finite() {
            return Err(PropertyError::NonFinite {
                what: "temperature",
                value: t.value,
            });
        }
        if t.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "temperature must be above absolute zero",
            });
        }
        Ok(())
    }

    /// Ensure entropy is finite (can be negative near the triple point).
    pub fn validate_entropy(s: SpecEntropy) -> PropertyResult<()> {
        if !s.is_finite() {
            return Err(PropertyError::NonFinite {
                what: "entropy",
                value: s,
            });
        }
        Ok(())
    }
}
