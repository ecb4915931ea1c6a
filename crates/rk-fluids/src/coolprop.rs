//! CoolProp-based water/steam provider.

use crate::error::{PropertyError, PropertyResult};
use crate::model::{PropertyProvider, validation};
use crate::state::{Property, SpecEnthalpy, SpecEntropy, SpecVolume, StateInput};
use rfluids::prelude::*;
use rk_core::numeric::ensure_finite;
use rk_core::units::{Pressure, Temperature, k, to_kelvin};
use std::fmt::Display;

/// rfluids works in J/kg and J/(kg·K); the provider boundary is kJ.
const J_PER_KJ: f64 = 1000.0;

/// Triple-point pressure of water [Pa].
pub const P_TRIPLE_PA: f64 = 611.654_771;
/// Critical pressure of water [Pa]. Saturation queries must stay below it.
pub const P_CRITICAL_PA: f64 = 22.064e6;
/// Upper pressure limit of IAPWS-95 [Pa].
pub const P_MAX_PA: f64 = 1.0e9;
/// Triple-point temperature [K].
pub const T_MIN_K: f64 = 273.16;
/// Upper temperature limit of IAPWS-95 [K].
pub const T_MAX_K: f64 = 1273.0;

/// CoolProp backend for water/steam properties.
///
/// Evaluates the IAPWS-95 reference formulation through `rfluids`. Queries
/// outside the formulation's validity range are rejected up front instead of
/// being handed to CoolProp's extrapolation.
///
/// Thread-safe: every query builds its own rfluids `Fluid`, nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropWater;

impl CoolPropWater {
    pub fn new() -> Self {
        Self
    }

    /// Create a water `Fluid` in the state fixed by `a` and `b`.
    fn fluid_at(
        &self,
        property: Property,
        input: StateInput,
        a: FluidInput,
        b: FluidInput,
    ) -> PropertyResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(a, b)
            .map_err(|e| backend(property, input, e))
    }

    fn fluid_at_pt(&self, property: Property, p: Pressure, t: Temperature) -> PropertyResult<Fluid> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;

        let input = StateInput::PT { p, t };
        let t_k = to_kelvin(t);
        if !(P_TRIPLE_PA..=P_MAX_PA).contains(&p.value) || !(T_MIN_K..=T_MAX_K).contains(&t_k) {
            return Err(PropertyError::OutOfRange { property, input });
        }

        self.fluid_at(
            property,
            input,
            FluidInput::pressure(p.value),
            FluidInput::temperature(t_k),
        )
    }

    /// Saturated liquid (`quality` 0) or saturated vapour (`quality` 1) at `p`.
    fn saturated(&self, property: Property, p: Pressure, quality: f64) -> PropertyResult<Fluid> {
        validation::validate_pressure(p)?;

        let input = StateInput::Saturation { p };
        if !(P_TRIPLE_PA..P_CRITICAL_PA).contains(&p.value) {
            return Err(PropertyError::OutOfRange { property, input });
        }

        self.fluid_at(
            property,
            input,
            FluidInput::pressure(p.value),
            FluidInput::quality(quality),
        )
    }
}

fn backend(property: Property, input: StateInput, err: impl Display) -> PropertyError {
    PropertyError::Backend {
        property,
        input,
        message: format!("rfluids error: {err}"),
    }
}

/// Unwrap an rfluids output and check that it is a finite number.
fn read<E: Display>(
    value: Result<f64, E>,
    property: Property,
    input: StateInput,
    what: &'static str,
) -> PropertyResult<f64> {
    let value = value.map_err(|e| backend(property, input, e))?;
    Ok(ensure_finite(value, what)?)
}

impl PropertyProvider for CoolPropWater {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn enthalpy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEnthalpy> {
        let property = Property::Enthalpy;
        let mut fluid = self.fluid_at_pt(property, p, t)?;
        let h = read(fluid.enthalpy(), property, StateInput::PT { p, t }, "enthalpy")?;
        Ok(h / J_PER_KJ)
    }

    fn entropy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEntropy> {
        let property = Property::Entropy;
        let mut fluid = self.fluid_at_pt(property, p, t)?;
        let s = read(fluid.entropy(), property, StateInput::PT { p, t }, "entropy")?;
        Ok(s / J_PER_KJ)
    }

    fn enthalpy_entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
    ) -> PropertyResult<(SpecEnthalpy, SpecEntropy)> {
        let property = Property::Enthalpy;
        let input = StateInput::PT { p, t };

        // Both outputs from the same fluid instance
        let mut fluid = self.fluid_at_pt(property, p, t)?;
        let h = read(fluid.enthalpy(), property, input, "enthalpy")?;
        let s = read(fluid.entropy(), Property::Entropy, input, "entropy")?;
        Ok((h / J_PER_KJ, s / J_PER_KJ))
    }

    fn enthalpy_ps(&self, p: Pressure, s: SpecEntropy) -> PropertyResult<SpecEnthalpy> {
        validation::validate_pressure(p)?;
        validation::validate_entropy(s)?;

        let property = Property::Enthalpy;
        let input = StateInput::PS { p, s };
        if !(P_TRIPLE_PA..=P_MAX_PA).contains(&p.value) {
            return Err(PropertyError::OutOfRange { property, input });
        }

        let mut fluid = self.fluid_at(
            property,
            input,
            FluidInput::pressure(p.value),
            FluidInput::entropy(s * J_PER_KJ),
        )?;

        // CoolProp resolves (p, s) on both sides of the dome; only the
        // temperature can still leave the formulation's range.
        let t_k = read(fluid.temperature(), property, input, "temperature")?;
        if !(T_MIN_K..=T_MAX_K).contains(&t_k) {
            return Err(PropertyError::OutOfRange { property, input });
        }

        let h = read(fluid.enthalpy(), property, input, "enthalpy")?;
        Ok(h / J_PER_KJ)
    }

    fn saturated_liquid_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy> {
        let property = Property::SaturatedLiquidEnthalpy;
        let mut fluid = self.saturated(property, p, 0.0)?;
        let h = read(fluid.enthalpy(), property, StateInput::Saturation { p }, "enthalpy")?;
        Ok(h / J_PER_KJ)
    }

    fn saturated_vapor_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy> {
        let property = Property::SaturatedVaporEnthalpy;
        let mut fluid = self.saturated(property, p, 1.0)?;
        let h = read(fluid.enthalpy(), property, StateInput::Saturation { p }, "enthalpy")?;
        Ok(h / J_PER_KJ)
    }

    fn saturated_liquid_volume(&self, p: Pressure) -> PropertyResult<SpecVolume> {
        let property = Property::SaturatedLiquidVolume;
        let mut fluid = self.saturated(property, p, 0.0)?;
        let rho = read(fluid.density(), property, StateInput::Saturation { p }, "density")?;
        if rho <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "density must be positive",
            });
        }
        Ok(1.0 / rho)
    }

    fn saturation_temperature(&self, p: Pressure) -> PropertyResult<Temperature> {
        let property = Property::SaturationTemperature;
        let mut fluid = self.saturated(property, p, 0.0)?;
        let t_k = read(
            fluid.temperature(),
            property,
            StateInput::Saturation { p },
            "saturation temperature",
        )?;
        Ok(k(t_k))
    }
}
