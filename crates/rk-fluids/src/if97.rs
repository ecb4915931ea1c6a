//! IAPWS-IF97 water/steam provider.
//!
//! Covers region 1 (liquid), region 2 (vapour) and the saturation line. Region 3
//! and region 5 are not implemented; queries that land there are reported as
//! out of range rather than silently extrapolated.

mod region1;
mod region2;
mod saturation;

use crate::error::{PropertyError, PropertyResult};
use crate::model::{PropertyProvider, validation};
use crate::state::{Property, SpecEnthalpy, SpecEntropy, SpecVolume, StateInput};
use rk_core::numeric::ensure_finite;
use rk_core::units::{Pressure, Temperature, k, to_kelvin, to_mpa};

/// Specific gas constant of water [kJ/(kg·K)].
const R_KJ_KG_K: f64 = 0.461_526;

/// Triple-point pressure [MPa].
pub const P_MIN_MPA: f64 = 0.000_611_657;
/// Upper pressure limit of regions 1 and 2 [MPa].
pub const P_MAX_MPA: f64 = 100.0;
/// Lower temperature limit [K].
pub const T_MIN_K: f64 = 273.15;
/// Upper temperature limit of region 2 [K].
pub const T_MAX_K: f64 = 1073.15;
/// Region 1/3 boundary temperature [K].
const T_13_K: f64 = 623.15;
/// Saturation pressure at [`T_13_K`]; the liquid side of the dome above this is region 3.
const P_SAT_MAX_MPA: f64 = 16.529_164_3;

const MAX_BISECTION_ITERS: usize = 200;

/// Specific volume [m³/kg], enthalpy [kJ/kg] and entropy [kJ/(kg·K)] from one
/// evaluation of a region's Gibbs equation.
#[derive(Debug, Clone, Copy)]
struct GibbsProps {
    v: SpecVolume,
    h: SpecEnthalpy,
    s: SpecEntropy,
}

/// Single-phase region of a (p, T) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Liquid,
    Vapour,
}

impl Region {
    fn props(self, p_mpa: f64, t_k: f64) -> GibbsProps {
        match self {
            Self::Liquid => region1::props(p_mpa, t_k),
            Self::Vapour => region2::props(p_mpa, t_k),
        }
    }
}

/// Temperature bracket width at which (p, s) inversion stops [K].
const TEMPERATURE_TOLERANCE_K: f64 = 1e-9;

/// IAPWS-IF97 implementation of [`PropertyProvider`].
///
/// A self-contained alternative to [`CoolPropWater`](crate::CoolPropWater) that
/// needs no native library. Its cycle results are the ones the regression
/// fixtures are pinned to.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Water;

impl If97Water {
    pub fn new() -> Self {
        Self
    }

    fn region_pt(&self, property: Property, p: Pressure, t: Temperature) -> PropertyResult<Region> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;

        let p_mpa = to_mpa(p);
        let t_k = to_kelvin(t);
        let out_of_range = || PropertyError::OutOfRange {
            property,
            input: StateInput::PT { p, t },
        };

        if !(P_MIN_MPA..=P_MAX_MPA).contains(&p_mpa) || !(T_MIN_K..=T_MAX_K).contains(&t_k) {
            return Err(out_of_range());
        }

        if t_k <= T_13_K {
            if p_mpa > saturation::psat_mpa(t_k) {
                Ok(Region::Liquid)
            } else {
                Ok(Region::Vapour)
            }
        } else if p_mpa <= saturation::b23_p_mpa(t_k) {
            Ok(Region::Vapour)
        } else {
            Err(out_of_range())
        }
    }

    fn single_phase(&self, property: Property, p: Pressure, t: Temperature) -> PropertyResult<GibbsProps> {
        let region = self.region_pt(property, p, t)?;
        let props = region.props(to_mpa(p), to_kelvin(t));
        finite(props)
    }

    /// Saturation temperature [K] at `p`, with the range check for dome queries.
    fn saturation_k(&self, property: Property, p: Pressure) -> PropertyResult<f64> {
        validation::validate_pressure(p)?;
        let p_mpa = to_mpa(p);
        if !(P_MIN_MPA..=P_SAT_MAX_MPA).contains(&p_mpa) {
            return Err(PropertyError::OutOfRange {
                property,
                input: StateInput::Saturation { p },
            });
        }
        Ok(ensure_finite(saturation::tsat_k(p_mpa), "saturation temperature")?)
    }

    /// Saturation temperature [K] with the saturated liquid and vapour states at `p`.
    fn saturation(
        &self,
        property: Property,
        p: Pressure,
    ) -> PropertyResult<(f64, GibbsProps, GibbsProps)> {
        let ts = self.saturation_k(property, p)?;
        let p_mpa = to_mpa(p);
        let liquid = finite(region1::props(p_mpa, ts))?;
        let vapour = finite(region2::props(p_mpa, ts))?;
        Ok((ts, liquid, vapour))
    }

    /// Bisects an isobar of `region` for the temperature at which s = `target`.
    ///
    /// Entropy increases monotonically with temperature along an isobar, so the
    /// bracket [`lo`, `hi`] only needs to contain the target.
    fn invert_entropy(
        &self,
        region: Region,
        p: Pressure,
        target: SpecEntropy,
        mut lo: f64,
        mut hi: f64,
    ) -> PropertyResult<f64> {
        let p_mpa = to_mpa(p);
        for _ in 0..MAX_BISECTION_ITERS {
            let mid = 0.5 * (lo + hi);
            if region.props(p_mpa, mid).s < target {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo <= TEMPERATURE_TOLERANCE_K {
                return Ok(0.5 * (lo + hi));
            }
        }
        Err(PropertyError::ConvergenceFailed {
            property: Property::Enthalpy,
            input: StateInput::PS { p, s: target },
        })
    }
}

fn finite(props: GibbsProps) -> PropertyResult<GibbsProps> {
    ensure_finite(props.v, "specific volume")?;
    ensure_finite(props.h, "enthalpy")?;
    ensure_finite(props.s, "entropy")?;
    Ok(props)
}

impl PropertyProvider for If97Water {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn enthalpy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEnthalpy> {
        Ok(self.single_phase(Property::Enthalpy, p, t)?.h)
    }

    fn entropy_pt(&self, p: Pressure, t: Temperature) -> PropertyResult<SpecEntropy> {
        Ok(self.single_phase(Property::Entropy, p, t)?.s)
    }

    fn enthalpy_entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
    ) -> PropertyResult<(SpecEnthalpy, SpecEntropy)> {
        let props = self.single_phase(Property::Enthalpy, p, t)?;
        Ok((props.h, props.s))
    }

    fn enthalpy_ps(&self, p: Pressure, s: SpecEntropy) -> PropertyResult<SpecEnthalpy> {
        validation::validate_pressure(p)?;
        validation::validate_entropy(s)?;

        let input = StateInput::PS { p, s };
        let out_of_range = || PropertyError::OutOfRange {
            property: Property::Enthalpy,
            input,
        };
        let p_mpa = to_mpa(p);
        if !(P_MIN_MPA..=P_MAX_MPA).contains(&p_mpa) {
            return Err(out_of_range());
        }

        // Above the top of the region 1/2 saturation line the isobar runs
        // region 1 -> region 3 -> region 2 without a dome.
        let (region, lo, hi) = if p_mpa > P_SAT_MAX_MPA {
            let t_23 = saturation::b23_t_k(p_mpa);
            if s <= region1::props(p_mpa, T_13_K).s {
                (Region::Liquid, T_MIN_K, T_13_K)
            } else if s >= region2::props(p_mpa, t_23).s {
                (Region::Vapour, t_23, T_MAX_K)
            } else {
                return Err(out_of_range());
            }
        } else {
            let (ts, liquid, vapour) = self
                .saturation(Property::Enthalpy, p)
                .map_err(|err| match err {
                    PropertyError::OutOfRange { .. } => out_of_range(),
                    other => other,
                })?;
            if s >= liquid.s && s <= vapour.s {
                let x = (s - liquid.s) / (vapour.s - liquid.s);
                let h = liquid.h + x * (vapour.h - liquid.h);
                return Ok(ensure_finite(h, "enthalpy")?);
            }
            if s > vapour.s {
                (Region::Vapour, ts, T_MAX_K)
            } else {
                (Region::Liquid, T_MIN_K, ts)
            }
        };

        if s < region.props(p_mpa, lo).s || s > region.props(p_mpa, hi).s {
            return Err(out_of_range());
        }
        let t_k = self.invert_entropy(region, p, s, lo, hi)?;
        Ok(finite(region.props(p_mpa, t_k))?.h)
    }

    fn saturated_liquid_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy> {
        Ok(self.saturation(Property::SaturatedLiquidEnthalpy, p)?.1.h)
    }

    fn saturated_vapor_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy> {
        Ok(self.saturation(Property::SaturatedVaporEnthalpy, p)?.2.h)
    }

    fn saturated_liquid_volume(&self, p: Pressure) -> PropertyResult<SpecVolume> {
        Ok(self.saturation(Property::SaturatedLiquidVolume, p)?.1.v)
    }

    fn saturation_temperature(&self, p: Pressure) -> PropertyResult<Temperature> {
        Ok(k(self.saturation_k(Property::SaturationTemperature, p)?))
    }
}
