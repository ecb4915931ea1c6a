//! Thermodynamic states at labelled cycle points.

use rk_core::units::{Pressure, Temperature};
use rk_fluids::{SpecEnthalpy, SpecEntropy, SpecVolume};
use std::fmt;

/// Labelled location in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatePoint {
    CondenserExit,
    CondensatePumpExit,
    HeaterExit,
    FeedPumpExit,
    TurbineInlet,
    Extraction,
    TurbineExit,
    ReheatExit,
    LpTurbineExit,
}

impl StatePoint {
    pub fn label(self) -> &'static str {
        match self {
            Self::CondenserExit => "condenser exit",
            Self::CondensatePumpExit => "condensate pump exit",
            Self::HeaterExit => "feedwater heater exit",
            Self::FeedPumpExit => "feed pump exit",
            Self::TurbineInlet => "turbine inlet",
            Self::Extraction => "extraction",
            Self::TurbineExit => "turbine exit",
            Self::ReheatExit => "reheat exit",
            Self::LpTurbineExit => "LP turbine exit",
        }
    }
}

impl fmt::Display for StatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Working fluid at one cycle point.
///
/// Enthalpy is always present. Temperature, entropy and specific volume are
/// only filled in where a downstream step consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    pressure: Pressure,
    temperature: Option<Temperature>,
    enthalpy: SpecEnthalpy,
    entropy: Option<SpecEntropy>,
    specific_volume: Option<SpecVolume>,
}

impl ThermodynamicState {
    /// Saturated liquid leaving a condenser or open heater (pump inlet).
    pub fn saturated_liquid(p: Pressure, h: SpecEnthalpy, v: SpecVolume) -> Self {
        Self {
            pressure: p,
            temperature: None,
            enthalpy: h,
            entropy: None,
            specific_volume: Some(v),
        }
    }

    /// Liquid at pump discharge.
    pub fn compressed_liquid(p: Pressure, h: SpecEnthalpy) -> Self {
        Self {
            pressure: p,
            temperature: None,
            enthalpy: h,
            entropy: None,
            specific_volume: None,
        }
    }

    /// Steam fixed by pressure and temperature (turbine or reheat inlet).
    pub fn superheated(p: Pressure, t: Temperature, h: SpecEnthalpy, s: SpecEntropy) -> Self {
        Self {
            pressure: p,
            temperature: Some(t),
            enthalpy: h,
            entropy: Some(s),
            specific_volume: None,
        }
    }

    /// Steam leaving an expansion, known only by pressure and enthalpy.
    pub fn expanded(p: Pressure, h: SpecEnthalpy) -> Self {
        Self::compressed_liquid(p, h)
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.enthalpy
    }

    pub fn entropy(&self) -> Option<SpecEntropy> {
        self.entropy
    }

    pub fn specific_volume(&self) -> Option<SpecVolume> {
        self.specific_volume
    }
}
