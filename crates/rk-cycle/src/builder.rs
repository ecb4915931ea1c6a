//! Cycle state construction for the baseline and reheat topologies.

use crate::error::SolveResult;
use crate::params::CycleParameters;
use crate::pump::Compression;
use crate::state::{StatePoint, ThermodynamicState};
use crate::turbine::Expansion;
use rk_core::units::{Pressure, Temperature};
use rk_fluids::{PropertyProvider, SpecEnthalpy};
use std::fmt;

/// Which cycle configuration is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    /// One open feedwater heater, single expansion.
    Baseline,
    /// One open feedwater heater, reheat at heater pressure.
    Reheat,
}

impl TopologyKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Reheat => "reheat",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One operating point: the topology plus its temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Topology {
    Baseline {
        inlet: Temperature,
    },
    Reheat {
        inlet: Temperature,
        reheat: Temperature,
    },
}

impl Topology {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Baseline { .. } => TopologyKind::Baseline,
            Self::Reheat { .. } => TopologyKind::Reheat,
        }
    }

    pub fn inlet_temperature(&self) -> Temperature {
        match *self {
            Self::Baseline { inlet } | Self::Reheat { inlet, .. } => inlet,
        }
    }

    /// The temperature a sweep varies: inlet for baseline, reheat for reheat.
    pub fn swept_temperature(&self) -> Temperature {
        match *self {
            Self::Baseline { inlet } => inlet,
            Self::Reheat { reheat, .. } => reheat,
        }
    }
}

/// States 1 to 4 and both pump works, common to every topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedwaterTrain {
    pub condenser_exit: ThermodynamicState,
    pub condensate_pump_exit: ThermodynamicState,
    pub heater_exit: ThermodynamicState,
    pub feed_pump_exit: ThermodynamicState,
    /// Condenser to heater pressure [kJ/kg].
    pub condensate_pump_work: SpecEnthalpy,
    /// Heater to boiler pressure [kJ/kg].
    pub feed_pump_work: SpecEnthalpy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineStates {
    pub feedwater: FeedwaterTrain,
    pub turbine_inlet: ThermodynamicState,
    pub extraction: Expansion,
    pub turbine_exit: Expansion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReheatStates {
    pub feedwater: FeedwaterTrain,
    pub turbine_inlet: ThermodynamicState,
    pub extraction: Expansion,
    pub reheat_exit: ThermodynamicState,
    pub lp_turbine_exit: Expansion,
}

/// Built state set of one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleStates {
    Baseline(BaselineStates),
    Reheat(ReheatStates),
}

impl CycleStates {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Baseline(_) => TopologyKind::Baseline,
            Self::Reheat(_) => TopologyKind::Reheat,
        }
    }

    pub fn feedwater(&self) -> &FeedwaterTrain {
        match self {
            Self::Baseline(s) => &s.feedwater,
            Self::Reheat(s) => &s.feedwater,
        }
    }

    pub fn turbine_inlet(&self) -> &ThermodynamicState {
        match self {
            Self::Baseline(s) => &s.turbine_inlet,
            Self::Reheat(s) => &s.turbine_inlet,
        }
    }

    /// Bleed to the feedwater heater.
    pub fn extraction(&self) -> &Expansion {
        match self {
            Self::Baseline(s) => &s.extraction,
            Self::Reheat(s) => &s.extraction,
        }
    }

    /// Last expansion leg, discharging to the condenser.
    pub fn exit(&self) -> &Expansion {
        match self {
            Self::Baseline(s) => &s.turbine_exit,
            Self::Reheat(s) => &s.lp_turbine_exit,
        }
    }

    /// All states in cycle order (1..=7 baseline, 1..=8 reheat).
    pub fn states(&self) -> Vec<(StatePoint, &ThermodynamicState)> {
        let fw = self.feedwater();
        let mut out = vec![
            (StatePoint::CondenserExit, &fw.condenser_exit),
            (StatePoint::CondensatePumpExit, &fw.condensate_pump_exit),
            (StatePoint::HeaterExit, &fw.heater_exit),
            (StatePoint::FeedPumpExit, &fw.feed_pump_exit),
            (StatePoint::TurbineInlet, self.turbine_inlet()),
            (StatePoint::Extraction, &self.extraction().outlet),
        ];
        match self {
            Self::Baseline(s) => out.push((StatePoint::TurbineExit, &s.turbine_exit.outlet)),
            Self::Reheat(s) => {
                out.push((StatePoint::ReheatExit, &s.reheat_exit));
                out.push((StatePoint::LpTurbineExit, &s.lp_turbine_exit.outlet));
            }
        }
        out
    }
}

/// Builds cycle states through an injected property provider.
pub struct CycleStateBuilder<'a> {
    fluid: &'a dyn PropertyProvider,
    params: &'a CycleParameters,
}

impl<'a> CycleStateBuilder<'a> {
    pub fn new(fluid: &'a dyn PropertyProvider, params: &'a CycleParameters) -> Self {
        Self { fluid, params }
    }

    pub fn build(&self, topology: &Topology) -> SolveResult<CycleStates> {
        let feedwater = self.feedwater_train()?;
        let turbine_inlet = self.steam_state(self.params.boiler_pressure(), topology.inlet_temperature())?;
        let extraction = self.expand(&turbine_inlet, self.params.heater_pressure())?;

        let states = match *topology {
            Topology::Baseline { .. } => CycleStates::Baseline(BaselineStates {
                feedwater,
                turbine_inlet,
                extraction,
                // same inlet entropy as the extraction leg
                turbine_exit: self.expand(&turbine_inlet, self.params.condenser_pressure())?,
            }),
            Topology::Reheat { reheat, .. } => {
                let reheat_exit = self.steam_state(self.params.heater_pressure(), reheat)?;
                CycleStates::Reheat(ReheatStates {
                    feedwater,
                    turbine_inlet,
                    extraction,
                    reheat_exit,
                    lp_turbine_exit: self.expand(&reheat_exit, self.params.condenser_pressure())?,
                })
            }
        };
        Ok(states)
    }

    /// States 1 to 4.
    pub fn feedwater_train(&self) -> SolveResult<FeedwaterTrain> {
        let pump = self.params.pump();

        let condenser_exit = self.saturated_liquid(self.params.condenser_pressure())?;
        let Compression {
            outlet: condensate_pump_exit,
            work: condensate_pump_work,
        } = pump.compress(&condenser_exit, self.params.heater_pressure())?;

        let heater_exit = self.saturated_liquid(self.params.heater_pressure())?;
        let Compression {
            outlet: feed_pump_exit,
            work: feed_pump_work,
        } = pump.compress(&heater_exit, self.params.boiler_pressure())?;

        Ok(FeedwaterTrain {
            condenser_exit,
            condensate_pump_exit,
            heater_exit,
            feed_pump_exit,
            condensate_pump_work,
            feed_pump_work,
        })
    }

    /// Isentropic-efficiency expansion from `inlet` to `p_out`.
    pub fn expand(&self, inlet: &ThermodynamicState, p_out: Pressure) -> SolveResult<Expansion> {
        self.params.turbine().expand(self.fluid, inlet, p_out)
    }

    fn saturated_liquid(&self, p: Pressure) -> SolveResult<ThermodynamicState> {
        let h = self.fluid.saturated_liquid_enthalpy(p)?;
        let v = self.fluid.saturated_liquid_volume(p)?;
        Ok(ThermodynamicState::saturated_liquid(p, h, v))
    }

    fn steam_state(&self, p: Pressure, t: Temperature) -> SolveResult<ThermodynamicState> {
        let (h, s) = self.fluid.enthalpy_entropy_pt(p, t)?;
        Ok(ThermodynamicState::superheated(p, t, h, s))
    }
}
