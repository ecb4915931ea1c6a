//! Feedwater-heater mass balance and cycle energy balance.

use crate::builder::{CycleStateBuilder, CycleStates, Topology, TopologyKind};
use crate::error::{CycleError, SolveResult};
use crate::params::CycleParameters;
use rk_core::numeric::{Tolerances, checked_ratio, nearly_equal};
use rk_core::units::Temperature;
use rk_fluids::{PropertyProvider, SpecEnthalpy};
use tracing::debug;

/// Quality band treated as exactly saturated vapour.
const SATURATED_VAPOUR_BAND: Tolerances = Tolerances::absolute(1e-9);

/// Per-kg-of-boiler-flow energy terms [kJ/kg].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    pub turbine_work: SpecEnthalpy,
    pub pump_work: SpecEnthalpy,
    pub heat_input: SpecEnthalpy,
    pub net_work: SpecEnthalpy,
}

/// Phase at the final turbine exit, read off the unclamped quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPhase {
    /// x < 0
    Subcooled,
    /// 0 <= x < 1
    Wet,
    /// x = 1
    SaturatedVapour,
    /// x > 1
    Superheated,
}

impl ExitPhase {
    pub fn from_quality(x: f64) -> Self {
        if x < 0.0 {
            Self::Subcooled
        } else if nearly_equal(x, 1.0, SATURATED_VAPOUR_BAND) {
            Self::SaturatedVapour
        } else if x > 1.0 {
            Self::Superheated
        } else {
            Self::Wet
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Subcooled => "subcooled",
            Self::Wet => "wet",
            Self::SaturatedVapour => "saturated vapour",
            Self::Superheated => "superheated",
        }
    }
}

/// One evaluated operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    pub topology: TopologyKind,
    /// Inlet temperature (baseline) or reheat temperature (reheat).
    pub temperature: Temperature,
    /// Thermal efficiency [%].
    pub efficiency: f64,
    /// Turbine exit quality, not clamped to [0, 1].
    pub quality: f64,
    /// Fraction of boiler flow bled to the feedwater heater.
    pub mass_fraction: f64,
    pub energy: EnergyBalance,
    pub exit_phase: ExitPhase,
}

/// Evaluates operating points against one provider and parameter set.
#[derive(Clone, Copy)]
pub struct CycleEvaluator<'a> {
    fluid: &'a dyn PropertyProvider,
    params: &'a CycleParameters,
}

impl<'a> CycleEvaluator<'a> {
    pub fn new(fluid: &'a dyn PropertyProvider, params: &'a CycleParameters) -> Self {
        Self { fluid, params }
    }

    pub fn params(&self) -> &CycleParameters {
        self.params
    }

    pub fn builder(&self) -> CycleStateBuilder<'a> {
        CycleStateBuilder::new(self.fluid, self.params)
    }

    /// Build the states of `topology` and reduce them.
    pub fn evaluate(&self, topology: &Topology) -> SolveResult<CycleResult> {
        let (_, result) = self.evaluate_with_states(topology)?;
        Ok(result)
    }

    /// Like [`evaluate`](Self::evaluate), also returning the built states.
    pub fn evaluate_with_states(&self, topology: &Topology) -> SolveResult<(CycleStates, CycleResult)> {
        let states = self.builder().build(topology)?;
        let result = self.reduce(topology.swept_temperature(), &states)?;
        Ok((states, result))
    }

    /// Reduce an already built state set to a result.
    ///
    /// # Errors
    /// `DegenerateBalance` when the mass fraction leaves (0, 1), a denominator
    /// vanishes, or the efficiency comes out negative.
    pub fn reduce(&self, temperature: Temperature, states: &CycleStates) -> SolveResult<CycleResult> {
        let fw = states.feedwater();
        let h2 = fw.condensate_pump_exit.enthalpy();
        let h3 = fw.heater_exit.enthalpy();
        let h4 = fw.feed_pump_exit.enthalpy();
        let h5 = states.turbine_inlet().enthalpy();
        let h6 = states.extraction().enthalpy();

        let y = checked_ratio(h3 - h2, h6 - h2, "mass fraction")?;
        if !(y > 0.0 && y < 1.0) {
            return Err(CycleError::DegenerateBalance {
                what: "mass fraction",
                value: y,
            });
        }

        let energy = match states {
            CycleStates::Baseline(s) => {
                let h7 = s.turbine_exit.enthalpy();
                balance(
                    (h5 - h6) + (1.0 - y) * (h6 - h7),
                    fw.condensate_pump_work + (1.0 - y) * fw.feed_pump_work,
                    h5 - h4,
                )
            }
            CycleStates::Reheat(s) => {
                let h7 = s.reheat_exit.enthalpy();
                let h8 = s.lp_turbine_exit.enthalpy();
                balance(
                    (h5 - h6) + (1.0 - y) * (h7 - h8),
                    (1.0 - y) * fw.condensate_pump_work + fw.feed_pump_work,
                    (h5 - h4) + (1.0 - y) * (h7 - h6),
                )
            }
        };

        if energy.heat_input <= 0.0 {
            return Err(CycleError::DegenerateBalance {
                what: "heat input",
                value: energy.heat_input,
            });
        }
        let efficiency = 100.0 * checked_ratio(energy.net_work, energy.heat_input, "thermal efficiency")?;
        if efficiency < 0.0 {
            return Err(CycleError::DegenerateBalance {
                what: "thermal efficiency",
                value: efficiency,
            });
        }

        let quality = self.exit_quality(states)?;
        let exit_phase = ExitPhase::from_quality(quality);
        if exit_phase != ExitPhase::Wet {
            debug!(quality, phase = exit_phase.label(), "turbine exit outside the wet region");
        }

        let result = CycleResult {
            topology: states.kind(),
            temperature,
            efficiency,
            quality,
            mass_fraction: y,
            energy,
            exit_phase,
        };
        debug!(
            topology = %result.topology,
            efficiency = result.efficiency,
            quality = result.quality,
            mass_fraction = result.mass_fraction,
            "cycle point evaluated"
        );
        Ok(result)
    }

    /// x = (h_exit - hf) / (hg - hf) at condenser pressure.
    fn exit_quality(&self, states: &CycleStates) -> SolveResult<f64> {
        let p = self.params.condenser_pressure();
        let hf = states.feedwater().condenser_exit.enthalpy();
        let hg = self.fluid.saturated_vapor_enthalpy(p)?;
        Ok(checked_ratio(states.exit().enthalpy() - hf, hg - hf, "exit quality")?)
    }
}

fn balance(turbine_work: f64, pump_work: f64, heat_input: f64) -> EnergyBalance {
    EnergyBalance {
        turbine_work,
        pump_work,
        heat_input,
        net_work: turbine_work - pump_work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThermodynamicState;
    use rk_core::units::{Pressure, bar, degc, to_bar};
    use rk_fluids::{PropertyResult, SpecEntropy, SpecVolume};

    /// Fixed-value provider for hand-checkable balances.
    struct MockWater {
        inlet_h: f64,
        extraction_hs: f64,
        exit_hs: f64,
    }

    impl MockWater {
        fn new() -> Self {
            Self {
                inlet_h: 3400.0,
                extraction_hs: 2800.0,
                exit_hs: 2100.0,
            }
        }
    }

    fn is_heater(p: Pressure) -> bool {
        (to_bar(p) - 8.0).abs() < 1e-9
    }

    impl PropertyProvider for MockWater {
        fn name(&self) -> &str {
            "mock"
        }

        fn enthalpy_pt(&self, p: Pressure, _t: Temperature) -> PropertyResult<SpecEnthalpy> {
            Ok(if is_heater(p) { 3200.0 } else { self.inlet_h })
        }

        fn entropy_pt(&self, p: Pressure, _t: Temperature) -> PropertyResult<SpecEntropy> {
            Ok(if is_heater(p) { 7.5 } else { 6.8 })
        }

        fn enthalpy_ps(&self, p: Pressure, s: SpecEntropy) -> PropertyResult<SpecEnthalpy> {
            if is_heater(p) {
                Ok(self.extraction_hs)
            } else if s > 7.0 {
                Ok(self.exit_hs + 300.0)
            } else {
                Ok(self.exit_hs)
            }
        }

        fn saturated_liquid_enthalpy(&self, p: Pressure) -> PropertyResult<SpecEnthalpy> {
            Ok(if is_heater(p) { 720.0 } else { 190.0 })
        }

        fn saturated_vapor_enthalpy(&self, _p: Pressure) -> PropertyResult<SpecEnthalpy> {
            Ok(2590.0)
        }

        fn saturated_liquid_volume(&self, _p: Pressure) -> PropertyResult<SpecVolume> {
            Ok(0.001)
        }

        fn saturation_temperature(&self, _p: Pressure) -> PropertyResult<Temperature> {
            Ok(degc(100.0))
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn baseline_balance_by_hand() {
        let fluid = MockWater::new();
        let params = CycleParameters::reference();
        let result = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap();

        let wp1 = 0.001 * 7.9 * 100.0 / 0.9;
        let wp2 = 0.001 * 62.0 * 100.0 / 0.9;
        let h2 = 190.0 + wp1;
        let h4 = 720.0 + wp2;
        let h6 = 3400.0 - 0.9 * (3400.0 - 2800.0);
        let h7 = 3400.0 - 0.9 * (3400.0 - 2100.0);
        let y = (720.0 - h2) / (h6 - h2);
        let wt = (3400.0 - h6) + (1.0 - y) * (h6 - h7);
        let wp = wp1 + (1.0 - y) * wp2;
        let q = 3400.0 - h4;

        assert!(close(result.mass_fraction, y));
        assert!(close(result.energy.turbine_work, wt));
        assert!(close(result.energy.pump_work, wp));
        assert!(close(result.energy.heat_input, q));
        assert!(close(result.efficiency, 100.0 * (wt - wp) / q));
        assert!(close(result.quality, (h7 - 190.0) / 2400.0));
        assert_eq!(result.exit_phase, ExitPhase::Wet);
        assert_eq!(result.topology, TopologyKind::Baseline);
    }

    #[test]
    fn reheat_balance_swaps_pump_weighting() {
        let fluid = MockWater::new();
        let params = CycleParameters::reference();
        let result = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Reheat {
                inlet: degc(500.0),
                reheat: degc(400.0),
            })
            .unwrap();

        let wp1 = 0.001 * 7.9 * 100.0 / 0.9;
        let wp2 = 0.001 * 62.0 * 100.0 / 0.9;
        let h2 = 190.0 + wp1;
        let h4 = 720.0 + wp2;
        let h6 = 3400.0 - 0.9 * (3400.0 - 2800.0);
        let h7 = 3200.0;
        let h8 = 3200.0 - 0.9 * (3200.0 - 2400.0);
        let y = (720.0 - h2) / (h6 - h2);

        assert!(close(result.energy.pump_work, (1.0 - y) * wp1 + wp2));
        assert!(close(result.energy.turbine_work, (3400.0 - h6) + (1.0 - y) * (h7 - h8)));
        assert!(close(result.energy.heat_input, (3400.0 - h4) + (1.0 - y) * (h7 - h6)));
        assert!(close(result.quality, (h8 - 190.0) / 2400.0));
        assert_eq!(result.temperature, degc(400.0));
    }

    #[test]
    fn mass_fraction_above_one_is_degenerate() {
        let fluid = MockWater {
            extraction_hs: 300.0,
            ..MockWater::new()
        };
        let params = CycleParameters::reference();
        let err = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap_err();
        assert!(matches!(
            err,
            CycleError::DegenerateBalance {
                what: "mass fraction",
                ..
            }
        ));
    }

    #[test]
    fn bleed_at_condensate_enthalpy_is_degenerate() {
        let fluid = MockWater::new();
        let params = CycleParameters::reference();
        let evaluator = CycleEvaluator::new(&fluid, &params);
        let topology = Topology::Baseline { inlet: degc(500.0) };

        let CycleStates::Baseline(mut states) = evaluator.builder().build(&topology).unwrap() else {
            panic!("expected baseline states");
        };
        let h2 = states.feedwater.condensate_pump_exit.enthalpy();
        states.extraction.outlet = ThermodynamicState::expanded(bar(8.0), h2);

        let err = evaluator
            .reduce(degc(500.0), &CycleStates::Baseline(states))
            .unwrap_err();
        assert!(
            matches!(
                err,
                CycleError::DegenerateBalance {
                    what: "mass fraction",
                    ..
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn net_work_below_pump_work_is_degenerate() {
        // Almost no enthalpy drop across either turbine leg
        let fluid = MockWater {
            extraction_hs: 3399.0,
            exit_hs: 3399.0,
            ..MockWater::new()
        };
        let params = CycleParameters::reference();
        let err = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap_err();
        match err {
            CycleError::DegenerateBalance {
                what: "thermal efficiency",
                value,
            } => assert!(value < 0.0, "efficiency = {value}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn boiler_inlet_at_feed_pump_enthalpy_is_degenerate() {
        let params = CycleParameters::reference();
        let fw = CycleStateBuilder::new(&MockWater::new(), &params)
            .feedwater_train()
            .unwrap();
        let fluid = MockWater {
            inlet_h: fw.feed_pump_exit.enthalpy(),
            ..MockWater::new()
        };

        let err = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap_err();
        assert_eq!(
            err,
            CycleError::DegenerateBalance {
                what: "heat input",
                value: 0.0,
            }
        );
    }

    #[test]
    fn superheated_exit_is_reported_unclamped() {
        let fluid = MockWater {
            exit_hs: 2700.0,
            ..MockWater::new()
        };
        let params = CycleParameters::reference();
        let result = CycleEvaluator::new(&fluid, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap();
        assert!(result.quality > 1.0);
        assert_eq!(result.exit_phase, ExitPhase::Superheated);
    }

    #[test]
    fn exit_phase_classification() {
        assert_eq!(ExitPhase::from_quality(-0.1), ExitPhase::Subcooled);
        assert_eq!(ExitPhase::from_quality(0.0), ExitPhase::Wet);
        assert_eq!(ExitPhase::from_quality(0.87), ExitPhase::Wet);
        assert_eq!(ExitPhase::from_quality(1.0), ExitPhase::SaturatedVapour);
        assert_eq!(ExitPhase::from_quality(1.02), ExitPhase::Superheated);
    }
}
