//! Sweep-invariant cycle configuration.

use crate::error::{CycleError, SolveResult};
use crate::pump::Pump;
use crate::turbine::Turbine;
use rk_core::units::{Pressure, bar};

/// Pressures and component efficiencies shared by every point of a sweep.
///
/// Constructed once and only read afterwards; `Copy` so parallel sweep workers
/// can each hold their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleParameters {
    boiler_pressure: Pressure,
    heater_pressure: Pressure,
    condenser_pressure: Pressure,
    turbine: Turbine,
    pump: Pump,
}

impl CycleParameters {
    /// Validate and build cycle parameters.
    ///
    /// # Errors
    /// `InvalidParameters` unless boiler > heater > condenser > 0 and both
    /// efficiencies lie in (0, 1].
    pub fn new(
        boiler_pressure: Pressure,
        heater_pressure: Pressure,
        condenser_pressure: Pressure,
        turbine_efficiency: f64,
        pump_efficiency: f64,
    ) -> SolveResult<Self> {
        let finite = [boiler_pressure, heater_pressure, condenser_pressure]
            .iter()
            .all(|p| p.value.is_finite());
        if !finite {
            return Err(CycleError::InvalidParameters {
                what: "pressures must be finite",
            });
        }
        if condenser_pressure.value <= 0.0 {
            return Err(CycleError::InvalidParameters {
                what: "condenser pressure must be positive",
            });
        }
        if heater_pressure <= condenser_pressure {
            return Err(CycleError::InvalidParameters {
                what: "feedwater heater pressure must exceed condenser pressure",
            });
        }
        if boiler_pressure <= heater_pressure {
            return Err(CycleError::InvalidParameters {
                what: "boiler pressure must exceed feedwater heater pressure",
            });
        }

        Ok(Self {
            boiler_pressure,
            heater_pressure,
            condenser_pressure,
            turbine: Turbine::new(turbine_efficiency)?,
            pump: Pump::new(pump_efficiency)?,
        })
    }

    /// 70 / 8 / 0.1 bar with 90 % turbine and pump efficiency.
    pub fn reference() -> Self {
        Self {
            boiler_pressure: bar(70.0),
            heater_pressure: bar(8.0),
            condenser_pressure: bar(0.1),
            turbine: Turbine { eta: 0.9 },
            pump: Pump { eta: 0.9 },
        }
    }

    pub fn boiler_pressure(&self) -> Pressure {
        self.boiler_pressure
    }

    pub fn heater_pressure(&self) -> Pressure {
        self.heater_pressure
    }

    pub fn condenser_pressure(&self) -> Pressure {
        self.condenser_pressure
    }

    pub fn turbine(&self) -> &Turbine {
        &self.turbine
    }

    pub fn pump(&self) -> &Pump {
        &self.pump
    }

    pub fn turbine_efficiency(&self) -> f64 {
        self.turbine.efficiency()
    }

    pub fn pump_efficiency(&self) -> f64 {
        self.pump.efficiency()
    }
}

impl Default for CycleParameters {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_core::units::to_bar;

    #[test]
    fn reference_parameters() {
        let params = CycleParameters::default();
        assert!((to_bar(params.boiler_pressure()) - 70.0).abs() < 1e-12);
        assert!((to_bar(params.heater_pressure()) - 8.0).abs() < 1e-12);
        assert!((to_bar(params.condenser_pressure()) - 0.1).abs() < 1e-12);
        assert_eq!(params.turbine_efficiency(), 0.9);
        assert_eq!(params.pump_efficiency(), 0.9);
        assert_eq!(
            params,
            CycleParameters::new(bar(70.0), bar(8.0), bar(0.1), 0.9, 0.9).unwrap()
        );
    }

    #[test]
    fn pressure_ordering_enforced() {
        assert!(CycleParameters::new(bar(8.0), bar(70.0), bar(0.1), 0.9, 0.9).is_err());
        assert!(CycleParameters::new(bar(70.0), bar(0.1), bar(8.0), 0.9, 0.9).is_err());
        assert!(CycleParameters::new(bar(70.0), bar(8.0), bar(0.0), 0.9, 0.9).is_err());
        assert!(CycleParameters::new(bar(70.0), bar(70.0), bar(0.1), 0.9, 0.9).is_err());
        assert!(CycleParameters::new(bar(f64::NAN), bar(8.0), bar(0.1), 0.9, 0.9).is_err());
    }

    #[test]
    fn efficiencies_enforced() {
        let err = CycleParameters::new(bar(70.0), bar(8.0), bar(0.1), 0.0, 0.9).unwrap_err();
        assert!(matches!(err, CycleError::InvalidParameters { .. }));
        assert!(CycleParameters::new(bar(70.0), bar(8.0), bar(0.1), 0.9, 1.2).is_err());
    }
}
