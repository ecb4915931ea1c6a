//! Steam turbine expansion leg.

use crate::error::{CycleError, SolveResult};
use crate::state::ThermodynamicState;
use rk_core::numeric::ensure_finite;
use rk_core::units::Pressure;
use rk_fluids::{PropertyProvider, SpecEnthalpy};

/// Turbine leg with a fixed isentropic efficiency.
///
/// ## Model
///
/// Each leg starts from its own inlet entropy:
///
/// ```text
/// h_s   = h(p_out, s_in)
/// h_out = h_in - eta * (h_in - h_s)
/// ```
///
/// Legs are not chained: a bleed and the final exit taken off the same
/// inlet both use the inlet entropy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turbine {
    pub(crate) eta: f64,
}

/// Outcome of one expansion leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
    /// Actual outlet state.
    pub outlet: ThermodynamicState,
    /// Isentropic outlet enthalpy [kJ/kg].
    pub isentropic_enthalpy: SpecEnthalpy,
}

impl Expansion {
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.outlet.enthalpy()
    }
}

impl Turbine {
    /// Create a turbine with isentropic efficiency `eta` in (0, 1].
    pub fn new(eta: f64) -> SolveResult<Self> {
        if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
            return Err(CycleError::InvalidParameters {
                what: "turbine efficiency must be in (0,1]",
            });
        }
        Ok(Self { eta })
    }

    pub fn efficiency(&self) -> f64 {
        self.eta
    }

    /// Actual outlet enthalpy for a given isentropic outlet enthalpy.
    pub fn actual_enthalpy(&self, h_in: SpecEnthalpy, h_s: SpecEnthalpy) -> SpecEnthalpy {
        h_in - self.eta * (h_in - h_s)
    }

    /// Expand `inlet` down to `p_out`.
    ///
    /// The inlet must carry an entropy (a state fixed by pressure and temperature).
    pub fn expand(
        &self,
        fluid: &dyn PropertyProvider,
        inlet: &ThermodynamicState,
        p_out: Pressure,
    ) -> SolveResult<Expansion> {
        let s_in = inlet.entropy().ok_or(CycleError::MissingProperty {
            point: "turbine inlet",
            what: "entropy",
        })?;
        if p_out > inlet.pressure() {
            return Err(CycleError::InvalidParameters {
                what: "turbine outlet pressure above inlet pressure",
            });
        }

        let h_s = fluid.enthalpy_ps(p_out, s_in)?;
        let h_out = ensure_finite(self.actual_enthalpy(inlet.enthalpy(), h_s), "turbine exit enthalpy")?;

        Ok(Expansion {
            outlet: ThermodynamicState::expanded(p_out, h_out),
            isentropic_enthalpy: h_s,
        })
    }
}
