//! Liquid pump model.

use crate::error::{CycleError, SolveResult};
use crate::state::ThermodynamicState;
use rk_core::numeric::ensure_finite;
use rk_core::units::Pressure;
use rk_fluids::{SpecEnthalpy, flow_work};

/// Feedwater or condensate pump.
///
/// ## Model
///
/// The liquid is treated as incompressible at its inlet specific volume:
///
/// ```text
/// w_s = v_in * (p_out - p_in)            (flow work, see rk_fluids::units)
/// w   = w_s / eta
/// h_out = h_in + w
/// ```
///
/// ## Sign Conventions
///
/// - `work` is POSITIVE (work consumed per kg of pumped liquid)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pump {
    pub(crate) eta: f64,
}

/// Result of one pumping step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compression {
    pub outlet: ThermodynamicState,
    /// Actual work [kJ/kg].
    pub work: SpecEnthalpy,
}

impl Pump {
    /// Create a pump with isentropic efficiency `eta` in (0, 1].
    pub fn new(eta: f64) -> SolveResult<Self> {
        if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
            return Err(CycleError::InvalidParameters {
                what: "pump efficiency must be in (0,1]",
            });
        }
        Ok(Self { eta })
    }

    pub fn efficiency(&self) -> f64 {
        self.eta
    }

    /// Raise `inlet` to `p_out`.
    ///
    /// The inlet must carry a specific volume (a saturated-liquid state).
    pub fn compress(&self, inlet: &ThermodynamicState, p_out: Pressure) -> SolveResult<Compression> {
        let v = inlet.specific_volume().ok_or(CycleError::MissingProperty {
            point: "pump inlet",
            what: "specific volume",
        })?;
        if p_out < inlet.pressure() {
            return Err(CycleError::InvalidParameters {
                what: "pump outlet pressure below inlet pressure",
            });
        }

        let work = ensure_finite(flow_work(v, p_out - inlet.pressure()) / self.eta, "pump work")?;
        Ok(Compression {
            outlet: ThermodynamicState::compressed_liquid(p_out, inlet.enthalpy() + work),
            work,
        })
    }
}
