//! rk-cycle: regenerative Rankine cycle evaluation.
//!
//! Provides:
//! - Cycle parameters (pressures, efficiencies) and the pump/turbine laws
//! - State construction for the baseline and reheat topologies
//! - Feedwater-heater mass balance, energy balance, efficiency and exit quality
//! - Temperature sweeps with skip/abort failure handling
//!
//! Every property query goes through an injected [`rk_fluids::PropertyProvider`];
//! nothing in this crate holds a global fluid instance.
//!
//! # Example
//!
//! ```
//! use rk_cycle::{CycleParameters, SweepDriver, SweepPlan};
//! use rk_fluids::CoolPropWater;
//!
//! let water = CoolPropWater::new();
//! let params = CycleParameters::reference();
//! let sweep = SweepDriver::new(&water, &params)
//!     .run(&SweepPlan::reference_baseline())
//!     .unwrap();
//! assert_eq!(sweep.len(), 13);
//! ```

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod params;
pub mod pump;
pub mod state;
pub mod sweep;
pub mod turbine;

pub use builder::{
    BaselineStates, CycleStateBuilder, CycleStates, FeedwaterTrain, ReheatStates, Topology,
    TopologyKind,
};
pub use error::{CycleError, SolveResult, SweepError};
pub use evaluator::{CycleEvaluator, CycleResult, EnergyBalance, ExitPhase};
pub use params::CycleParameters;
pub use pump::{Compression, Pump};
pub use state::{StatePoint, ThermodynamicState};
pub use sweep::{
    Execution, FailurePolicy, SweepDriver, SweepFailure, SweepOptions, SweepPlan, SweepResult,
    SweepRow, TemperatureRange,
};
pub use turbine::{Expansion, Turbine};
