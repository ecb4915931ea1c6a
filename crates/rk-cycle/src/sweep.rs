//! Temperature sweeps over one topology.
//!
//! A sweep evaluates each temperature independently and keeps results in input
//! order, whether points run sequentially or on the rayon pool. Failing points
//! are either skipped (recorded as missing plus a [`SweepFailure`]) or abort the
//! sweep, depending on [`FailurePolicy`].

use crate::builder::{Topology, TopologyKind};
use crate::error::{CycleError, SweepError};
use crate::evaluator::{CycleEvaluator, CycleResult};
use crate::params::CycleParameters;
use rayon::prelude::*;
use rk_core::units::{Temperature, degc, to_degc};
use rk_fluids::PropertyProvider;
use tracing::{debug, info, warn};

/// Inclusive, evenly stepped temperature grid in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    start_c: f64,
    end_c: f64,
    step_c: f64,
}

impl TemperatureRange {
    pub fn new(start_c: f64, end_c: f64, step_c: f64) -> Result<Self, SweepError> {
        if !(start_c.is_finite() && end_c.is_finite() && step_c.is_finite()) {
            return Err(SweepError::InvalidPlan {
                what: "temperature range bounds must be finite",
            });
        }
        if step_c <= 0.0 {
            return Err(SweepError::InvalidPlan {
                what: "temperature step must be positive",
            });
        }
        if end_c < start_c {
            return Err(SweepError::InvalidPlan {
                what: "temperature range end is below its start",
            });
        }
        Ok(Self {
            start_c,
            end_c,
            step_c,
        })
    }

    pub fn start_c(&self) -> f64 {
        self.start_c
    }

    pub fn end_c(&self) -> f64 {
        self.end_c
    }

    pub fn step_c(&self) -> f64 {
        self.step_c
    }

    /// Grid values in °C; `end_c` is included when it lies on the grid.
    pub fn celsius(&self) -> Vec<f64> {
        let count = ((self.end_c - self.start_c) / self.step_c + 1e-9).floor() as usize + 1;
        (0..count)
            .map(|i| self.start_c + i as f64 * self.step_c)
            .collect()
    }

    pub fn points(&self) -> Vec<Temperature> {
        self.celsius().into_iter().map(degc).collect()
    }
}

/// What a sweep varies, with everything else held fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepPlan {
    Baseline {
        inlet_temperatures: Vec<Temperature>,
    },
    Reheat {
        inlet_temperature: Temperature,
        reheat_temperatures: Vec<Temperature>,
    },
}

impl SweepPlan {
    pub fn baseline(range: &TemperatureRange) -> Self {
        Self::Baseline {
            inlet_temperatures: range.points(),
        }
    }

    pub fn reheat(inlet_temperature: Temperature, range: &TemperatureRange) -> Self {
        Self::Reheat {
            inlet_temperature,
            reheat_temperatures: range.points(),
        }
    }

    /// Inlet 300 to 600 °C in 25 °C steps.
    pub fn reference_baseline() -> Self {
        Self::Baseline {
            inlet_temperatures: (0..=12).map(|i| degc(300.0 + 25.0 * f64::from(i))).collect(),
        }
    }

    /// Reheat 300 to 400 °C in 25 °C steps at a 500 °C inlet.
    pub fn reference_reheat() -> Self {
        Self::Reheat {
            inlet_temperature: degc(500.0),
            reheat_temperatures: (0..=4).map(|i| degc(300.0 + 25.0 * f64::from(i))).collect(),
        }
    }

    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Baseline { .. } => TopologyKind::Baseline,
            Self::Reheat { .. } => TopologyKind::Reheat,
        }
    }

    pub fn swept_temperatures(&self) -> &[Temperature] {
        match self {
            Self::Baseline { inlet_temperatures } => inlet_temperatures,
            Self::Reheat {
                reheat_temperatures,
                ..
            } => reheat_temperatures,
        }
    }

    pub fn len(&self) -> usize {
        self.swept_temperatures().len()
    }

    pub fn is_empty(&self) -> bool {
        self.swept_temperatures().is_empty()
    }

    /// One operating point per swept temperature, in order.
    pub fn topologies(&self) -> Vec<Topology> {
        match self {
            Self::Baseline { inlet_temperatures } => inlet_temperatures
                .iter()
                .map(|&inlet| Topology::Baseline { inlet })
                .collect(),
            Self::Reheat {
                inlet_temperature,
                reheat_temperatures,
            } => reheat_temperatures
                .iter()
                .map(|&reheat| Topology::Reheat {
                    inlet: *inlet_temperature,
                    reheat,
                })
                .collect(),
        }
    }
}

/// Handling of a point that fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the point as missing and continue.
    #[default]
    Skip,
    /// Stop at the first failing point (in input order).
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Sequential,
    /// Evaluate points on the rayon thread pool.
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOptions {
    pub failure_policy: FailurePolicy,
    pub execution: Execution,
}

/// A skipped point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFailure {
    pub index: usize,
    pub temperature: Temperature,
    pub error: CycleError,
}

/// (temperature, efficiency, quality) for presentation; `None` where the point failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub temperature_c: f64,
    pub efficiency: Option<f64>,
    pub quality: Option<f64>,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub topology: TopologyKind,
    /// Swept temperatures, in input order
    pub temperatures: Vec<Temperature>,
    /// One entry per temperature; `None` for skipped points
    pub results: Vec<Option<CycleResult>>,
    pub failures: Vec<SweepFailure>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn num_successful(&self) -> usize {
        self.results.iter().filter(|r| r.is_some()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.failures.len()
    }

    pub fn rows(&self) -> Vec<SweepRow> {
        self.temperatures
            .iter()
            .zip(&self.results)
            .map(|(t, r)| SweepRow {
                temperature_c: to_degc(*t),
                efficiency: r.as_ref().map(|r| r.efficiency),
                quality: r.as_ref().map(|r| r.quality),
            })
            .collect()
    }

    /// Efficiencies of successful points only.
    pub fn efficiencies(&self) -> Vec<f64> {
        self.results.iter().flatten().map(|r| r.efficiency).collect()
    }
}

/// Runs sweep plans through a [`CycleEvaluator`].
pub struct SweepDriver<'a> {
    evaluator: CycleEvaluator<'a>,
    options: SweepOptions,
}

impl<'a> SweepDriver<'a> {
    pub fn new(fluid: &'a dyn PropertyProvider, params: &'a CycleParameters) -> Self {
        Self {
            evaluator: CycleEvaluator::new(fluid, params),
            options: SweepOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SweepOptions {
        self.options
    }

    pub fn evaluator(&self) -> &CycleEvaluator<'a> {
        &self.evaluator
    }

    pub fn run(&self, plan: &SweepPlan) -> Result<SweepResult, SweepError> {
        let topologies = plan.topologies();
        info!(
            topology = %plan.kind(),
            points = topologies.len(),
            execution = ?self.options.execution,
            "starting sweep"
        );

        let outcomes: Vec<_> = match self.options.execution {
            Execution::Sequential => topologies.iter().map(|t| self.evaluator.evaluate(t)).collect(),
            Execution::Parallel => topologies
                .par_iter()
                .map(|t| self.evaluator.evaluate(t))
                .collect(),
        };

        let mut results = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (index, (topology, outcome)) in topologies.iter().zip(outcomes).enumerate() {
            let temperature = topology.swept_temperature();
            match outcome {
                Ok(result) => {
                    debug!(
                        index,
                        temperature_c = to_degc(temperature),
                        efficiency = result.efficiency,
                        quality = result.quality,
                        "sweep point"
                    );
                    results.push(Some(result));
                }
                Err(error) => match self.options.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(SweepError::PointFailed {
                            index,
                            temperature_c: to_degc(temperature),
                            source: error,
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!(
                            index,
                            temperature_c = to_degc(temperature),
                            %error,
                            "skipping failed sweep point"
                        );
                        results.push(None);
                        failures.push(SweepFailure {
                            index,
                            temperature,
                            error,
                        });
                    }
                },
            }
        }

        let result = SweepResult {
            topology: plan.kind(),
            temperatures: plan.swept_temperatures().to_vec(),
            results,
            failures,
        };
        info!(
            topology = %result.topology,
            successful = result.num_successful(),
            failed = result.num_failed(),
            "sweep finished"
        );
        Ok(result)
    }
}
