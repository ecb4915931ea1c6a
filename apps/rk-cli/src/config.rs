//! YAML study file.
//!
//! Every field is optional; anything left out falls back to the reference
//! study (70 / 8 / 0.1 bar, 90 % efficiencies, 300-600 °C baseline sweep,
//! 300-400 °C reheat sweep at a 500 °C inlet).

use crate::error::{AppError, AppResult};
use rk_core::units::{bar, degc};
use rk_cycle::{CycleParameters, SweepPlan, TemperatureRange};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StudyConfig {
    pub cycle: CycleDef,
    pub baseline: BaselineDef,
    pub reheat: ReheatDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CycleDef {
    pub boiler_pressure_bar: f64,
    pub heater_pressure_bar: f64,
    pub condenser_pressure_bar: f64,
    pub turbine_efficiency: f64,
    pub pump_efficiency: f64,
}

impl Default for CycleDef {
    fn default() -> Self {
        Self {
            boiler_pressure_bar: 70.0,
            heater_pressure_bar: 8.0,
            condenser_pressure_bar: 0.1,
            turbine_efficiency: 0.9,
            pump_efficiency: 0.9,
        }
    }
}

/// Inclusive temperature grid in °C.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeDef {
    pub start_c: f64,
    pub end_c: f64,
    pub step_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BaselineDef {
    pub inlet: RangeDef,
}

impl Default for BaselineDef {
    fn default() -> Self {
        Self {
            inlet: RangeDef {
                start_c: 300.0,
                end_c: 600.0,
                step_c: 25.0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReheatDef {
    pub inlet_temperature_c: f64,
    pub reheat: RangeDef,
}

impl Default for ReheatDef {
    fn default() -> Self {
        Self {
            inlet_temperature_c: 500.0,
            reheat: RangeDef {
                start_c: 300.0,
                end_c: 400.0,
                step_c: 25.0,
            },
        }
    }
}

impl RangeDef {
    fn to_range(&self) -> AppResult<TemperatureRange> {
        Ok(TemperatureRange::new(self.start_c, self.end_c, self.step_c)?)
    }
}

impl StudyConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn parameters(&self) -> AppResult<CycleParameters> {
        let c = &self.cycle;
        Ok(CycleParameters::new(
            bar(c.boiler_pressure_bar),
            bar(c.heater_pressure_bar),
            bar(c.condenser_pressure_bar),
            c.turbine_efficiency,
            c.pump_efficiency,
        )?)
    }

    pub fn baseline_plan(&self) -> AppResult<SweepPlan> {
        Ok(SweepPlan::baseline(&self.baseline.inlet.to_range()?))
    }

    pub fn reheat_plan(&self) -> AppResult<SweepPlan> {
        Ok(SweepPlan::reheat(
            degc(self.reheat.inlet_temperature_c),
            &self.reheat.reheat.to_range()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_reference_study() {
        let config = StudyConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, StudyConfig::default());
        assert_eq!(config.parameters().unwrap(), CycleParameters::reference());
        assert_eq!(config.baseline_plan().unwrap(), SweepPlan::reference_baseline());
        assert_eq!(config.reheat_plan().unwrap(), SweepPlan::reference_reheat());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let yaml = "cycle:\n  turbine_efficiency: 0.85\nreheat:\n  inlet_temperature_c: 550\n";
        let config = StudyConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.cycle.turbine_efficiency, 0.85);
        assert_eq!(config.cycle.boiler_pressure_bar, 70.0);
        assert_eq!(config.reheat.inlet_temperature_c, 550.0);
        assert_eq!(config.reheat.reheat.end_c, 400.0);
    }

    #[test]
    fn default_file_round_trips() {
        let yaml = StudyConfig::default().to_yaml().unwrap();
        assert!(yaml.contains("boiler_pressure_bar"));
        assert_eq!(StudyConfig::from_yaml_str(&yaml).unwrap(), StudyConfig::default());
    }

    #[test]
    fn invalid_values_surface_as_errors() {
        let yaml = "cycle:\n  heater_pressure_bar: 90\n";
        let config = StudyConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(config.parameters(), Err(AppError::Cycle(_))));

        let yaml = "baseline:\n  inlet: { start_c: 600, end_c: 300, step_c: 25 }\n";
        let config = StudyConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(config.baseline_plan(), Err(AppError::Sweep(_))));

        assert!(matches!(
            StudyConfig::from_yaml_str("cycle: [1, 2]"),
            Err(AppError::Yaml(_))
        ));
    }

    #[test]
    fn missing_file_names_path() {
        let err = StudyConfig::load(Path::new("/nonexistent/study.yaml")).unwrap_err();
        assert!(err.to_string().contains("study.yaml"));
    }
}
