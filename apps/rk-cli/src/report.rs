//! Rendering of sweep and point results to stdout formats.

use crate::error::AppResult;
use clap::ValueEnum;
use rk_core::units::{to_bar, to_degc};
use rk_cycle::{CycleResult, CycleStates, SweepResult, TopologyKind};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct SweepReport {
    topology: &'static str,
    swept: &'static str,
    rows: Vec<RowReport>,
    failures: Vec<FailureReport>,
}

#[derive(Debug, Serialize)]
struct RowReport {
    temperature_c: f64,
    efficiency_pct: Option<f64>,
    quality: Option<f64>,
    mass_fraction: Option<f64>,
}

#[derive(Debug, Serialize)]
struct FailureReport {
    index: usize,
    temperature_c: f64,
    error: String,
}

#[derive(Debug, Serialize)]
struct PointReport {
    topology: &'static str,
    temperature_c: f64,
    efficiency_pct: f64,
    quality: f64,
    exit_phase: &'static str,
    mass_fraction: f64,
    turbine_work_kj_kg: f64,
    pump_work_kj_kg: f64,
    heat_input_kj_kg: f64,
    net_work_kj_kg: f64,
    states: Vec<StateReport>,
}

#[derive(Debug, Serialize)]
struct StateReport {
    number: usize,
    point: &'static str,
    pressure_bar: f64,
    temperature_c: Option<f64>,
    enthalpy_kj_kg: f64,
    entropy_kj_kg_k: Option<f64>,
}

fn swept_label(kind: TopologyKind) -> &'static str {
    match kind {
        TopologyKind::Baseline => "inlet temperature",
        TopologyKind::Reheat => "reheat temperature",
    }
}

fn sweep_report(sweep: &SweepResult) -> SweepReport {
    SweepReport {
        topology: sweep.topology.label(),
        swept: swept_label(sweep.topology),
        rows: sweep
            .rows()
            .into_iter()
            .zip(&sweep.results)
            .map(|(row, result)| RowReport {
                temperature_c: row.temperature_c,
                efficiency_pct: row.efficiency,
                quality: row.quality,
                mass_fraction: result.as_ref().map(|r| r.mass_fraction),
            })
            .collect(),
        failures: sweep
            .failures
            .iter()
            .map(|f| FailureReport {
                index: f.index,
                temperature_c: to_degc(f.temperature),
                error: f.error.to_string(),
            })
            .collect(),
    }
}

fn opt(v: Option<f64>, precision: usize) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

pub fn render_sweeps<W: Write>(out: &mut W, sweeps: &[SweepResult], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Table => {
            for (i, sweep) in sweeps.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{} sweep ({})", sweep.topology, swept_label(sweep.topology))?;
                writeln!(out, "{:>10}  {:>14}  {:>10}", "T [°C]", "efficiency [%]", "quality")?;
                for row in sweep.rows() {
                    writeln!(
                        out,
                        "{:>10.1}  {:>14}  {:>10}",
                        row.temperature_c,
                        opt(row.efficiency, 4),
                        opt(row.quality, 5)
                    )?;
                }
                for failure in &sweep.failures {
                    writeln!(
                        out,
                        "  skipped {:.1} °C: {}",
                        to_degc(failure.temperature),
                        failure.error
                    )?;
                }
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "topology,temperature_c,efficiency_pct,quality,mass_fraction")?;
            for sweep in sweeps {
                for row in sweep_report(sweep).rows {
                    let field = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
                    writeln!(
                        out,
                        "{},{:.2},{},{},{}",
                        sweep.topology,
                        row.temperature_c,
                        field(row.efficiency_pct),
                        field(row.quality),
                        field(row.mass_fraction)
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            let reports: Vec<_> = sweeps.iter().map(sweep_report).collect();
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn point_report(states: &CycleStates, result: &CycleResult) -> PointReport {
    PointReport {
        topology: result.topology.label(),
        temperature_c: to_degc(result.temperature),
        efficiency_pct: result.efficiency,
        quality: result.quality,
        exit_phase: result.exit_phase.label(),
        mass_fraction: result.mass_fraction,
        turbine_work_kj_kg: result.energy.turbine_work,
        pump_work_kj_kg: result.energy.pump_work,
        heat_input_kj_kg: result.energy.heat_input,
        net_work_kj_kg: result.energy.net_work,
        states: states
            .states()
            .into_iter()
            .enumerate()
            .map(|(i, (point, state))| StateReport {
                number: i + 1,
                point: point.label(),
                pressure_bar: to_bar(state.pressure()),
                temperature_c: state.temperature().map(to_degc),
                enthalpy_kj_kg: state.enthalpy(),
                entropy_kj_kg_k: state.entropy(),
            })
            .collect(),
    }
}

pub fn render_point<W: Write>(
    out: &mut W,
    states: &CycleStates,
    result: &CycleResult,
    format: OutputFormat,
) -> AppResult<()> {
    let report = point_report(states, result);
    match format {
        OutputFormat::Table => {
            writeln!(out, "{} cycle at {:.1} °C", report.topology, report.temperature_c)?;
            writeln!(
                out,
                "{:>2}  {:<22} {:>9}  {:>8}  {:>10}  {:>9}",
                "#", "point", "p [bar]", "T [°C]", "h [kJ/kg]", "s [kJ/kgK]"
            )?;
            for s in &report.states {
                writeln!(
                    out,
                    "{:>2}  {:<22} {:>9.3}  {:>8}  {:>10.3}  {:>9}",
                    s.number,
                    s.point,
                    s.pressure_bar,
                    opt(s.temperature_c, 1),
                    s.enthalpy_kj_kg,
                    opt(s.entropy_kj_kg_k, 4)
                )?;
            }
            writeln!(out)?;
            writeln!(out, "mass fraction y     {:.6}", report.mass_fraction)?;
            writeln!(out, "turbine work        {:.3} kJ/kg", report.turbine_work_kj_kg)?;
            writeln!(out, "pump work           {:.3} kJ/kg", report.pump_work_kj_kg)?;
            writeln!(out, "net work            {:.3} kJ/kg", report.net_work_kj_kg)?;
            writeln!(out, "heat input          {:.3} kJ/kg", report.heat_input_kj_kg)?;
            writeln!(out, "thermal efficiency  {:.4} %", report.efficiency_pct)?;
            writeln!(out, "exit quality        {:.5} ({})", report.quality, report.exit_phase)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "number,point,pressure_bar,temperature_c,enthalpy_kj_kg,entropy_kj_kg_k")?;
            for s in &report.states {
                let field = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    s.number,
                    s.point,
                    s.pressure_bar,
                    field(s.temperature_c),
                    s.enthalpy_kj_kg,
                    field(s.entropy_kj_kg_k)
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_core::units::degc;
    use rk_cycle::{CycleError, CycleEvaluator, CycleParameters, SweepFailure, Topology};
    use rk_fluids::{CoolPropWater, If97Water};

    // IF97 keeps the printed digits fixed
    fn sample_sweep() -> SweepResult {
        let water = If97Water::new();
        let params = CycleParameters::reference();
        let result = CycleEvaluator::new(&water, &params)
            .evaluate(&Topology::Baseline { inlet: degc(500.0) })
            .unwrap();
        SweepResult {
            topology: TopologyKind::Baseline,
            temperatures: vec![degc(500.0), degc(900.0)],
            results: vec![Some(result), None],
            failures: vec![SweepFailure {
                index: 1,
                temperature: degc(900.0),
                error: CycleError::DegenerateBalance {
                    what: "mass fraction",
                    value: 1.2,
                },
            }],
        }
    }

    fn render(sweeps: &[SweepResult], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render_sweeps(&mut buf, sweeps, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_marks_missing_points() {
        let text = render(&[sample_sweep()], OutputFormat::Table);
        assert!(text.starts_with("baseline sweep (inlet temperature)"));
        assert!(text.contains("37.4774"), "{text}");
        assert!(text.contains("0.87268"), "{text}");
        assert!(text.contains("skipped 900.0 °C"), "{text}");
    }

    #[test]
    fn csv_has_one_line_per_point() {
        let text = render(&[sample_sweep()], OutputFormat::Csv);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("baseline,500.00,37.47"), "{}", lines[1]);
        assert_eq!(lines[2], "baseline,900.00,,,");
    }

    #[test]
    fn json_is_parseable() {
        let text = render(&[sample_sweep()], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = &value[0]["rows"];
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert!(rows[1]["efficiency_pct"].is_null());
        assert_eq!(value[0]["failures"][0]["index"], 1);
    }

    #[test]
    fn point_report_lists_states() {
        let water = CoolPropWater::new();
        let params = CycleParameters::reference();
        let (states, result) = CycleEvaluator::new(&water, &params)
            .evaluate_with_states(&Topology::Reheat {
                inlet: degc(500.0),
                reheat: degc(400.0),
            })
            .unwrap();

        let mut buf = Vec::new();
        render_point(&mut buf, &states, &result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["states"].as_array().unwrap().len(), 8);
        assert_eq!(value["states"][7]["point"], "LP turbine exit");

        let mut buf = Vec::new();
        render_point(&mut buf, &states, &result, OutputFormat::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("thermal efficiency"));
        assert!(text.contains("reheat exit"));
    }
}
