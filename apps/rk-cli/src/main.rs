mod config;
mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use config::StudyConfig;
use error::AppResult;
use report::OutputFormat;
use rk_core::units::degc;
use rk_cycle::{
    CycleEvaluator, Execution, FailurePolicy, SweepDriver, SweepOptions, SweepResult, Topology,
};
use rk_fluids::{CoolPropWater, If97Water, PropertyProvider};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rk-cli")]
#[command(about = "Regenerative Rankine cycle study - efficiency and exit quality sweeps", long_about = None)]
struct Cli {
    /// Study file (YAML); the reference study is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Water/steam property backend
    #[arg(long, value_enum, global = true, default_value_t = FluidArg::Coolprop)]
    fluid: FluidArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run temperature sweeps
    Sweep {
        /// Which cycle to sweep
        #[arg(long, value_enum, default_value_t = TopologyArg::Both)]
        topology: TopologyArg,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Stop at the first failing point instead of skipping it
        #[arg(long)]
        abort_on_error: bool,
        /// Evaluate sweep points in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Evaluate one operating point and show every cycle state
    Point {
        /// Turbine inlet temperature in °C
        #[arg(long)]
        inlet: f64,
        /// Reheat temperature in °C (selects the reheat cycle)
        #[arg(long)]
        reheat: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the default study file
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TopologyArg {
    Baseline,
    Reheat,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FluidArg {
    /// IAPWS-95 through CoolProp
    Coolprop,
    /// Built-in IAPWS-IF97 equations
    If97,
}

impl FluidArg {
    fn provider(self) -> Box<dyn PropertyProvider> {
        match self {
            Self::Coolprop => Box::new(CoolPropWater::new()),
            Self::If97 => Box::new(If97Water::new()),
        }
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let study = match &cli.config {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };

    match cli.command {
        Commands::Sweep {
            topology,
            format,
            abort_on_error,
            parallel,
        } => {
            let options = SweepOptions {
                failure_policy: if abort_on_error {
                    FailurePolicy::Abort
                } else {
                    FailurePolicy::Skip
                },
                execution: if parallel {
                    Execution::Parallel
                } else {
                    Execution::Sequential
                },
            };
            cmd_sweep(cli.fluid.provider().as_ref(), &study, topology, options, format)
        }
        Commands::Point {
            inlet,
            reheat,
            format,
        } => cmd_point(cli.fluid.provider().as_ref(), &study, inlet, reheat, format),
        Commands::Config => cmd_config(),
    }
}

fn cmd_sweep(
    water: &dyn PropertyProvider,
    study: &StudyConfig,
    topology: TopologyArg,
    options: SweepOptions,
    format: OutputFormat,
) -> AppResult<()> {
    let params = study.parameters()?;
    let driver = SweepDriver::new(water, &params).with_options(options);
    info!(provider = water.name(), "running sweeps");

    let mut plans = Vec::new();
    if matches!(topology, TopologyArg::Baseline | TopologyArg::Both) {
        plans.push(study.baseline_plan()?);
    }
    if matches!(topology, TopologyArg::Reheat | TopologyArg::Both) {
        plans.push(study.reheat_plan()?);
    }

    let sweeps = plans
        .iter()
        .map(|plan| driver.run(plan))
        .collect::<Result<Vec<SweepResult>, _>>()?;

    let mut stdout = io::stdout().lock();
    report::render_sweeps(&mut stdout, &sweeps, format)?;
    stdout.flush()?;
    Ok(())
}

fn cmd_point(
    water: &dyn PropertyProvider,
    study: &StudyConfig,
    inlet: f64,
    reheat: Option<f64>,
    format: OutputFormat,
) -> AppResult<()> {
    let params = study.parameters()?;
    let topology = match reheat {
        Some(reheat) => Topology::Reheat {
            inlet: degc(inlet),
            reheat: degc(reheat),
        },
        None => Topology::Baseline { inlet: degc(inlet) },
    };

    let (states, result) = CycleEvaluator::new(water, &params).evaluate_with_states(&topology)?;

    let mut stdout = io::stdout().lock();
    report::render_point(&mut stdout, &states, &result, format)?;
    stdout.flush()?;
    Ok(())
}

fn cmd_config() -> AppResult<()> {
    let yaml = StudyConfig::default().to_yaml()?;
    print!("{yaml}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sweep_flags_parse() {
        let cli = Cli::try_parse_from([
            "rk-cli",
            "sweep",
            "--topology",
            "reheat",
            "--format",
            "csv",
            "--abort-on-error",
            "--parallel",
        ])
        .unwrap();
        let Commands::Sweep {
            topology,
            format,
            abort_on_error,
            parallel,
        } = cli.command
        else {
            panic!("expected sweep");
        };
        assert_eq!(topology, TopologyArg::Reheat);
        assert_eq!(format, OutputFormat::Csv);
        assert!(abort_on_error && parallel);
        assert_eq!(cli.fluid, FluidArg::Coolprop);
    }

    #[test]
    fn fluid_backend_is_selectable() {
        let cli = Cli::try_parse_from(["rk-cli", "point", "--inlet", "500", "--fluid", "if97"]).unwrap();
        assert_eq!(cli.fluid, FluidArg::If97);
        assert_eq!(cli.fluid.provider().name(), "IAPWS-IF97");
        assert_eq!(FluidArg::Coolprop.provider().name(), "CoolProp");
    }

    #[test]
    fn point_requires_inlet() {
        assert!(Cli::try_parse_from(["rk-cli", "point"]).is_err());
        let cli = Cli::try_parse_from(["rk-cli", "point", "--inlet", "500", "--reheat", "400"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Point {
                reheat: Some(_),
                ..
            }
        ));
    }
}
