//! ga-sim-cli — run the collision simulator from a config file.
//!
//! ```text
//! ga-sim-cli --config simulator.toml --virtual-time --output ./out
//! ```
//!
//! Without `--config` the defaults apply (deterministic 0 s, no collisions,
//! zero individuals), so at least `--individuals` is usually given.
//! Set `RUST_LOG=debug` to see every computed metric.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ga_core::{SimulatorConfig, WaitMode};
use ga_output::{CsvWriter, RunOutputObserver};
use ga_sim::{RunStepLog, RunSummary, SimulatorBuilder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulator config file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of individuals to simulate (overrides the config)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    individuals: Option<i64>,

    /// RNG seed (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Advance a logical clock instead of sleeping
    #[arg(long)]
    virtual_time: bool,

    /// Directory for step_logs.csv and run_summary.csv
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulatorConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate().context("invalid simulator configuration")?;

    let individuals = config.individuals()?;
    let mut sim = SimulatorBuilder::from_config(&config).build()?;
    tracing::info!(
        timing = %sim.timing(),
        p = sim.collision_probability(),
        wait_mode = %config.wait_mode,
        individuals,
        "simulator ready"
    );

    let started = Instant::now();
    let logs = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            let mut observer = RunOutputObserver::new(writer);
            let result = sim.run_observed(individuals, &mut observer);
            if result.is_err() {
                // on_run_end never fired; flush the rows written so far.
                observer.finish()?;
            }
            let logs = result?;
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing run output");
            }
            tracing::info!(rows = observer.rows_written(), dir = %dir.display(), "output written");
            logs
        }
        None => sim.run(individuals)?,
    };

    print_summary(&logs, started.elapsed().as_secs_f64());
    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut SimulatorConfig, args: &Args) {
    if let Some(n) = args.individuals {
        config.individuals = n;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.virtual_time {
        config.wait_mode = WaitMode::Virtual;
    }
}

fn print_summary(logs: &[RunStepLog], wall_secs: f64) {
    let summary = RunSummary::from_logs(logs);
    let mean = summary
        .mean_computation_time_seconds()
        .map(|m| format!("{m:.4}s"))
        .unwrap_or_else(|| "n/a".to_owned());
    println!(
        "{} individuals: {} collisions ({:.1}%), {:.4}s computing (mean {mean}), {:.3}s wall",
        summary.steps,
        summary.collisions,
        summary.collision_rate() * 100.0,
        summary.total_computation_time_seconds,
        wall_secs,
    );
}

#[cfg(test)]
mod tests {
    use ga_core::{GaError, SimulatorConfig, WaitMode};

    use super::{Args, apply_overrides};
    use clap::Parser;

    fn overridden(argv: &[&str], base: SimulatorConfig) -> SimulatorConfig {
        let args = Args::try_parse_from(std::iter::once("ga-sim-cli").chain(argv.iter().copied()))
            .unwrap();
        let mut config = base;
        apply_overrides(&mut config, &args);
        config
    }

    #[test]
    fn no_flags_keep_config() {
        let base = SimulatorConfig {
            individuals: 7,
            seed:        Some(3),
            wait_mode:   WaitMode::Real,
            ..Default::default()
        };
        assert_eq!(overridden(&[], base.clone()), base);
    }

    #[test]
    fn flags_override_config() {
        let base = SimulatorConfig { individuals: 7, seed: Some(3), ..Default::default() };
        let config = overridden(&["-n", "12", "--seed", "99", "--virtual-time"], base);
        assert_eq!(config.individuals, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.wait_mode, WaitMode::Virtual);
    }

    #[test]
    fn negative_individuals_reach_validation() {
        let config = overridden(&["--individuals", "-4"], SimulatorConfig::default());
        assert_eq!(config.individuals, -4);
        assert!(matches!(config.validate(), Err(GaError::InvalidArgument(_))));
    }
}
