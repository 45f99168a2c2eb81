//! # pidsim
//!
//! Headless front end for the PID step-response simulator.
//!
//! Loads an optional TOML config, applies gains given on the command line,
//! runs the full horizon and writes the trace (CSV or JSON) to stdout for an
//! external plotter. Logs go to stderr.

use clap::{Parser, ValueEnum};
use pidsim_common::config::PidSimConfig;
use pidsim_engine::config::{GainOverrides, load_config};
use pidsim_engine::error::EngineError;
use pidsim_engine::output::{TraceFormat, write_trace};
use pidsim_engine::simulation::analysis::{DisplayBand, summarize};
use pidsim_engine::SimulationSession;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Output format for the trace.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for TraceFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => TraceFormat::Csv,
            Format::Json => TraceFormat::Json,
        }
    }
}

/// pidsim: PID + delayed second-order plant step response
#[derive(Parser, Debug)]
#[command(name = "pidsim")]
#[command(version)]
#[command(about = "Simulate a PID step response and print the trace")]
struct Args {
    /// Path to configuration TOML. Built-in defaults when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Proportional gain (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    kp: Option<f64>,

    /// Integral gain (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    ki: Option<f64>,

    /// Derivative gain (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    kd: Option<f64>,

    /// Trace output format.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Log step-response metrics (and embed them in JSON output).
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json_logs: bool,
}

fn main() {
    let args = Args::parse();

    let overrides = GainOverrides {
        kp: args.kp,
        ki: args.ki,
        kd: args.kd,
    };
    let config = match load_config(args.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            // Subscriber depends on the config; report with defaults.
            setup_tracing(&args, &PidSimConfig::default());
            error!("FATAL: {e}");
            process::exit(1);
        }
    };
    setup_tracing(&args, &config);

    info!(
        "{} v{} starting...",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run(&args, &config) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, config: &PidSimConfig) -> Result<(), EngineError> {
    let sim = &config.simulation;
    info!(
        "Config OK: dt={}s, max_time={}s, steps={}, delay_steps={}",
        sim.dt,
        sim.max_time,
        sim.num_steps(),
        sim.delay_steps,
    );

    let session = SimulationSession::with_params(*sim, config.gains)?;
    let trace = session.trace();
    info!(
        "Simulated {} ticks with kp={:.2} ki={:.3} kd={:.2}",
        trace.len(),
        config.gains.kp,
        config.gains.ki,
        config.gains.kd,
    );

    let summary = args.summary.then(|| summarize(trace, DisplayBand::default()));
    if let Some(ref s) = summary {
        info!(
            final_pose = s.final_pose,
            final_error = s.final_error,
            peak_pose = s.peak_pose,
            peak_time = s.peak_time,
            overshoot = s.overshoot,
            peak_output = s.peak_output,
            clipped_samples = s.clipped_samples,
            "step response"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_trace(trace, summary.as_ref(), args.format.into(), &mut out)?;
    Ok(())
}

/// Setup tracing subscriber from CLI arguments and the `[shared]` section.
fn setup_tracing(args: &Args, config: &PidSimConfig) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.shared.log_level.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
