mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use layup_core::{
    CacheMode, MAX_DEPTH_CEILING, Measurement, Strategy, cross_check, run_benchmark,
    standard_evaluators,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "layup", about = "Evaluate and benchmark the layup sequence S(n)")]
struct Cli {
    /// TOML config file (falls back to $LAYUP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Recursion depth ceiling for naive and memoized evaluation
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(..=MAX_DEPTH_CEILING as u64)
    )]
    max_depth: Option<u64>,

    /// Fail deep memoized requests instead of pre-filling the cache
    #[arg(long, global = true)]
    no_prefill: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print S(n)
    Eval {
        /// Index into the sequence (n >= 1)
        n: u64,

        /// naive, memoization or iteration
        #[arg(long, short, default_value = "iteration")]
        strategy: Strategy,
    },

    /// Time every strategy over a sweep of indices
    Bench {
        /// Comma-separated indices, e.g. 1,5,10,50
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u64>>,

        /// Skip naive evaluation above this index
        #[arg(long)]
        threshold: Option<u64>,

        /// Keep the memoized cache across the whole sweep
        #[arg(long)]
        warm: bool,

        /// Emit one JSON object per measurement
        #[arg(long)]
        json: bool,
    },

    /// Check that every strategy agrees for 1..=max
    Verify {
        /// Highest index to check
        max: u64,

        /// Highest index to check with naive recursion
        #[arg(long, default_value_t = 25)]
        naive_max: u64,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// File config with global flags applied on top.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth as usize;
    }
    if cli.no_prefill {
        config.prefill = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    match &cli.command {
        Commands::Eval { n, strategy } => cmd_eval(&cli, &config, *n, *strategy),
        Commands::Bench {
            sizes,
            threshold,
            warm,
            json,
        } => cmd_bench(&cli, config, sizes.as_deref(), *threshold, *warm, *json),
        Commands::Verify { max, naive_max } => cmd_verify(&config, *max, *naive_max),
    }
}

fn cmd_eval(cli: &Cli, config: &Config, n: u64, strategy: Strategy) -> Result<()> {
    let mut evaluator = strategy.evaluator(config.limits());
    let value = evaluator
        .evaluate(n)
        .with_context(|| format!("failed to evaluate S({n}) with {strategy}"))?;

    println!("{value}");
    if cli.verbose {
        eprintln!("--- {strategy}: S({n}) has {} bits ---", value.bits());
    }
    Ok(())
}

fn cmd_bench(
    cli: &Cli,
    mut config: Config,
    sizes: Option<&[u64]>,
    threshold: Option<u64>,
    warm: bool,
    json: bool,
) -> Result<()> {
    if let Some(sizes) = sizes {
        config.sizes = sizes.to_vec();
    }
    if let Some(threshold) = threshold {
        config.naive_threshold = threshold;
    }
    if warm {
        config.cache = CacheMode::Warm;
    }

    let plan = config.plan();
    if cli.verbose {
        eprintln!(
            "--- cache: {}, naive threshold: {}, sizes: {} ---",
            plan.cache_mode,
            plan.naive_threshold,
            plan.sizes.len()
        );
    }

    let mut evaluators = standard_evaluators(config.limits());
    let mut out = std::io::stdout().lock();
    let mut write_error = None;
    let measurements = run_benchmark(&plan, &mut evaluators, |m| {
        if write_error.is_none()
            && let Err(e) = emit(&mut out, m, json)
        {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e);
    }

    let failed = measurements.iter().filter(|m| m.outcome.is_err()).count();
    if failed > 0 {
        tracing::warn!("{failed} of {} measurements failed", measurements.len());
    }
    Ok(())
}

fn emit(out: &mut impl Write, measurement: &Measurement, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&measurement.to_record())
            .context("failed to serialize measurement")?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{measurement}")?;
    }
    Ok(())
}

fn cmd_verify(config: &Config, max: u64, naive_max: u64) -> Result<()> {
    let mismatches = cross_check(max, naive_max, config.limits())
        .with_context(|| format!("cross-check up to S({max}) failed"))?;

    for m in &mismatches {
        println!(
            "mismatch at S({}): {} returned {}, expected {}",
            m.index, m.strategy, m.actual, m.expected
        );
    }
    if !mismatches.is_empty() {
        bail!("{} mismatches between strategies", mismatches.len());
    }

    println!(
        "ok: strategies agree for 1..={max} (naive up to {})",
        naive_max.min(max)
    );
    Ok(())
}
