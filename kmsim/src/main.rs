use kmsim::{Scenario, ScenarioConfig, RunState};
use kmsim::{bench_step, bench_threads};

use clap::Parser;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "kmsim", about = "Parallel K-Means clustering of random 2D points")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short = 'f')]
    file_name: Option<String>,

    /// Window dimensions
    #[arg(short = 'w', allow_negative_numbers = true)]
    window_dimension: Option<i64>,

    /// Points number
    #[arg(short = 'p', allow_negative_numbers = true)]
    points_number: Option<i64>,

    /// Clusters number
    #[arg(short = 'c', allow_negative_numbers = true)]
    clusters_number: Option<i64>,

    /// Maximum iterations
    #[arg(short = 'i')]
    max_iterations: Option<u64>,

    /// Seed
    #[arg(short = 's')]
    seed: Option<u64>,

    /// Run the step benchmarks instead of a clustering run
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut scenario_cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            let file = File::open(&config_path)
                .with_context(|| format!("failed to open {}", config_path.display()))?;
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    // command line wins over the file
    let p = &mut scenario_cfg.parameters;
    if let Some(w) = args.window_dimension { p.window_dimension = w; }
    if let Some(n) = args.points_number { p.points_number = n; }
    if let Some(k) = args.clusters_number { p.clusters_number = k; }
    if let Some(s) = args.seed { p.seed = s; }
    if let Some(i) = args.max_iterations { scenario_cfg.engine.max_iterations = i; }

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_threads();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;

    let p = &scenario_cfg.parameters;
    println!("Window dimension:\t{}", p.window_dimension);
    println!("Points number:\t\t{}", p.points_number);
    println!("Clusters number:\t{}", p.clusters_number);
    println!("Maximum iterations:\t{}", scenario_cfg.engine.max_iterations);
    println!("Seed:\t\t\t{}", p.seed);
    println!();

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    for (j, c) in scenario.centroids().iter().enumerate() {
        println!("Mean {}: {},{}", j, c.x(), c.y());
    }
    println!();

    let start = Instant::now();
    let state = scenario.run();
    let elapsed = start.elapsed();

    for (j, (c, n)) in scenario.centroids().iter().zip(scenario.cardinalities()).enumerate() {
        println!("Cluster {}: size {} with coordinates {},{}", j, n, c.x(), c.y());
    }
    println!();

    let outcome = match state {
        RunState::Converged => "converged",
        RunState::Stopped => "stopped at iteration cap",
        RunState::Running => "running",
    };
    println!("Iterations: {} ({})", scenario.iterations(), outcome);
    println!("Time: {:.3}", elapsed.as_secs_f64());

    Ok(())
}
