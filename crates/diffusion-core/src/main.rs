//! Information Diffusion Simulator
//!
//! Generates a random network, runs the diffusion engine until every
//! information item is inactive or the step cap is hit, and writes the
//! resulting report as JSON.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use diffusion_events::generate_report_id;
use info_diffusion::config::DEFAULT_CONFIG_PATH;
use info_diffusion::output::{network_snapshot, write_network, write_report};
use info_diffusion::{generate_network, Config, DiffusionEngine, Driver, StatsCollector};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "info_diffusion")]
#[command(about = "Simulates information spreading through a random social network")]
struct Args {
    /// TOML configuration file (defaults to diffusion.toml, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of entities in the network
    #[arg(long)]
    size: Option<usize>,

    /// Upper x bound of the placement region
    #[arg(long)]
    width: Option<u32>,

    /// Upper y bound of the placement region
    #[arg(long)]
    height: Option<u32>,

    /// Steps a record may stay viewable without being consulted
    #[arg(long)]
    consultation_window: Option<u32>,

    /// Maximum number of steps to simulate
    #[arg(long)]
    max_steps: Option<u64>,

    /// Where to write the JSON report (defaults to output/<report id>.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the generated network as JSON
    #[arg(long)]
    output_initial_state: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(size) = self.size {
            config.network.size = size;
        }
        if let Some(width) = self.width {
            config.network.width = width;
        }
        if let Some(height) = self.height {
            config.network.height = height;
        }
        if let Some(window) = self.consultation_window {
            config.simulation.consultation_window = window;
        }
        if let Some(max_steps) = self.max_steps {
            config.simulation.max_steps = max_steps;
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Could not load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    };
    args.apply(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        seed = config.simulation.seed,
        size = config.network.size,
        width = config.network.width,
        height = config.network.height,
        consultation_window = config.simulation.consultation_window,
        max_steps = config.simulation.max_steps,
        "Starting simulation"
    );

    let mut rng = SmallRng::seed_from_u64(config.simulation.seed);
    let network = match generate_network(
        config.network.id,
        config.network.size,
        config.network.bounds(),
        &mut rng,
    ) {
        Ok(network) => network,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        entities = network.len(),
        edges = network.edge_count(),
        "Created network"
    );

    if let Some(path) = &args.output_initial_state {
        match write_network(path, &network_snapshot(&network)) {
            Ok(()) => tracing::info!("Wrote {}", path.display()),
            Err(e) => tracing::warn!("Could not write network to {}: {}", path.display(), e),
        }
    }

    let window = config.simulation.consultation_window;
    let mut engine = match DiffusionEngine::new(network, window, rng) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut collector = StatsCollector::new();
    let outcome = Driver::new(config.simulation.max_steps)
        .run_with(&mut engine, |engine| collector.record_step(engine));
    let report = collector.generate_report(&engine, &outcome);

    tracing::info!(
        steps = outcome.steps,
        items = engine.items().len(),
        stop_reason = ?report.stop_reason,
        most_positive = ?report.most_positive.item_ids,
        positive_score = report.most_positive.score,
        most_negative = ?report.most_negative.item_ids,
        negative_score = report.most_negative.score,
        "Simulation complete"
    );

    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from("output").join(format!("{}.json", generate_report_id(config.simulation.seed)))
    });
    if let Err(e) = write_report(&output, &report) {
        tracing::error!("Could not write report to {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }
    tracing::info!("Wrote {}", output.display());

    ExitCode::SUCCESS
}
