mod logging;
mod view_app;

use circlesim_core::{build_simulation_context, load_config, step_simulation, SimConfig};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "circlesim")]
#[command(about = "circlesim - thousands of bouncing circles with quadtree collisions", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a scenario headless and print a summary
    Run {
        /// Scenario YAML file; built-in defaults when omitted
        scenario: Option<PathBuf>,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,
        /// Fixed time step in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Override the scenario seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Open the interactive viewer
    View {
        /// Scenario YAML file, reloaded whenever it changes on disk
        scenario: Option<PathBuf>,
        /// Draw the quadtree node boundaries
        #[arg(long)]
        quadtree: bool,
        /// Override the scenario seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Run {
            scenario,
            frames,
            dt,
            seed,
        } => run_headless(scenario.as_deref(), frames, dt, seed),
        Commands::View {
            scenario,
            quadtree,
            seed,
        } => view_app::run_viewer(scenario, quadtree, seed),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load the scenario at `path`, or the defaults, applying a seed override
pub(crate) fn scenario_config(
    path: Option<&Path>,
    seed: Option<u64>,
) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn run_headless(
    scenario: Option<&Path>,
    frames: u64,
    dt: f32,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = scenario_config(scenario, seed)?;
    let mut sim = build_simulation_context(&config)?;
    info!(bodies = sim.world.bodies.len(), frames, dt, "running headless");

    let energy_before = sim.world.total_kinetic_energy();
    let mut candidates = 0u64;
    let mut resolutions = 0u64;
    let mut max_depth = 0;
    let mut max_nodes = 0;

    let started = Instant::now();
    for _ in 0..frames {
        let stats = step_simulation(&mut sim, dt);
        candidates += stats.candidates as u64;
        resolutions += stats.resolutions as u64;
        max_depth = max_depth.max(stats.tree_depth);
        max_nodes = max_nodes.max(stats.tree_nodes);
    }
    let wall = started.elapsed().as_secs_f64();

    let per_frame = |total: u64| {
        if frames == 0 {
            0.0
        } else {
            total as f64 / frames as f64
        }
    };

    println!("bodies = {}", sim.world.bodies.len());
    println!("frames = {}", sim.frame);
    println!("simulated_time = {:.3}", sim.elapsed);
    println!("wall_time = {:.3}", wall);
    if wall > 0.0 {
        println!("frames_per_second = {:.1}", frames as f64 / wall);
    }
    println!("candidates_per_frame = {:.1}", per_frame(candidates));
    println!("resolutions_per_frame = {:.1}", per_frame(resolutions));
    println!("max_tree_depth = {}", max_depth);
    println!("max_tree_nodes = {}", max_nodes);
    println!("kinetic_energy_start = {:.3}", energy_before);
    println!("kinetic_energy_end = {:.3}", sim.world.total_kinetic_energy());

    Ok(())
}
