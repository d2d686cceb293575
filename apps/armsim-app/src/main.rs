//! armsim kinematic-chain simulator CLI.
//!
//! Provides two modes of operation:
//! - `run`: Simulate a chain headless for N frames and print tip telemetry
//! - `info`: Print workspace crate versions

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use armsim_core::prelude::*;
use armsim_sim::{ChainBuilder, FrameRunner};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Kinematic-chain simulator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a chain headless and print tip telemetry.
    Run {
        /// Number of frames to simulate.
        #[arg(short = 'n', long, default_value_t = 300)]
        frames: u64,

        /// Frame timestep override in seconds.
        #[arg(short, long)]
        dt: Option<f64>,

        /// TOML chain description. A built-in demo chain is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pace frames against the wall clock instead of the fixed timestep.
        #[arg(long)]
        realtime: bool,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

/// Demo chain used when no config file is given: a spinning base, a bent
/// elbow, and an extending piston.
fn demo_config() -> SimConfig {
    SimConfig {
        chain: vec![
            ComponentSpec::Swivel {
                rotational_speed: Some(1.0),
            },
            ComponentSpec::Link { length: 0.8 },
            ComponentSpec::Hinge {
                target_angle: Some(1.0),
            },
            ComponentSpec::Piston {
                max_length: 2.0,
                target_length: Some(1.5),
            },
        ],
        ..SimConfig::default()
    }
}

fn run(
    frames: u64,
    dt_override: Option<f64>,
    config_path: Option<PathBuf>,
    realtime: bool,
) -> Result<(), ArmsimError> {
    let mut config = match config_path {
        Some(path) => SimConfig::from_file(path)?,
        None => demo_config(),
    };
    if let Some(dt) = dt_override {
        config.frame_dt = dt;
    }
    config.validate()?;

    let sim = ChainBuilder::from_config(&config).build();
    let kinds = sim
        .component_kinds()
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!(
        "chain ({} component(s)): {kinds}",
        sim.len()
    );
    println!(
        "frames={frames}, dt={:.4}s ({:.0} Hz), realtime={realtime}\n",
        config.frame_dt,
        config.frame_hz()
    );

    let mut runner = FrameRunner::new(sim);
    let mut clock = FrameClock::new();
    let fixed_dt = config.frame_dt as f32;

    for frame in 0..frames {
        let dt = if realtime {
            std::thread::sleep(Duration::from_secs_f64(config.frame_dt));
            clock.tick()
        } else {
            fixed_dt
        };

        let data = runner.step(dt);

        if frame % 30 == 0 {
            println!(
                "frame {frame:4}: tip=({:+.3}, {:+.3}, {:+.3})  vel=({:+.3}, {:+.3}, {:+.3})  |vel|={:.3}",
                data.tip_pos.x,
                data.tip_pos.y,
                data.tip_pos.z,
                data.tip_vel.x,
                data.tip_vel.y,
                data.tip_vel.z,
                data.tip_vel.norm()
            );
        }
    }

    let stats = runner.stats();
    println!("\n=== Summary ===");
    println!("Frames:         {}", stats.frames);
    println!("Simulated time: {:.3}s", stats.sim_time);
    println!("Peak tip speed: {:.3} units/s", stats.peak_tip_speed);

    println!("Final frame batches:");
    for (mesh, instances) in runner.batches() {
        println!("  {mesh:?}: {} instance(s)", instances.len());
    }

    Ok(())
}

fn run_info() {
    println!("armsim v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  armsim-chain  {}", env!("CARGO_PKG_VERSION"));
    println!("  armsim-core   {}", env!("CARGO_PKG_VERSION"));
    println!("  armsim-render {}", env!("CARGO_PKG_VERSION"));
    println!("  armsim-sim    {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            frames,
            dt,
            config,
            realtime,
        }) => run(frames, dt, config, realtime),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        // Default: run the demo chain with defaults.
        None => run(300, None, None, false),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
