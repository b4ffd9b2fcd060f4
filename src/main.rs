use clap::Parser;
use snake_arena::{
    autopilot::Autopilot,
    config::GameConfig,
    procgen::ScenePreset,
    world::{TickReport, WorldController},
};
use std::path::PathBuf;
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the snake-arena.toml configuration file
    #[arg(short, long, default_value = "./snake-arena.toml")]
    config: PathBuf,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Override the food placement seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pace ticks at the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Scene to load (arena|grove|tall_tree|wide_tree)
    #[arg(long, default_value = "arena")]
    scene: String,

    /// Write the final world snapshot as JSON to this path
    #[arg(long)]
    snapshot_out: Option<PathBuf>,

    /// Write the default configuration to this path and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

/// Running totals printed at shutdown.
#[derive(Debug, Default)]
struct RunStats {
    ticks: u64,
    food_eaten: u32,
    deaths: u32,
    longest_body: usize,
}

impl RunStats {
    fn record(&mut self, report: &TickReport, world: &WorldController) {
        self.ticks += 1;
        if report.ate_food {
            self.food_eaten += 1;
        }
        if report.died {
            self.deaths += 1;
        }
        self.longest_body = self.longest_body.max(world.snake().body().len());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        GameConfig::default().save(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let loaded = GameConfig::load(&args.config);

    // Initialize tracing
    let log_level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));
    let json_logs = loaded.as_ref().map(|c| c.logging.json).unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting snake-arena v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Ok(config) => {
            info!("Configuration loaded from: {}", args.config.display());
            config
        }
        Err(e) => {
            warn!(
                "Failed to load config {}: {}, using defaults",
                args.config.display(),
                e
            );
            GameConfig::default()
        }
    };

    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    info!("Tick rate: {}Hz, seed: {}", config.sim.tick_rate_hz, config.sim.seed);

    let scene = ScenePreset::from_name(&args.scene).unwrap_or_else(|| {
        warn!("Unknown scene '{}', falling back to arena", args.scene);
        ScenePreset::Arena
    });

    let mut world = WorldController::new(config);
    if scene.is_showcase() {
        world.load_scene(scene);
    }

    let stats = if args.realtime {
        run_realtime(&mut world, args.ticks).await
    } else {
        run_headless(&mut world, args.ticks)
    };

    info!(
        "Simulated {} ticks: {} food eaten, {} deaths, longest body {}",
        stats.ticks, stats.food_eaten, stats.deaths, stats.longest_body
    );

    if let Some(path) = &args.snapshot_out {
        let json = serde_json::to_string_pretty(&world.snapshot())?;
        std::fs::write(path, json)?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(())
}

fn step(world: &mut WorldController, pilot: &Autopilot, stats: &mut RunStats) {
    let input = pilot.steer(world);
    world.set_input(input);
    let dt = world.fixed_dt();
    let report = world.tick(dt);
    stats.record(&report, world);

    if report.respawned {
        debug!("Tick {}: snake respawned", report.tick);
    }
    if report.door_opened {
        info!("Tick {}: path revealed", report.tick);
    }
}

fn run_headless(world: &mut WorldController, ticks: u64) -> RunStats {
    let pilot = Autopilot::default();
    let mut stats = RunStats::default();
    for _ in 0..ticks {
        step(world, &pilot, &mut stats);
    }
    stats
}

async fn run_realtime(world: &mut WorldController, ticks: u64) -> RunStats {
    let tick_duration = Duration::from_secs_f64(world.fixed_dt() as f64);
    let mut ticker = interval(tick_duration);
    let pilot = Autopilot::default();
    let mut stats = RunStats::default();

    info!("Running in realtime. Press Ctrl+C to stop.");

    while stats.ticks < ticks {
        tokio::select! {
            _ = ticker.tick() => step(world, &pilot, &mut stats),
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    stats
}
