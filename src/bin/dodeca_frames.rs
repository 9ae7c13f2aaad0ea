use std::path::PathBuf;

use clap::Parser;
use dodeca_lib::{config::DodecahedronConfig, Dodecahedron};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Runs the dodecahedron animations for a number of simulated frames and prints the last one
#[derive(Parser, Debug)]
#[command(name = "dodeca_frames")]
#[command(version, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// LEDs on every edge, overriding the configuration
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    leds_per_edge: Option<i64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "600")]
    frames: usize,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => DodecahedronConfig::load(path)?,
        None => DodecahedronConfig::default(),
    };
    if let Some(n) = cli.leds_per_edge {
        config.leds_per_edge = n;
    }

    let mut model = Dodecahedron::from_config(&config)?;

    let dt = config.frame_interval()?;
    let mut on_animation = 0.;
    for _ in 0..cli.frames {
        model.update(dt);
        on_animation += dt;
        if on_animation >= config.seconds_per_animation {
            on_animation = 0.;
            model.next_animation();
        }
    }
    info!(
        frames = cli.frames,
        animation = ?model.active_animation(),
        "simulation finished"
    );

    let positions = model.get_leds();
    let colors = model.get_colors();
    println!("x,y,z,r,g,b");
    for (pos, color) in positions.outer_iter().zip(colors.outer_iter()) {
        println!(
            "{},{},{},{},{},{}",
            pos[0], pos[1], pos[2], color[0], color[1], color[2]
        );
    }

    Ok(())
}
