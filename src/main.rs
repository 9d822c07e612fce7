use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use tui_2048::core::config::{self, CliOverrides, LoadedConfig, ResolvedConfig};
use tui_2048::tui::{self, Outcome};

#[derive(Parser)]
#[command(name = "tui-2048", about = "2048 on a 6x6 board")]
struct Args {
    /// Seed the tile spawner for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second for the render loop
    #[arg(long)]
    fps: Option<u32>,

    /// Config file to use instead of ~/.tui-2048/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let level = LevelFilter::from_str(&config.log_level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{}', using info", config.log_level);
        LevelFilter::Info
    });

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Logging isn't up yet; loading messages are replayed once it is
    let (loaded, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => (loaded, None),
        Err(e) => {
            eprintln!("{e}; using defaults");
            (LoadedConfig::default(), Some(e))
        }
    };

    let cli = CliOverrides {
        frame_rate: args.fps,
        seed: args.seed,
    };
    let resolved = config::resolve(&loaded.config, &cli);

    init_logging(&resolved);
    loaded.replay();
    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!(
        "tui-2048 starting up ({} fps, seed {:?})",
        resolved.frame_rate,
        resolved.seed
    );

    if tui::run(&resolved)? == Outcome::GameOver {
        println!("Game Over!");
    }
    Ok(())
}
