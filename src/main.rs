use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carousel::SliderConfig;
use carousel::catalog::{scan_image_paths, shuffle};
use carousel::viewer;

/// Image carousel: autoplays through a directory of images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the slide images
    image_directory: PathBuf,

    /// TOML file with slider settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Autoplay interval in milliseconds (overrides the config file)
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Start with autoplay stopped
    #[arg(long)]
    no_autoplay: bool,

    /// Show the slides in random order
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    // --- Logging (RUST_LOG, defaults to info) ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // --- Configuration: file first, then command line overrides ---
    let mut config = match &args.config {
        Some(path) => SliderConfig::load(path)
            .with_context(|| format!("loading configuration from {:?}", path))?,
        None => SliderConfig::default(),
    };
    if let Some(interval_ms) = args.interval_ms {
        config = config.with_interval_ms(interval_ms);
    }
    if args.no_autoplay {
        config.autoplay = false;
    }
    config.validate()?;

    // --- Load Slides ---
    let mut paths = scan_image_paths(&args.image_directory)
        .with_context(|| format!("loading images from {:?}", args.image_directory))?;
    if args.shuffle {
        shuffle(&mut paths);
    }
    info!(
        dir = ?args.image_directory,
        slides = paths.len(),
        interval_ms = config.interval_ms,
        "starting carousel"
    );

    viewer::run(paths, config)
}
