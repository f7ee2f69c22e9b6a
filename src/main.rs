//! photobook - terminal photo-book viewer entry point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Terminal photo-book viewer with autoplay, swipe and keyboard paging
#[derive(Parser, Debug)]
#[command(name = "photobook")]
#[command(version)]
#[command(about = "Page through a photo book in the terminal, with autoplay that pauses while you browse")]
pub struct Args {
    /// Directory containing book.json and settings.json (default: ./content)
    pub content_dir: Option<PathBuf>,

    /// Autoplay interval in milliseconds (overrides settings.json)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Inactivity timeout in milliseconds before autoplay resumes (overrides settings.json)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub inactivity: Option<u64>,

    /// Minimum horizontal drag, in cells, that counts as a swipe
    #[arg(long, value_name = "N")]
    pub swipe_distance: Option<u32>,

    /// Do not reload content files when they change
    #[arg(long)]
    pub no_watch: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn cli_overrides(&self) -> photobook::config::CliOverrides {
        photobook::config::CliOverrides {
            content_dir: self.content_dir.clone(),
            autoplay_interval_ms: self.interval,
            inactivity_timeout_ms: self.inactivity,
            swipe_min_distance: self.swipe_distance,
            no_watch: self.no_watch,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR so every styling decision sees the flag
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = photobook::config::load_config_with_precedence(args.config.clone())?;
        let merged = photobook::config::merge_config(config_file);
        let with_env = photobook::config::apply_env_overrides(merged);
        photobook::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    photobook::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = photobook::source::ContentSource::open(&config.content_dir, config.watch)
        .map_err(photobook::model::AppError::from)?;

    let options = photobook::view::ViewOptions {
        autoplay_interval_ms: config.autoplay_interval_ms,
        inactivity_timeout_ms: config.inactivity_timeout_ms,
        swipe_min_distance: config.swipe_min_distance,
        no_color: args.no_color,
    };

    photobook::view::run_with_source(source, options)?;

    Ok(())
}
