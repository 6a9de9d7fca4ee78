#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use jetbizcard_core::CardContent;
use tracing_subscriber::EnvFilter;

use crate::context::LaunchSettings;

/// JetBizCard - a business card with a toggleable portfolio
#[derive(Parser, Debug)]
#[command(name = "jetbizcard-desktop")]
#[command(about = "JetBizCard - a business card with a toggleable portfolio")]
struct Args {
    /// JSON file with the card content (defaults to <config dir>/jetbizcard/card.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Directory holding the card images
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,
}

/// Content file used when `--content` is not given, if it exists
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("jetbizcard").join("card.json"))
        .filter(|path| path.is_file())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "window size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let content = match args.content.or_else(default_content_path) {
        Some(path) => CardContent::load_or_default(&path),
        None => CardContent::default(),
    };

    let assets_dir = args
        .assets_dir
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")));
    if !assets_dir.is_dir() {
        tracing::warn!("Assets directory {:?} does not exist, images will use a placeholder", assets_dir);
    }

    tracing::info!(
        "Starting card for '{}' with {} projects, assets in {:?}",
        content.person.name,
        content.projects.len(),
        assets_dir
    );

    context::set_launch_settings(LaunchSettings { content, assets_dir });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("JetBizCard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::RootScreen);

    Ok(())
}
