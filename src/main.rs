#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod download;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Launch options, set once from the command line.
static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

/// Settings chosen at launch.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Where exported cards are saved (or where the save dialog opens)
    pub download_dir: PathBuf,
    /// Prompt for a location on every export
    pub save_dialog: bool,
    /// Display name the form starts with
    pub initial_name: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            save_dialog: false,
            initial_name: None,
        }
    }
}

/// Get the launch config (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_default()
}

/// Gbillions - NFT Card Generator
#[derive(Parser, Debug)]
#[command(name = "gbillions-desktop")]
#[command(about = "Gbillions - design an NFT-style card and export it as PNG")]
struct Args {
    /// Directory exported cards are saved to (defaults to your downloads folder)
    #[arg(short, long)]
    download_dir: Option<PathBuf>,

    /// Ask where to save each card instead of saving straight to the download directory
    #[arg(long)]
    save_dialog: bool,

    /// Display name to start with
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("gbillions_desktop=info,gbillions_core=info,gbillions_ui=info")
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = LaunchConfig::default();
    if let Some(dir) = args.download_dir {
        config.download_dir = dir;
    }
    config.save_dialog = args.save_dialog;
    config.initial_name = args.name;

    tracing::info!(
        "Starting with download dir {:?} (save dialog: {})",
        config.download_dir,
        config.save_dialog
    );

    let _ = LAUNCH_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gbillions - NFT Card Generator")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
