#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod surface;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Shell settings, set once from the command line
static SHELL: OnceLock<ShellSettings> = OnceLock::new();

/// Settings the page components read at runtime
#[derive(Debug, Clone, Default)]
pub struct ShellSettings {
    /// Behave like a mobile user agent (deep links for highlights)
    pub mobile: bool,
}

/// Get the shell settings (set from command line or default)
pub fn get_shell_settings() -> ShellSettings {
    SHELL.get().cloned().unwrap_or_default()
}

/// Empty Nest - lifestyle brand site
#[derive(Parser, Debug)]
#[command(name = "emptynest-desktop")]
#[command(about = "Empty Nest - storefronts, partnerships and member discount codes")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(long, default_value = "Empty Nest")]
    title: String,

    /// Simulate a mobile user agent
    #[arg(long)]
    mobile: bool,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{}'", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let _ = SHELL.set(ShellSettings {
        mobile: args.mobile,
    });

    tracing::info!(
        width = args.width,
        height = args.height,
        mobile = args.mobile,
        "Starting Empty Nest"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
