use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use config::{load_settings, SettingsOverrides};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::EmployeeAdminApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop admin client for the employee REST service")]
struct Args {
    /// Base URL of the employee service, e.g. http://127.0.0.1:8000
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    /// Explicit settings file instead of the default search path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = load_settings(&SettingsOverrides {
        config_path: args.config,
        server_url: args.server_url,
        request_timeout_secs: args.request_timeout_secs,
    })?;
    tracing::info!(server_url = %settings.server_url, "starting employee admin");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let server_url = settings.server_url.clone();
    let _backend = backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Management")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Management",
        options,
        Box::new(move |_cc| Ok(Box::new(EmployeeAdminApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow!("ui terminated with error: {err}"))
}
