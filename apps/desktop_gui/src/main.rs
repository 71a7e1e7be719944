use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::AlbumsClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::AlbumsApp;

#[derive(Parser, Debug)]
#[command(name = "albums_gui", about = "Browse and edit albums on a REST endpoint")]
struct Args {
    /// Base URL of the albums API (overrides config file and environment)
    #[arg(long)]
    api_url: Option<String>,
    /// Path to an albums.toml config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref(), args.api_url.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let client = AlbumsClient::with_timeout(&settings.api_base_url, settings.request_timeout())
        .context("failed to configure albums client")?;
    tracing::info!(api = client.base_url(), "starting albums desktop gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(client));

    let default_user_id = settings.default_user_id;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Albums")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Albums",
        options,
        Box::new(move |_cc| Ok(Box::new(AlbumsApp::new(cmd_tx, ui_rx, default_user_id)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}
