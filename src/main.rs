//! Bike Sharing Dashboard - desktop entry point
//!
//! Reads `dashboard.json` from the working directory when present, then opens the dashboard window.

use anyhow::Context;
use bikeshare_dashboard::config::{DashboardConfig, CONFIG_FILE};
use bikeshare_dashboard::gui::BikeShareApp;
use bikeshare_dashboard::narrative::DASHBOARD_TITLE;
use eframe::egui;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))
        .context("failed to load dashboard configuration")?;
    info!(
        hour_csv = %config.hour_csv.display(),
        day_csv = %config.day_csv.display(),
        "starting dashboard"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title(DASHBOARD_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(BikeShareApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard window: {e}"))
}
