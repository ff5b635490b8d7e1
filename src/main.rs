//! Clipper - podcast clip dashboard
//!
//! Main entry point for the desktop application.

use anyhow::{anyhow, Context, Result};
use clipper::config::ClipperConfig;
use clipper::ui::ClipperApp;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipper=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClipperConfig::from_env().context("invalid CLIPPER_* configuration")?;

    info!("Starting Clipper against {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Clipper.ai")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Clipper.ai",
        options,
        Box::new(move |cc| Ok(Box::new(ClipperApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("eframe error: {}", e))
}
