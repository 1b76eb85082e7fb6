//! Frame Time Chart - grouped bar chart of average frame times
//!
//! Compares the average frame time of ten cloud datasets across three phase
//! functions and shows the result in a native window with PNG/SVG export.

mod charts;
mod config;
mod data;
mod error;
mod gui;

use anyhow::{anyhow, Context};
use charts::ChartRenderer;
use config::ChartConfig;
use data::FrameTimeDataset;
use eframe::egui;
use gui::FrameTimeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = ChartConfig::default();
    let dataset = FrameTimeDataset::reference();

    let renderer = ChartRenderer::new(config.clone());
    let chart = renderer
        .render(&dataset.table, &dataset.categories, &dataset.colors)
        .context("failed to lay out the frame time chart")?;
    info!(
        rows = chart.row_count(),
        categories = chart.category_count(),
        bars = chart.bars.len(),
        "chart ready"
    );

    // Configure native options
    let (width, height) = config.window_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 420.0])
            .with_title("Frame Time Chart"),
        ..Default::default()
    };

    // Blocks until the window is closed
    eframe::run_native(
        "Frame Time Chart",
        options,
        Box::new(move |cc| Ok(Box::new(FrameTimeApp::new(cc, chart, &config)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))?;

    info!("viewer closed");
    Ok(())
}
