//! Frame Time Viewer Application
//! Window with an export toolbar on top and the chart below.

use crate::charts::{BarChart, ExportFormat, StaticChartRenderer};
use crate::config::ChartConfig;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::TopBottomPanel;
use std::path::Path;
use tracing::warn;

/// Main application window.
pub struct FrameTimeApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    export_size: (u32, u32),
}

impl FrameTimeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: BarChart, config: &ChartConfig) -> Self {
        Self {
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(chart),
            export_size: config.export_size,
        }
    }

    /// Ask for an output file and export the chart there.
    fn handle_export(&mut self, format: ExportFormat) {
        let (filter, default_name) = match format {
            ExportFormat::Png => ("PNG Image", "frame_times.png"),
            ExportFormat::Svg => ("SVG Image", "frame_times.svg"),
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, &[format.extension()])
            .set_file_name(default_name)
            .save_file()
        else {
            return; // User cancelled
        };

        self.export_to(&path);
    }

    fn export_to(&mut self, path: &Path) {
        let (width, height) = self.export_size;
        match StaticChartRenderer::save(&self.chart_viewer.chart, path, width, height) {
            Ok(format) => {
                self.control_panel
                    .set_status(&format!("Exported {} ({:?})", path.display(), format));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "chart export failed");
                self.control_panel.set_error(&format!("Export error: {}", e));
            }
        }
    }
}

impl eframe::App for FrameTimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("control_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            match self.control_panel.show(ui) {
                ControlPanelAction::Export(format) => self.handle_export(format),
                ControlPanelAction::None => {}
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
