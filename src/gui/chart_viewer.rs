//! Chart Viewer Widget
//! Central panel showing the grouped bar chart as a single card.

use crate::charts::{BarChart, ChartPlotter};
use egui::RichText;

const PLOT_MIN_HEIGHT: f32 = 240.0;

/// Displays one laid out chart.
pub struct ChartViewer {
    pub chart: BarChart,
}

impl ChartViewer {
    pub fn new(chart: BarChart) -> Self {
        Self { chart }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let stroke_color = ui.visuals().widgets.noninteractive.bg_stroke.color;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, stroke_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&self.chart.title).size(18.0).strong());
                });
                ui.add_space(8.0);

                ChartPlotter::draw_legend(ui, &self.chart);
                ui.add_space(10.0);

                // Leave room for the frame margin below the plot
                let height = (ui.available_height() - 12.0).max(PLOT_MIN_HEIGHT);
                ChartPlotter::draw_bar_chart(ui, &self.chart, height);
            });
    }
}
