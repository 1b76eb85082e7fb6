//! Chart Plotter Module
//! Draws a laid out [`BarChart`] interactively using egui_plot.

use crate::charts::BarChart;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart as PlotBarChart, GridMark, Plot};

pub struct ChartPlotter;

impl ChartPlotter {
    /// One egui_plot series per category, in legend order.
    pub fn bar_series(chart: &BarChart) -> Vec<PlotBarChart> {
        chart
            .legend
            .iter()
            .enumerate()
            .map(|(category, entry)| {
                let color: Color32 = entry.color.into();
                let bars: Vec<Bar> = chart
                    .category_bars(category)
                    .map(|b| {
                        Bar::new(b.x, b.height)
                            .width(b.width)
                            .fill(color)
                            .name(format!("{} {}", entry.label, chart.ticks[b.row].label))
                    })
                    .collect();

                PlotBarChart::new(bars)
                    .color(color)
                    .name(&entry.label)
            })
            .collect()
    }

    /// Draw the legend as colored squares followed by category names.
    pub fn draw_legend(ui: &mut egui::Ui, chart: &BarChart) {
        ui.horizontal(|ui| {
            for entry in &chart.legend {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, Color32::from(entry.color));
                ui.label(RichText::new(&entry.label).size(13.0));
                ui.add_space(12.0);
            }
        });
    }

    /// Draw the grouped bar chart with row labels on the x axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChart, height: f32) {
        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range;

        let marks: Vec<GridMark> = chart
            .ticks
            .iter()
            .map(|t| GridMark {
                value: t.position,
                step_size: 1.0,
            })
            .collect();
        let labeled = chart.clone();

        Plot::new("frame_time_chart")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label(chart.y_label.clone())
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .x_grid_spacer(move |_input| marks.clone())
            .x_axis_formatter(move |mark, _range| {
                labeled
                    .tick_label_at(mark.value)
                    .unwrap_or_default()
                    .to_string()
            })
            .show(ui, |plot_ui| {
                for series in Self::bar_series(chart) {
                    plot_ui.bar_chart(series);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartRenderer;
    use crate::config::ChartConfig;
    use crate::data::FrameTimeDataset;

    #[test]
    fn one_series_per_category() {
        let dataset = FrameTimeDataset::reference();
        let chart = ChartRenderer::new(ChartConfig::default())
            .render(&dataset.table, &dataset.categories, &dataset.colors)
            .unwrap();
        assert_eq!(ChartPlotter::bar_series(&chart).len(), 3);
    }
}
