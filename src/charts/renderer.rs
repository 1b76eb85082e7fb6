//! Static Chart Renderer
//! Draws a laid out [`BarChart`] with plotters for PNG and SVG export.
//!
//! Layout:
//! 1. Caption: chart title centered at the top
//! 2. Value axis on the left with the y label
//! 3. One filled rectangle per bar, x ticks at integer rows with row labels
//! 4. Legend in the upper right corner

use crate::charts::BarChart;
use crate::error::{ChartError, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const FONT: &str = "sans-serif";

/// File formats supported by [`StaticChartRenderer::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// Pick the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to an RGB bitmap and encode it as PNG.
    pub fn render_png_bytes(chart: &BarChart, width: u32, height: u32) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(ChartError::render)?;
        }

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("bitmap buffer size mismatch".into()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(ChartError::render)?;

        debug!(width, height, size = bytes.len(), "encoded chart as PNG");
        Ok(bytes)
    }

    pub fn render_svg_string(chart: &BarChart, width: u32, height: u32) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(ChartError::render)?;
        }
        Ok(svg)
    }

    /// Write the chart to `path`, format chosen by extension.
    pub fn save(chart: &BarChart, path: &Path, width: u32, height: u32) -> Result<ExportFormat> {
        let format = ExportFormat::from_path(path)?;
        let bytes = match format {
            ExportFormat::Png => Self::render_png_bytes(chart, width, height)?,
            ExportFormat::Svg => Self::render_svg_string(chart, width, height)?.into_bytes(),
        };
        std::fs::write(path, bytes)?;

        info!(path = %path.display(), ?format, "exported chart");
        Ok(format)
    }

    /// Draw the complete chart onto any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &BarChart) -> Result<()> {
        root.fill(&WHITE).map_err(ChartError::render)?;

        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range;

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(ChartError::render)?;

        let label_for = |x: &f64| chart.tick_label_at(*x).unwrap_or_default().to_string();
        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(chart.row_count())
            .x_label_formatter(&label_for)
            .y_desc(chart.y_label.as_str())
            .axis_desc_style((FONT, 16))
            .label_style((FONT, 13))
            .draw()
            .map_err(ChartError::render)?;

        for (category, entry) in chart.legend.iter().enumerate() {
            let color: RGBColor = entry.color.into();
            ctx.draw_series(chart.category_bars(category).map(|bar| {
                Rectangle::new([(bar.left(), 0.0), (bar.right(), bar.height)], color.filled())
            }))
            .map_err(ChartError::render)?
            .label(entry.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, 13))
            .draw()
            .map_err(ChartError::render)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartRenderer;
    use crate::config::ChartConfig;
    use crate::data::FrameTimeDataset;

    fn reference_chart() -> BarChart {
        let dataset = FrameTimeDataset::reference();
        ChartRenderer::new(ChartConfig::default())
            .render(&dataset.table, &dataset.categories, &dataset.colors)
            .unwrap()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/chart.png")).unwrap(),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("chart.SVG")).unwrap(),
            ExportFormat::Svg
        );
        assert_eq!(ExportFormat::Svg.extension(), "svg");
    }

    #[test]
    fn unknown_extension_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.pdf");
        let err = StaticChartRenderer::save(&reference_chart(), &path, 400, 300).unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedFormat(_)));
        assert!(!path.exists());

        assert!(matches!(
            ExportFormat::from_path(Path::new("chart")),
            Err(ChartError::UnsupportedFormat(_))
        ));
    }

    // Text layout goes through system fonts.
    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn svg_output_is_stable_and_labeled() {
        let chart = reference_chart();
        let first = StaticChartRenderer::render_svg_string(&chart, 800, 500).unwrap();
        let second = StaticChartRenderer::render_svg_string(&chart, 800, 500).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Cloud01"));
        assert!(first.contains("Cloud10"));
        assert!(first.contains("Henyey-Greenstein"));
        assert!(first.contains("Average Frame Time (ms)"));
    }

    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn png_export_writes_a_decodable_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let format = StaticChartRenderer::save(&reference_chart(), &path, 640, 480).unwrap();
        assert_eq!(format, ExportFormat::Png);

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (640, 480));
    }
}
