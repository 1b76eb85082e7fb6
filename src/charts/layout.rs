//! Grouped Bar Layout
//! Validates the frame time table and places one bar per (row, category) pair.
//!
//! The bars of a row are centered on the integer row position:
//! category `i` of `C` is shifted by `(i - C/2) * width + width/2`.

use crate::charts::SeriesColor;
use crate::config::ChartConfig;
use crate::data::FrameTimeTable;
use crate::error::{ChartError, Result};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// A single placed bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub row: usize,
    pub category: usize,
    /// Center of the bar on the x axis.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: SeriesColor,
}

impl Bar {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// X axis tick at an integer row position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: SeriesColor,
}

/// Backend independent description of the finished chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bar_width: f64,
    /// Bars grouped by category in legend order, rows ascending within a group.
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub legend: Vec<LegendEntry>,
    pub y_range: (f64, f64),
}

impl BarChart {
    pub fn row_count(&self) -> usize {
        self.ticks.len()
    }

    pub fn category_count(&self) -> usize {
        self.legend.len()
    }

    /// Bars belonging to one category.
    pub fn category_bars(&self, category: usize) -> impl Iterator<Item = &Bar> + '_ {
        self.bars.iter().filter(move |b| b.category == category)
    }

    /// Label of the tick closest to `x`, if `x` is within a quarter slot of it.
    pub fn tick_label_at(&self, x: f64) -> Option<&str> {
        let nearest = x.round();
        if (x - nearest).abs() > 0.25 || nearest < 0.0 {
            return None;
        }
        self.ticks
            .get(nearest as usize)
            .map(|t| t.label.as_str())
    }

    /// X extent covering every row slot.
    pub fn x_range(&self) -> (f64, f64) {
        (-0.5, self.row_count() as f64 - 0.5)
    }
}

/// Horizontal offset of each category's bar relative to its row position.
pub fn bar_offsets(categories: usize, bar_width: f64) -> Vec<f64> {
    let half = categories as f64 / 2.0;
    (0..categories)
        .map(|i| (i as f64 - half) * bar_width + bar_width / 2.0)
        .collect()
}

/// Lays out grouped bar charts from a frame time table.
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Build the chart artifact. Nothing is produced when validation fails.
    pub fn render(
        &self,
        table: &FrameTimeTable,
        category_labels: &[String],
        colors: &[SeriesColor],
    ) -> Result<BarChart> {
        let (rows, columns) = table.validate()?;
        self.check_configuration(columns, category_labels, colors)?;

        let width = self.config.bar_width;
        let offsets = bar_offsets(columns, width);
        debug!(rows, columns, ?offsets, "laying out grouped bars");

        let mut bars = Vec::with_capacity(rows * columns);
        for (i, offset) in offsets.iter().enumerate() {
            for (r, row) in table.rows().iter().enumerate() {
                bars.push(Bar {
                    row: r,
                    category: i,
                    x: r as f64 + offset,
                    width,
                    height: row[i],
                    color: colors[i],
                });
            }
        }

        let ticks = self
            .config
            .row_labels(rows)
            .into_iter()
            .enumerate()
            .map(|(r, label)| Tick {
                position: r as f64,
                label,
            })
            .collect();

        let legend = category_labels
            .iter()
            .zip(colors)
            .map(|(label, &color)| LegendEntry {
                label: label.clone(),
                color,
            })
            .collect();

        Ok(BarChart {
            title: self.config.title.clone(),
            y_label: self.config.y_label.clone(),
            bar_width: width,
            bars,
            ticks,
            legend,
            y_range: Self::y_range(table),
        })
    }

    fn check_configuration(
        &self,
        columns: usize,
        category_labels: &[String],
        colors: &[SeriesColor],
    ) -> Result<()> {
        let width = self.config.bar_width;
        if !(width.is_finite() && width > 0.0) {
            return Err(ChartError::Configuration(format!(
                "bar width must be a positive number, got {}",
                width
            )));
        }

        if category_labels.len() != columns {
            return Err(ChartError::Configuration(format!(
                "{} category labels for {} columns",
                category_labels.len(),
                columns
            )));
        }

        if colors.len() < columns {
            return Err(ChartError::Configuration(format!(
                "{} colors for {} categories",
                colors.len(),
                columns
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = category_labels.iter().find(|l| !seen.insert(l.as_str())) {
            return Err(ChartError::Configuration(format!(
                "duplicate category label '{}'",
                dup
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = colors[..columns].iter().find(|c| !seen.insert(**c)) {
            return Err(ChartError::Configuration(format!(
                "color {} is assigned to more than one category",
                dup.to_hex()
            )));
        }

        if width * columns as f64 > 1.0 {
            warn!(
                bar_width = width,
                columns, "bars of neighbouring rows will overlap"
            );
        }

        Ok(())
    }

    /// Value axis range: from `min(0, min)` to `max(0, max)` plus 10% headroom.
    /// An empty range (all values zero) gets a height of one.
    fn y_range(table: &FrameTimeTable) -> (f64, f64) {
        let (min, max) = table.value_range().unwrap_or((0.0, 0.0));
        let bottom = min.min(0.0);
        let top = max.max(0.0) * 1.1;
        if top > bottom {
            (bottom, top)
        } else {
            (bottom, bottom + 1.0)
        }
    }
}
