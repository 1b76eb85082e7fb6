//! Chart Configuration
//! Fixed text, geometry and output sizes for the frame time chart.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Average Frame Time by Dataset and Phase Function";
pub const DEFAULT_Y_LABEL: &str = "Average Frame Time (ms)";

/// Immutable rendering configuration, built once at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub y_label: String,
    /// Width of one bar as a fraction of a row slot.
    pub bar_width: f64,
    /// Row labels are `{prefix}{index:0digits}` with a 1-based index.
    pub row_label_prefix: String,
    pub row_label_digits: usize,
    /// Size of exported PNG/SVG images in pixels.
    pub export_size: (u32, u32),
    /// Initial size of the viewer window.
    pub window_size: (f32, f32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            bar_width: 0.2,
            row_label_prefix: "Cloud".to_string(),
            row_label_digits: 2,
            export_size: (1200, 800),
            window_size: (1100.0, 700.0),
        }
    }
}

impl ChartConfig {
    /// Format the label for a zero-based row index.
    pub fn row_label(&self, row: usize) -> String {
        format!(
            "{}{:0width$}",
            self.row_label_prefix,
            row + 1,
            width = self.row_label_digits
        )
    }

    pub fn row_labels(&self, rows: usize) -> Vec<String> {
        (0..rows).map(|r| self.row_label(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_row_labels() {
        let config = ChartConfig::default();
        assert_eq!(config.row_label(0), "Cloud01");
        assert_eq!(config.row_label(8), "Cloud09");
        assert_eq!(config.row_label(9), "Cloud10");
    }

    #[test]
    fn row_labels_match_row_count() {
        let labels = ChartConfig::default().row_labels(10);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels.first().map(String::as_str), Some("Cloud01"));
        assert_eq!(labels.last().map(String::as_str), Some("Cloud10"));
    }

    #[test]
    fn wide_indices_are_not_truncated() {
        let config = ChartConfig::default();
        assert_eq!(config.row_label(119), "Cloud120");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{ "bar_width": 0.25, "row_label_prefix": "Set" }"#)
                .unwrap();
        assert_eq!(config.bar_width, 0.25);
        assert_eq!(config.row_label(2), "Set03");
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.y_label, DEFAULT_Y_LABEL);
    }
}
