//! Series colors shared by the interactive plot and the static renderer.

use serde::{Deserialize, Serialize};

/// Opaque RGB color assigned to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const RED: SeriesColor = SeriesColor::rgb(255, 0, 0);
    pub const GREEN: SeriesColor = SeriesColor::rgb(0, 128, 0);
    pub const BLUE: SeriesColor = SeriesColor::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex string such as `#ff0000`, used in logs.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<SeriesColor> for plotters::style::RGBColor {
    fn from(c: SeriesColor) -> Self {
        plotters::style::RGBColor(c.r, c.g, c.b)
    }
}

impl From<SeriesColor> for egui::Color32 {
    fn from(c: SeriesColor) -> Self {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(SeriesColor::RED.to_hex(), "#ff0000");
        assert_eq!(SeriesColor::GREEN.to_hex(), "#008000");
        assert_eq!(SeriesColor::rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn converts_to_backend_colors() {
        let rgb: plotters::style::RGBColor = SeriesColor::BLUE.into();
        assert_eq!((rgb.0, rgb.1, rgb.2), (0, 0, 255));
        let c32: egui::Color32 = SeriesColor::GREEN.into();
        assert_eq!(c32, egui::Color32::from_rgb(0, 128, 0));
    }
}
