//! Control Panel Widget
//! Top toolbar with export buttons and a status line.

use crate::charts::ExportFormat;
use egui::{Color32, RichText};

/// Action requested by the user this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Export(ExportFormat),
}

pub struct ControlPanel {
    pub status: String,
    pub is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            is_error: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = true;
    }

    /// Draw the toolbar
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("📊 Frame Times")
                    .size(16.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.separator();

            if ui.button("💾 Export PNG").clicked() {
                action = ControlPanelAction::Export(ExportFormat::Png);
            }
            if ui.button("💾 Export SVG").clicked() {
                action = ControlPanelAction::Export(ExportFormat::Svg);
            }
            ui.separator();

            let color = if self.is_error {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(12.0).color(color));
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_errors() {
        let mut panel = ControlPanel::new();
        assert_eq!(panel.status, "Ready");
        panel.set_error("Export failed");
        assert!(panel.is_error);
        panel.set_status("Exported chart.png");
        assert!(!panel.is_error);
        assert_eq!(panel.status, "Exported chart.png");
    }
}
