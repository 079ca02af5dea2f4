//! # Header Module
//!
//! This module handles rendering the application header: the title of the
//! active tool on the left and the mode toggle on the right.

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::app_state::{AppMode, OmniCalcApp};

impl OmniCalcApp {
    /// Render the header with the mode toggle
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.mode.title())
                        .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_mode_toggle(ui);
            });
        });
    }

    fn render_mode_toggle(&mut self, ui: &mut egui::Ui) {
        // Right-to-left layout: add the rightmost button first
        let age = ui.selectable_value(
            &mut self.mode,
            AppMode::Age,
            egui::RichText::new("⌛ Age").size(16.0),
        );
        let calculator = ui.selectable_value(
            &mut self.mode,
            AppMode::Calculator,
            egui::RichText::new("🖩 Calc").size(16.0),
        );

        if age.clicked() || calculator.clicked() {
            log::info!("Switched to {:?} mode", self.mode);
        }
    }
}
