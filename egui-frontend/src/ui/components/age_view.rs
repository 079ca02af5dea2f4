//! # Age View
//!
//! Rendering for the age tool: the birth-date input card, the elapsed-age
//! and next-birthday result cards, and the insights panel. The insights
//! area shows a spinner while the fetch is pending; everything else in
//! the app stays interactive in the meantime.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{AgeDetails, BirthdayInsights, NextBirthday};

use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::app_state::OmniCalcApp;

const CARD_ROUNDING: f32 = 14.0;

impl OmniCalcApp {
    /// Render the age tool
    pub fn render_age_view(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_birthdate_input(ui);
                ui.add_space(12.0);

                if let Some(message) = self.age.error_message.clone() {
                    ui.add(egui::Label::new(
                        egui::RichText::new(message)
                            .size(15.0)
                            .color(CURRENT_THEME.typography.error),
                    ));
                    return;
                }

                if let Some(age) = self.age.age.clone() {
                    render_age_card(ui, &age);
                    ui.add_space(10.0);
                }
                if let Some(next) = self.age.next_birthday.clone() {
                    render_next_birthday_card(ui, &next);
                    ui.add_space(10.0);
                }

                if self.age.insights_loading {
                    render_insights_loading(ui);
                } else if let Some(insights) = self.age.insights.clone() {
                    render_insights(ui, &insights);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        let reset = egui::Button::new(
                            egui::RichText::new("Check Another Date")
                                .size(14.0)
                                .color(CURRENT_THEME.typography.secondary),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::NONE);
                        if ui.add(reset).clicked() {
                            self.age.reset();
                        }
                    });
                }
            });
    }

    fn render_birthdate_input(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(egui::Label::new(
                egui::RichText::new("📅 Enter your Date of Birth")
                    .size(17.0)
                    .strong()
                    .color(CURRENT_THEME.typography.primary),
            ));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add(DatePickerButton::new(&mut self.age.birthdate).id_source("birthdate_picker"));
                ui.add_space(8.0);

                let calculate = egui::Button::new(
                    egui::RichText::new("Calculate")
                        .size(15.0)
                        .color(CURRENT_THEME.typography.white),
                )
                .fill(CURRENT_THEME.typography.accent)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(100.0, 30.0));

                if ui.add(calculate).clicked() {
                    self.age.calculate(&self.backend);
                }
            });
        });
    }
}

fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.cards.background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.cards.border))
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(16.0))
}

fn render_age_card(ui: &mut egui::Ui, age: &AgeDetails) {
    let theme = &CURRENT_THEME;

    egui::Frame::none()
        .fill(theme.cards.age_background)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("You are exactly")
                    .size(14.0)
                    .color(egui::Color32::from_rgb(199, 210, 254)),
            );
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(age.years.to_string())
                        .size(40.0)
                        .strong()
                        .color(theme.typography.white),
                );
                ui.label(
                    egui::RichText::new("years")
                        .size(18.0)
                        .color(egui::Color32::from_rgb(199, 210, 254)),
                );
            });
            ui.label(
                egui::RichText::new(format!("{} months, {} days old", age.months, age.days))
                    .size(16.0)
                    .color(theme.typography.white),
            );
        });
}

fn render_next_birthday_card(ui: &mut egui::Ui, next: &NextBirthday) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🎂").size(26.0));
            ui.add_space(6.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Next Birthday")
                        .size(13.0)
                        .color(CURRENT_THEME.typography.secondary),
                );
                ui.label(
                    egui::RichText::new(format!("{} months, {} days", next.months, next.days))
                        .size(17.0)
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("It will be on a")
                            .size(12.0)
                            .color(CURRENT_THEME.typography.secondary),
                    );
                    ui.label(
                        egui::RichText::new(next.weekday.as_str())
                            .size(12.0)
                            .strong()
                            .color(CURRENT_THEME.typography.accent),
                    );
                });
            });
        });
    });
}

fn render_insights_loading(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Consulting the stars...")
                    .size(14.0)
                    .color(CURRENT_THEME.typography.secondary),
            );
            ui.add_space(12.0);
        });
    });
}

fn render_insights(ui: &mut egui::Ui, insights: &BirthdayInsights) {
    let theme = &CURRENT_THEME;

    egui::Frame::none()
        .fill(theme.cards.insights_background)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("✨ Zodiac Insights")
                    .size(16.0)
                    .strong()
                    .color(theme.typography.white),
            );
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                insights_panel(&mut columns[0], "SIGN", &insights.zodiac);
                insights_panel(&mut columns[1], "TRAIT", &insights.zodiac_trait);
            });
        });

    ui.add_space(10.0);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("💡 Did You Know?")
                .size(16.0)
                .strong()
                .color(theme.typography.primary),
        );
        ui.add_space(6.0);
        for fact in &insights.historical_facts {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new("•")
                        .strong()
                        .color(theme.typography.accent),
                );
                ui.label(
                    egui::RichText::new(fact.as_str())
                        .size(13.0)
                        .color(theme.typography.secondary),
                );
            });
            ui.add_space(4.0);
        }
    });
}

fn insights_panel(ui: &mut egui::Ui, title: &str, value: &str) {
    egui::Frame::none()
        .fill(CURRENT_THEME.cards.insights_panel)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(title)
                    .size(10.0)
                    .color(CURRENT_THEME.display.text_dim),
            );
            ui.label(
                egui::RichText::new(value)
                    .size(16.0)
                    .strong()
                    .color(CURRENT_THEME.typography.white),
            );
        });
}
