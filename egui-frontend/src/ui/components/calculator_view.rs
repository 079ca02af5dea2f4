//! # Calculator View
//!
//! Rendering for the calculator tool: the display panel (pending-equation
//! preview plus the main display line) and the 4-column keypad. Every key
//! forwards to the same `CalculatorState` actions the keyboard handler
//! uses.

use eframe::egui;

use crate::backend::domain::Operator;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::app_state::OmniCalcApp;

const KEY_HEIGHT: f32 = 56.0;
const KEY_SPACING: f32 = 8.0;
const KEY_ROUNDING: f32 = 12.0;

impl OmniCalcApp {
    /// Render the calculator tool
    pub fn render_calculator_view(&mut self, ui: &mut egui::Ui) {
        self.render_display(ui);
        ui.add_space(14.0);
        self.render_keypad(ui);
    }

    fn render_display(&mut self, ui: &mut egui::Ui) {
        let theme = &CURRENT_THEME.display;

        egui::Frame::none()
            .fill(theme.background)
            .rounding(egui::Rounding::same(14.0))
            .inner_margin(egui::Margin::symmetric(16.0, 18.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let equation = self.calculator.equation();
                    let preview = if equation.is_empty() {
                        // Keep the line height stable while nothing is pending
                        " ".to_string()
                    } else {
                        equation
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(preview)
                                .font(egui::FontId::monospace(14.0))
                                .color(theme.text_dim),
                        )
                        .selectable(false),
                    );

                    let text_color = if self.calculator.has_error() {
                        theme.error_text
                    } else {
                        theme.text
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calculator.display())
                                .font(egui::FontId::new(42.0, egui::FontFamily::Proportional))
                                .color(text_color),
                        )
                        .selectable(false)
                        .truncate(),
                    );
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let theme = CURRENT_THEME;
        ui.spacing_mut().item_spacing = egui::vec2(KEY_SPACING, KEY_SPACING);

        let key_width = (ui.available_width() - 3.0 * KEY_SPACING) / 4.0;
        let double_width = key_width * 2.0 + KEY_SPACING;

        ui.horizontal(|ui| {
            if key(ui, "AC", key_width, theme.keypad.utility_background, theme.typography.primary) {
                self.calculator.press_clear();
            }
            if key(ui, "⌫", key_width, theme.keypad.utility_background, theme.typography.primary) {
                self.calculator.press_delete();
            }
            if key(ui, "÷", key_width, theme.keypad.operator_background, theme.keypad.operator_text) {
                self.calculator.press_operator(Operator::Divide);
            }
            if key(ui, "×", key_width, theme.keypad.operator_background, theme.keypad.operator_text) {
                self.calculator.press_operator(Operator::Multiply);
            }
        });

        for (digits, op, symbol) in [
            (["7", "8", "9"], Operator::Subtract, "−"),
            (["4", "5", "6"], Operator::Add, "+"),
        ] {
            ui.horizontal(|ui| {
                for digit in digits {
                    if key(ui, digit, key_width, theme.keypad.digit_background, theme.typography.primary) {
                        self.calculator.press_digit(digit.chars().next().unwrap());
                    }
                }
                if key(ui, symbol, key_width, theme.keypad.operator_background, theme.keypad.operator_text) {
                    self.calculator.press_operator(op);
                }
            });
        }

        ui.horizontal(|ui| {
            for digit in ["1", "2", "3"] {
                if key(ui, digit, key_width, theme.keypad.digit_background, theme.typography.primary) {
                    self.calculator.press_digit(digit.chars().next().unwrap());
                }
            }
            if key(ui, "=", key_width, theme.keypad.equals_background, theme.typography.white) {
                self.calculator.press_evaluate();
            }
        });

        ui.horizontal(|ui| {
            if key(ui, "0", double_width, theme.keypad.digit_background, theme.typography.primary) {
                self.calculator.press_digit('0');
            }
            if key(ui, ".", double_width, theme.keypad.digit_background, theme.typography.primary) {
                self.calculator.press_decimal_point();
            }
        });
    }
}

/// Render a single keypad key; returns true when pressed.
fn key(
    ui: &mut egui::Ui,
    label: &str,
    width: f32,
    fill: egui::Color32,
    text_color: egui::Color32,
) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(label)
            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
            .color(text_color),
    )
    .fill(fill)
    .rounding(egui::Rounding::same(KEY_ROUNDING))
    .min_size(egui::vec2(width, KEY_HEIGHT));

    ui.add(button).clicked()
}
