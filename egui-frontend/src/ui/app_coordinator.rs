//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling
//! the primary update loop and overall application lifecycle.
//!
//! ## Application Flow:
//! 1. Deliver any finished insights fetch (and keep repainting while one
//!    is pending, so the spinner animates and the result lands promptly)
//! 2. Map keyboard input to keypad actions (calculator mode only)
//! 3. Render the header with the mode toggle
//! 4. Render the active tool's content
//!
//! Every user action runs to completion synchronously; the insights fetch
//! is the only background work and it is polled, never awaited.

use eframe::egui;

use crate::backend::domain::Operator;
use crate::ui::state::app_state::{AppMode, OmniCalcApp};

impl eframe::App for OmniCalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.age.poll_insights();
        if self.age.insights_loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if self.mode == AppMode::Calculator {
            self.handle_calculator_keyboard(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            ui.add_space(12.0);

            match self.mode {
                AppMode::Calculator => self.render_calculator_view(ui),
                AppMode::Age => self.render_age_view(ui),
            }
        });
    }
}

impl OmniCalcApp {
    /// Map keyboard input to the same action set as the keypad: digits,
    /// `.`, `+ - * /`, Enter/`=` to evaluate, Backspace to delete,
    /// Escape/`c`/`C` to clear.
    fn handle_calculator_keyboard(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|input| input.events.clone());

        for event in events {
            match event {
                egui::Event::Text(text) => {
                    for key in text.chars() {
                        match key {
                            '0'..='9' => self.calculator.press_digit(key),
                            '.' => self.calculator.press_decimal_point(),
                            '=' => self.calculator.press_evaluate(),
                            'c' | 'C' => self.calculator.press_clear(),
                            _ => {
                                if let Some(op) = Operator::from_key(key) {
                                    self.calculator.press_operator(op);
                                }
                            }
                        }
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => match key {
                    egui::Key::Enter => self.calculator.press_evaluate(),
                    egui::Key::Backspace => self.calculator.press_delete(),
                    egui::Key::Escape => self.calculator.press_clear(),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}
