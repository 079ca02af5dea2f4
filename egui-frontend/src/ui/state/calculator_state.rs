//! # Calculator State
//!
//! UI-facing state for the keypad calculator. Wraps the domain engine and
//! turns its errors into a display message: an evaluation error is
//! terminal for that operation, so the engine resets and the next key
//! press clears the message.

use log::warn;

use crate::backend::domain::{CalculatorEngine, CalculatorError, Operator};

/// State of the calculator tool
pub struct CalculatorState {
    /// Left-to-right evaluation engine
    engine: CalculatorEngine,

    /// Last evaluation error, shown in place of a result
    error: Option<CalculatorError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            engine: CalculatorEngine::new(),
            error: None,
        }
    }

    /// Text for the main display line
    pub fn display(&self) -> String {
        match self.error {
            Some(error) => error.to_string(),
            None => self.engine.display().to_string(),
        }
    }

    /// Text for the pending-equation preview line
    pub fn equation(&self) -> String {
        if self.error.is_some() {
            String::new()
        } else {
            self.engine.equation()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn press_digit(&mut self, digit: char) {
        self.error = None;
        self.engine.digit(digit);
    }

    pub fn press_decimal_point(&mut self) {
        self.error = None;
        self.engine.decimal_point();
    }

    pub fn press_operator(&mut self, op: Operator) {
        self.error = None;
        if let Err(error) = self.engine.operator(op) {
            self.fail(error);
        }
    }

    pub fn press_evaluate(&mut self) {
        self.error = None;
        if let Err(error) = self.engine.evaluate() {
            self.fail(error);
        }
    }

    pub fn press_clear(&mut self) {
        self.engine.clear();
        self.error = None;
    }

    pub fn press_delete(&mut self) {
        self.error = None;
        self.engine.delete_last();
    }

    fn fail(&mut self, error: CalculatorError) {
        warn!("Calculator evaluation failed: {}", error);
        self.engine.clear();
        self.error = Some(error);
    }
}
