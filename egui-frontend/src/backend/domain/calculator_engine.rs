//! Left-to-right four-function calculator engine.
//!
//! The engine operates directly on a (left operand, pending operator,
//! current operand) triple. Each operator press resolves the previous
//! pending operation immediately, so chains evaluate strictly left to
//! right with no precedence: `2 + 3 × 4 =` is `(2 + 3) × 4 = 20`.
//! There is no expression parser.

use log::debug;
use thiserror::Error;

/// Fractional digits kept when formatting results. Rounding here
/// suppresses binary floating-point noise like 0.30000000000000004.
const RESULT_PRECISION: usize = 8;

/// Errors produced by a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Dividing by zero is an explicit error, never a silent non-finite
    /// value.
    #[error("Division by zero")]
    DivisionByZero,
    /// An operand contained characters outside the numeric whitelist.
    /// Cannot happen through the keypad; guards internal state.
    #[error("Malformed expression")]
    MalformedExpression,
}

/// The four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display symbol used in the equation preview and on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Map a typed character (`+ - * /`) to its operator.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    fn apply(&self, left: f64, right: f64) -> Result<f64, CalculatorError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(CalculatorError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Incremental state of the keypad calculator.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    /// Operand currently being typed, always display-ready
    current: String,
    /// Committed left operand of the pending operation
    previous: Option<f64>,
    /// Operator awaiting its right operand
    pending: Option<Operator>,
    /// The next digit starts a new operand
    fresh: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Identity state: operand "0", nothing pending.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            pending: None,
            fresh: true,
        }
    }

    /// Text for the main display line.
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Pending-equation preview, e.g. `"12 ÷ "`. Empty when nothing is
    /// pending.
    pub fn equation(&self) -> String {
        match (self.previous, self.pending) {
            (Some(left), Some(op)) => format!("{} {} ", format_number(left), op.symbol()),
            _ => String::new(),
        }
    }

    /// Append a digit, or start a new operand after an operator commit or
    /// a completed evaluation. A lone leading "0" is replaced.
    pub fn digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.fresh {
            self.current = digit.to_string();
            self.fresh = false;
        } else if self.current == "0" {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }
    }

    /// Add the decimal point; a fresh operand becomes "0." and a second
    /// point in the same operand is ignored.
    pub fn decimal_point(&mut self) {
        if self.fresh {
            self.current = "0.".to_string();
            self.fresh = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    /// Commit the current operand as the left side of `op`.
    ///
    /// If an operation is already pending and a right operand has been
    /// typed, it resolves first (left-to-right chaining) and the
    /// intermediate result becomes the new left operand. Retyping an
    /// operator before any right operand just swaps the operator.
    pub fn operator(&mut self, op: Operator) -> Result<(), CalculatorError> {
        if self.pending.is_some() && self.fresh {
            self.pending = Some(op);
            return Ok(());
        }

        let left = if self.pending.is_some() {
            self.resolve()?
        } else {
            self.parse_current()?
        };

        self.previous = Some(left);
        self.pending = Some(op);
        self.current = format_number(left);
        self.fresh = true;
        Ok(())
    }

    /// Resolve the pending operation; a no-op when nothing is pending.
    /// The result becomes the current operand so a following operator
    /// chains from it.
    pub fn evaluate(&mut self) -> Result<(), CalculatorError> {
        if self.pending.is_none() {
            return Ok(());
        }

        let result = self.resolve()?;
        debug!("Evaluated to {}", result);

        self.current = format_number(result);
        self.previous = None;
        self.pending = None;
        self.fresh = true;
        Ok(())
    }

    /// Reset to the identity state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Remove the last typed character of the current operand. A no-op
    /// while awaiting a fresh operand; an emptied operand resets to "0".
    pub fn delete_last(&mut self) {
        if self.fresh {
            return;
        }

        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
            self.fresh = true;
        }
    }

    fn resolve(&self) -> Result<f64, CalculatorError> {
        let op = self.pending.ok_or(CalculatorError::MalformedExpression)?;
        let left = self.previous.ok_or(CalculatorError::MalformedExpression)?;
        let right = self.parse_current()?;
        Ok(round_result(op.apply(left, right)?))
    }

    /// Operands may only contain digits, one decimal point and a leading
    /// sign; anything else means the internal state was corrupted.
    fn parse_current(&self) -> Result<f64, CalculatorError> {
        let text = self.current.trim();
        let whitelisted = !text.is_empty()
            && text
                .chars()
                .enumerate()
                .all(|(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && c == '-'));
        if !whitelisted {
            return Err(CalculatorError::MalformedExpression);
        }

        text.parse::<f64>()
            .map_err(|_| CalculatorError::MalformedExpression)
    }
}

/// Round to `RESULT_PRECISION` decimal places.
fn round_result(value: f64) -> f64 {
    let factor = 10f64.powi(RESULT_PRECISION as i32);
    (value * factor).round() / factor
}

/// Format a value for display: no exponent notation, trailing zeros
/// stripped, at most `RESULT_PRECISION` fractional digits.
fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.*}", RESULT_PRECISION, value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(engine: &mut CalculatorEngine, keys: &str) {
        for key in keys.chars() {
            match key {
                '0'..='9' => engine.digit(key),
                '.' => engine.decimal_point(),
                '=' => engine.evaluate().unwrap(),
                _ => engine
                    .operator(Operator::from_key(key).unwrap())
                    .unwrap(),
            }
        }
    }

    #[test]
    fn test_simple_addition() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3=");
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_left_to_right_chaining_no_precedence() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3*4=");
        assert_eq!(engine.display(), "20"); // (2 + 3) × 4, not 2 + 12
    }

    #[test]
    fn test_division() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "7/2=");
        assert_eq!(engine.display(), "3.5");
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5/0");
        assert_eq!(engine.evaluate(), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn test_chained_division_by_zero_surfaces_on_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5/0");
        assert_eq!(
            engine.operator(Operator::Add),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_result_rounds_to_eight_decimals() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1.00000001+1.00000001=");
        assert_eq!(engine.display(), "2.00000002");
    }

    #[test]
    fn test_float_noise_suppressed() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "0.1+0.2=");
        assert_eq!(engine.display(), "0.3");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1.5+1.5=");
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn test_negative_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "3-5=");
        assert_eq!(engine.display(), "-2");
    }

    #[test]
    fn test_evaluate_without_pending_is_noop() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "42");
        engine.evaluate().unwrap();
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_chain_continues_from_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3=");
        press(&mut engine, "*2=");
        assert_eq!(engine.display(), "10");
    }

    #[test]
    fn test_new_digit_after_evaluation_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3=");
        engine.digit('7');
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_operator_retype_swaps_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+");
        press(&mut engine, "-3=");
        assert_eq!(engine.display(), "-1");
    }

    #[test]
    fn test_equation_preview() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "12/");
        assert_eq!(engine.equation(), "12 ÷ ");
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "07");
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_decimal_point_rules() {
        let mut engine = CalculatorEngine::new();
        engine.decimal_point();
        assert_eq!(engine.display(), "0.");

        press(&mut engine, "5.");
        assert_eq!(engine.display(), "0.5"); // second point ignored

        engine.clear();
        press(&mut engine, "1.2");
        engine.decimal_point();
        assert_eq!(engine.display(), "1.2");
    }

    #[test]
    fn test_delete_last() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "123");
        engine.delete_last();
        assert_eq!(engine.display(), "12");

        engine.delete_last();
        engine.delete_last();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_delete_on_fresh_operand_is_noop() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+");
        engine.delete_last();
        assert_eq!(engine.display(), "2");
        assert_eq!(engine.equation(), "2 + ");
    }

    #[test]
    fn test_clear_resets_identity() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "12+34.5*");
        engine.clear();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.equation(), "");

        engine.evaluate().unwrap();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_whitelist_guards_corrupted_state() {
        let mut engine = CalculatorEngine::new();
        engine.previous = Some(1.0);
        engine.pending = Some(Operator::Add);
        engine.current = "1;2".to_string();
        assert_eq!(engine.evaluate(), Err(CalculatorError::MalformedExpression));
    }
}
