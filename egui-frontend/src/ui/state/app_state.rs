//! # Core Application State
//!
//! This module defines the central application state structure and
//! initialization logic for OmniCalc.
//!
//! ## Key Types:
//! - `AppMode` - Enum defining the two tools (Calculator, Age)
//! - `OmniCalcApp` - Main application state struct
//!
//! ## Purpose:
//! The `OmniCalcApp` struct holds all application state in a single
//! location - the backend services, the active mode and one state struct
//! per tool - following the single source of truth principle. There is no
//! global mutable state anywhere else.

use log::info;

use crate::backend::Backend;
use crate::ui::state::age_state::AgeState;
use crate::ui::state::calculator_state::CalculatorState;

/// Modes available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Calculator,
    Age,
}

impl AppMode {
    /// Header title shown for the mode
    pub fn title(&self) -> &'static str {
        match self {
            AppMode::Calculator => "Standard Calc",
            AppMode::Age => "Age Insight",
        }
    }
}

/// Main application struct for the egui OmniCalc app
pub struct OmniCalcApp {
    pub backend: Backend,

    /// Currently active tool
    pub mode: AppMode,

    /// Keypad calculator state
    pub calculator: CalculatorState,

    /// Age tool state (input, results, insights fetch)
    pub age: AgeState,
}

impl OmniCalcApp {
    /// Create a new OmniCalcApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing OmniCalcApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            mode: AppMode::Calculator, // Default to the calculator tool
            calculator: CalculatorState::new(),
            age: AgeState::new(),
        })
    }
}
