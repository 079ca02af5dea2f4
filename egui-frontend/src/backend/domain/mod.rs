//! Domain services and the calculator engine.

pub mod age_service;
pub mod calculator_engine;
pub mod insights_service;

pub use age_service::{AgeError, AgeService};
pub use calculator_engine::{CalculatorEngine, CalculatorError, Operator};
pub use insights_service::InsightsService;
