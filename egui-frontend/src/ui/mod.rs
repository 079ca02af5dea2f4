pub mod app_coordinator;
pub mod components;
pub mod state;

pub use state::app_state::{AppMode, OmniCalcApp};
