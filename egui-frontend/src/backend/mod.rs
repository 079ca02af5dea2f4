//! # Backend Module
//!
//! Synchronous domain layer for the egui frontend. There is no IO or REST
//! layer here: the UI calls domain services directly.
//!
//! ## Services:
//! - `AgeService` - calendar arithmetic (elapsed age, next anniversary)
//! - `InsightsService` - outbound call to the generative-text provider
//!
//! The calculator engine also lives in `domain`, but it is stateful per
//! key press and therefore owned by the UI state rather than the backend.

use anyhow::Result;

pub mod domain;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub age_service: domain::AgeService,
    pub insights_service: domain::InsightsService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Result<Self> {
        Ok(Self {
            age_service: domain::AgeService::new(),
            insights_service: domain::InsightsService::from_env()?,
        })
    }
}
