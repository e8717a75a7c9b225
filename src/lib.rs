//! Policy Pulse - scenario projection engine for monetary-policy shocks
//!
//! This library provides:
//! - Synthetic baseline history generation (seeded, reproducible)
//! - Nonlinear shock response projection with confidence bands
//! - Per-capita normalization over a compound-growth population path
//! - Composite risk scoring and forward-guidance classification
//! - Rule-based scenario commentary
//! - CSV export of the projected series
//!
//! The engine is pure and synchronous; presentation shells (dashboards,
//! CLIs) call [`SimulationEngine::run`] or a [`ScenarioRunner`] and render
//! the returned value objects.

pub mod engine;
pub mod error;
pub mod export;
pub mod history;
pub mod model;
pub mod policy;
pub mod scenario;

// Re-export commonly used types
pub use engine::{DerivedMetrics, Guidance, ProjectionRow, SimulationEngine, SimulationOutcome};
pub use error::EngineError;
pub use history::{HistoricalSeries, HistoryConfig, HistoryRow};
pub use model::{ModelParams, RiskAssessment, RiskLevel};
pub use policy::{BaselineContext, PolicyShock};
pub use scenario::{ScenarioPreset, ScenarioRunner};
