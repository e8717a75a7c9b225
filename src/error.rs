//! Error taxonomy for the simulation engine
//!
//! Only genuinely invalid inputs surface as errors. Degenerate statistics
//! (zero volatility) and numeric floors (negative projected GDP) are routine
//! and recovered locally inside the model code.

use thiserror::Error;

/// Input validation failures rejected before any projection math runs
#[derive(Debug, Error)]
pub enum EngineError {
    /// Per-capita metrics divide by the population path
    #[error("base population must be positive, got {0} million")]
    NonPositivePopulation(f64),

    /// A series with no rows cannot anchor a projection
    #[error("historical series is empty")]
    EmptyHistory,

    /// The latest-year growth rate needs a prior year to compare against
    #[error("growth metrics need at least 2 years of history, got {0}")]
    InsufficientHistory(usize),

    /// Shock fields must be finite; range limits are a presentation concern
    #[error("shock field '{field}' must be finite, got {value}")]
    NonFiniteShock { field: &'static str, value: f64 },

    /// Baseline levels must be finite for real-rate and gap arithmetic
    #[error("baseline field '{field}' must be finite, got {value}")]
    NonFiniteBaseline { field: &'static str, value: f64 },

    /// One entry per year, strictly increasing, no gaps
    #[error("history years must be contiguous and increasing (broken at row {index})")]
    NonContiguousYears { index: usize },
}
