//! Baseline macro history: synthetic series generation and the population path

mod generator;
mod population;

pub use generator::HistoryConfig;
pub use population::population_path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One year of baseline history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub year: i32,
    /// GDP level in billions
    pub gdp: f64,
    /// Inflation rate (%)
    pub inflation: f64,
}

/// Ordered baseline series over a contiguous year range
///
/// Invariant: non-empty, years strictly increasing with no gaps. Enforced at
/// construction so downstream code can index freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    rows: Vec<HistoryRow>,
}

impl HistoricalSeries {
    /// Build a series, rejecting empty input and broken year sequences
    pub fn from_rows(rows: Vec<HistoryRow>) -> Result<Self, EngineError> {
        if rows.is_empty() {
            return Err(EngineError::EmptyHistory);
        }
        for (i, pair) in rows.windows(2).enumerate() {
            if pair[1].year != pair[0].year + 1 {
                return Err(EngineError::NonContiguousYears { index: i + 1 });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent year of history (the series is never empty)
    pub fn latest(&self) -> &HistoryRow {
        self.rows.last().expect("series is non-empty by construction")
    }

    pub fn mean_gdp(&self) -> f64 {
        self.rows.iter().map(|r| r.gdp).sum::<f64>() / self.rows.len() as f64
    }
}
