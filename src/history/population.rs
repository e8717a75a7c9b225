//! Compound-growth population path for per-capita normalization

/// Population for each year index: `base * (1 + growth_pct/100)^i`
///
/// Total and monotonic in `i` for positive growth. Callers must pass a
/// positive base; the engine validates this up front because a zero base
/// would make every per-capita metric divide by zero.
pub fn population_path(base_millions: f64, growth_pct: f64, years: usize) -> Vec<f64> {
    let factor = 1.0 + growth_pct / 100.0;
    (0..years)
        .map(|i| base_millions * factor.powi(i as i32))
        .collect()
}
