use crate::error::AllocatorError;
use crate::models::GradeDistribution;

const WEIGHT_A: f64 = 100.0;
const WEIGHT_B: f64 = 75.0;
const WEIGHT_C: f64 = 50.0;
const WEIGHT_D: f64 = 25.0;

/// Predictive score for raw grade counts, rounded to 2 decimal places.
/// A class with no recorded students scores 0 rather than dividing by zero.
pub fn predictive_score(a: i64, b: i64, c: i64, d: i64) -> Result<f64, AllocatorError> {
    let distribution = GradeDistribution::from_counts(a, b, c, d)?;
    Ok(score_distribution(&distribution))
}

/// Same formula for an already-validated distribution.
pub fn score_distribution(distribution: &GradeDistribution) -> f64 {
    let total = distribution.total();
    if total == 0 {
        return 0.0;
    }

    let weighted = f64::from(distribution.a) * WEIGHT_A
        + f64::from(distribution.b) * WEIGHT_B
        + f64::from(distribution.c) * WEIGHT_C
        + f64::from(distribution.d) * WEIGHT_D;
    round2(weighted / total as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
