//! Job worth scoring.
//!
//! [`score`] is a pure function of its [`AssessmentInput`]: no I/O, no shared
//! state, and no failure path. Input is never validated or clamped, so
//! ratings outside 1–5 or negative hours move sub-scores past their nominal
//! ceilings instead of being rejected.

pub mod domain;
mod policy;
mod rules;
mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentInput, Dimension, DimensionScore, DimensionScores, RecommendationKey, ScoreReport,
    ScoreTier, TierColor, TierLevel,
};
pub use policy::{build_recommendations, classify};

/// Five rounded sub-scores and their total.
pub fn compute_dimension_scores(input: &AssessmentInput) -> DimensionScores {
    rules::score_dimensions(input).rounded()
}

/// Hourly value of the job: annual income over annual hours including
/// commute, rounded to one decimal. Unlike the economic sub-score this is
/// not capped.
pub fn compute_hourly_value(input: &AssessmentInput) -> f64 {
    rules::round_to_tenth(rules::hourly_rate(input))
}

/// Score one assessment: rounded dimensions, total, tier, hourly value and
/// recommendations. Never fails; out-of-range input is scored as given.
pub fn score(input: &AssessmentInput) -> ScoreReport {
    let scores = compute_dimension_scores(input);
    let score_tier = classify(scores.total);
    let recommendations = build_recommendations(&scores);

    let dimensions = Dimension::ALL
        .iter()
        .map(|dimension| DimensionScore {
            dimension: *dimension,
            score: scores.get(*dimension),
            weight_ceiling: dimension.weight_ceiling(),
        })
        .collect();

    ScoreReport {
        total_score: scores.total,
        tier: score_tier.level(),
        tier_color: score_tier.color(),
        score_tier,
        dimensions,
        hourly_value: compute_hourly_value(input),
        recommendations,
    }
}
