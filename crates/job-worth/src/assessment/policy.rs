use super::domain::{Dimension, DimensionScores, RecommendationKey, ScoreTier};

/// Lower bound of each bucket, highest first. Anything below the last bound
/// falls into [`ScoreTier::Sweatshop`].
const TIER_LADDER: [(f64, ScoreTier); 7] = [
    (90.0, ScoreTier::Winner),
    (80.0, ScoreTier::Elite),
    (70.0, ScoreTier::WhiteCollar),
    (60.0, ScoreTier::Striver),
    (50.0, ScoreTier::Worker),
    (40.0, ScoreTier::Tool),
    (30.0, ScoreTier::Horse),
];

/// A dimension scoring strictly below its floor gets a warning.
const DIMENSION_FLOORS: [(Dimension, f64, RecommendationKey); 5] = [
    (Dimension::Economic, 20.0, RecommendationKey::LowEconomic),
    (Dimension::Time, 15.0, RecommendationKey::HighTimeCost),
    (Dimension::Growth, 12.0, RecommendationKey::LimitedGrowth),
    (Dimension::Experience, 9.0, RecommendationKey::PoorExperience),
    (Dimension::Balance, 6.0, RecommendationKey::Imbalance),
];

const CLOSING_LADDER: [(f64, RecommendationKey); 3] = [
    (80.0, RecommendationKey::Excellent),
    (60.0, RecommendationKey::Good),
    (40.0, RecommendationKey::Average),
];

/// Map a total to its bucket. Boundary values belong to the higher bucket.
pub fn classify(total: f64) -> ScoreTier {
    TIER_LADDER
        .iter()
        .find(|(floor, _)| total >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(ScoreTier::Sweatshop)
}

/// Dimension warnings in fixed order, followed by exactly one closing verdict.
pub fn build_recommendations(scores: &DimensionScores) -> Vec<RecommendationKey> {
    let mut recommendations: Vec<RecommendationKey> = DIMENSION_FLOORS
        .iter()
        .filter(|(dimension, floor, _)| scores.get(*dimension) < *floor)
        .map(|(_, _, key)| *key)
        .collect();

    let closing = CLOSING_LADDER
        .iter()
        .find(|(floor, _)| scores.total >= *floor)
        .map(|(_, key)| *key)
        .unwrap_or(RecommendationKey::Poor);
    recommendations.push(closing);

    recommendations
}
