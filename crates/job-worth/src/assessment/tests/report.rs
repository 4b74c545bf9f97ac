use super::common::*;
use crate::assessment::domain::{
    AssessmentInput, Dimension, RecommendationKey, ScoreTier, TierColor, TierLevel,
};
use crate::assessment::score;

#[test]
fn report_assembles_classification_and_dimensions() {
    let report = score(&salaried_form());

    assert_eq!(report.total_score, 73.2);
    assert_eq!(report.score_tier, ScoreTier::WhiteCollar);
    assert_eq!(report.tier, TierLevel::Good);
    assert_eq!(report.tier_color, TierColor::Blue);
    assert_eq!(report.hourly_value, 103.4);
    assert_eq!(report.recommendations, vec![RecommendationKey::Good]);

    let order: Vec<Dimension> = report.dimensions.iter().map(|d| d.dimension).collect();
    assert_eq!(order, Dimension::ALL.to_vec());

    let economic = report
        .dimension(Dimension::Economic)
        .expect("economic dimension present");
    assert_eq!(economic.score, 24.2);
    assert_eq!(economic.weight_ceiling, 30.0);
}

#[test]
fn report_total_matches_dimension_scores() {
    let report = score(&default_form());

    assert_eq!(report.total_score, 49.2);
    assert_eq!(report.score_tier, ScoreTier::Tool);
    assert_eq!(report.hourly_value, 0.0);
}

#[test]
fn scoring_is_deterministic() {
    let input = AssessmentInput {
        monthly_salary: 8_765.0,
        commute_hours: 1.5,
        work_pressure: 4.0,
        ..default_form()
    };

    assert_eq!(score(&input), score(&input));
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = score(&dream_job());
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["totalScore"], 94.5);
    assert_eq!(json["tier"], "excellent");
    assert_eq!(json["tierColorKey"], "green");
    assert_eq!(json["humorKey"], "winner");
    assert_eq!(json["dimensions"][0]["weightCeiling"], 30.0);
    assert_eq!(json["recommendations"][0], "excellent");
}

#[test]
fn input_round_trips_through_form_field_names() {
    let json = serde_json::json!({
        "monthlySalary": 15000,
        "annualBonus": 30000,
        "benefits": 5000,
        "weeklyHours": 40,
        "commuteHours": 0,
        "overtimeFrequency": 3,
        "skillGrowth": 3,
        "promotionChance": 3,
        "industryProspect": 3,
        "workPressure": 3,
        "teamAtmosphere": 3,
        "workInterest": 3,
        "workFlexibility": 3,
        "vacationBenefit": 3,
        "workLifeBalance": 3
    });

    let input: AssessmentInput = serde_json::from_value(json).expect("input deserializes");
    assert_eq!(input, salaried_form());
}

#[test]
fn fill_percentage_is_relative_to_the_ceiling() {
    let report = score(&dream_job());
    let time = report.dimension(Dimension::Time).expect("time present");

    assert_eq!(time.fill_pct(), 100.0);
}
