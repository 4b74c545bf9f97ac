use crate::assessment::domain::AssessmentInput;

/// Default form state: no pay, 40 hour week, every rating 3.
pub(super) fn default_form() -> AssessmentInput {
    AssessmentInput::default()
}

/// The worked example: 15000/month, 30000 bonus, 5000 benefits.
pub(super) fn salaried_form() -> AssessmentInput {
    AssessmentInput {
        monthly_salary: 15_000.0,
        annual_bonus: 30_000.0,
        benefits: 5_000.0,
        ..AssessmentInput::default()
    }
}

/// Well paid, no overtime, every rating at its best end.
pub(super) fn dream_job() -> AssessmentInput {
    AssessmentInput {
        monthly_salary: 50_000.0,
        annual_bonus: 0.0,
        benefits: 0.0,
        weekly_hours: 40.0,
        commute_hours: 0.0,
        overtime_frequency: 1.0,
        skill_growth: 5.0,
        promotion_chance: 5.0,
        industry_prospect: 5.0,
        work_pressure: 1.0,
        team_atmosphere: 5.0,
        work_interest: 5.0,
        work_flexibility: 5.0,
        vacation_benefit: 5.0,
        work_life_balance: 5.0,
    }
}

/// Unpaid, 80 hour weeks, long commute, every rating at its worst end.
pub(super) fn grind_job() -> AssessmentInput {
    AssessmentInput {
        monthly_salary: 0.0,
        annual_bonus: 0.0,
        benefits: 0.0,
        weekly_hours: 80.0,
        commute_hours: 5.0,
        overtime_frequency: 5.0,
        skill_growth: 1.0,
        promotion_chance: 1.0,
        industry_prospect: 1.0,
        work_pressure: 5.0,
        team_atmosphere: 1.0,
        work_interest: 1.0,
        work_flexibility: 1.0,
        vacation_benefit: 1.0,
        work_life_balance: 1.0,
    }
}
