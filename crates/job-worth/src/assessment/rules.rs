use super::domain::{AssessmentInput, DimensionScores};
use super::weights::*;

/// Unrounded dimension scores. Rounding happens once, in [`RawDimensions::rounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawDimensions {
    pub economic: f64,
    pub time: f64,
    pub growth: f64,
    pub experience: f64,
    pub balance: f64,
}

impl RawDimensions {
    pub(crate) fn total(&self) -> f64 {
        self.economic + self.time + self.growth + self.experience + self.balance
    }

    /// Total is rounded from the unrounded sum, not summed from rounded parts.
    pub(crate) fn rounded(&self) -> DimensionScores {
        DimensionScores {
            economic: round_to_tenth(self.economic),
            time: round_to_tenth(self.time),
            growth: round_to_tenth(self.growth),
            experience: round_to_tenth(self.experience),
            balance: round_to_tenth(self.balance),
            total: round_to_tenth(self.total()),
        }
    }
}

/// Round half away from zero to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn total_annual_income(input: &AssessmentInput) -> f64 {
    input.monthly_salary * MONTHS_PER_YEAR + input.annual_bonus + input.benefits
}

pub(crate) fn total_work_hours(input: &AssessmentInput) -> f64 {
    input.weekly_hours * WEEKS_PER_YEAR
        + input.commute_hours * WEEKS_PER_YEAR * COMMUTE_DAYS_PER_WEEK
}

pub(crate) fn hourly_rate(input: &AssessmentInput) -> f64 {
    total_annual_income(input) / total_work_hours(input).max(MIN_WORK_HOURS)
}

pub(crate) fn score_dimensions(input: &AssessmentInput) -> RawDimensions {
    let hourly_rate = hourly_rate(input);

    RawDimensions {
        economic: economic_score(input, hourly_rate),
        time: time_score(input),
        growth: growth_score(input),
        experience: experience_score(input),
        balance: balance_score(input),
    }
}

fn economic_score(input: &AssessmentInput, hourly_rate: f64) -> f64 {
    let economic_base = (hourly_rate / HOURLY_RATE_CAP * 100.0).min(100.0);
    let overtime_penalty = (MAX_RATING - input.overtime_frequency) * OVERTIME_PENALTY_STEP;

    (economic_base * ECONOMIC_BASE_SHARE + overtime_penalty * OVERTIME_PENALTY_SHARE)
        * ECONOMIC_WEIGHT
}

fn time_score(input: &AssessmentInput) -> f64 {
    let weekly_score =
        (100.0 - (input.weekly_hours - STANDARD_WEEKLY_HOURS) * WEEKLY_HOURS_PENALTY).max(0.0);
    let commute_score = (100.0 - input.commute_hours * COMMUTE_HOURS_PENALTY).max(0.0);
    let overtime_score = inverted_rating(input.overtime_frequency) * 100.0;

    (weekly_score * WEEKLY_SHARE + commute_score * COMMUTE_SHARE + overtime_score * OVERTIME_SHARE)
        * TIME_WEIGHT
}

fn growth_score(input: &AssessmentInput) -> f64 {
    (input.skill_growth / MAX_RATING * SKILL_GROWTH_WEIGHT
        + input.promotion_chance / MAX_RATING * PROMOTION_WEIGHT
        + input.industry_prospect / MAX_RATING * INDUSTRY_WEIGHT)
        * GROWTH_WEIGHT
}

fn experience_score(input: &AssessmentInput) -> f64 {
    (inverted_rating(input.work_pressure) * PRESSURE_WEIGHT
        + input.team_atmosphere / MAX_RATING * TEAM_WEIGHT
        + input.work_interest / MAX_RATING * INTEREST_WEIGHT)
        * EXPERIENCE_WEIGHT
}

fn balance_score(input: &AssessmentInput) -> f64 {
    (input.work_flexibility / MAX_RATING * FLEXIBILITY_WEIGHT
        + input.vacation_benefit / MAX_RATING * VACATION_WEIGHT
        + input.work_life_balance / MAX_RATING * WORK_LIFE_WEIGHT)
        * BALANCE_WEIGHT
}

// A rating where 1 is best, mapped so that 1 -> 1.0 and 5 -> 0.2.
fn inverted_rating(rating: f64) -> f64 {
    (MAX_RATING - rating + 1.0) / MAX_RATING
}
