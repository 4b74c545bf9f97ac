//! Fixed rubric constants. Golden outputs depend on these exact values and
//! on the order in which `rules` applies them.

pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;
pub(crate) const WEEKS_PER_YEAR: f64 = 52.0;
/// Commute hours are a per-day round trip, five days a week.
pub(crate) const COMMUTE_DAYS_PER_WEEK: f64 = 5.0;
/// Denominator floor for the hourly rate.
pub(crate) const MIN_WORK_HOURS: f64 = 1.0;

/// Hourly rate that maps to a full economic base.
pub(crate) const HOURLY_RATE_CAP: f64 = 100.0;
pub(crate) const ECONOMIC_BASE_SHARE: f64 = 0.8;
pub(crate) const OVERTIME_PENALTY_SHARE: f64 = 0.2;
pub(crate) const OVERTIME_PENALTY_STEP: f64 = 2.0;

pub(crate) const STANDARD_WEEKLY_HOURS: f64 = 40.0;
pub(crate) const WEEKLY_HOURS_PENALTY: f64 = 2.0;
pub(crate) const COMMUTE_HOURS_PENALTY: f64 = 10.0;
pub(crate) const WEEKLY_SHARE: f64 = 0.4;
pub(crate) const COMMUTE_SHARE: f64 = 0.3;
pub(crate) const OVERTIME_SHARE: f64 = 0.3;

/// Ratings run 1..=5; inverted ratings use `MAX_RATING - x + 1`.
pub(crate) const MAX_RATING: f64 = 5.0;

pub(crate) const SKILL_GROWTH_WEIGHT: f64 = 40.0;
pub(crate) const PROMOTION_WEIGHT: f64 = 35.0;
pub(crate) const INDUSTRY_WEIGHT: f64 = 25.0;

pub(crate) const PRESSURE_WEIGHT: f64 = 35.0;
pub(crate) const TEAM_WEIGHT: f64 = 35.0;
pub(crate) const INTEREST_WEIGHT: f64 = 30.0;

pub(crate) const FLEXIBILITY_WEIGHT: f64 = 33.0;
pub(crate) const VACATION_WEIGHT: f64 = 33.0;
pub(crate) const WORK_LIFE_WEIGHT: f64 = 34.0;

// Dimension weights in the total; 100 x weight is the dimension ceiling.
pub(crate) const ECONOMIC_WEIGHT: f64 = 0.3;
pub(crate) const TIME_WEIGHT: f64 = 0.25;
pub(crate) const GROWTH_WEIGHT: f64 = 0.2;
pub(crate) const EXPERIENCE_WEIGHT: f64 = 0.15;
pub(crate) const BALANCE_WEIGHT: f64 = 0.1;
