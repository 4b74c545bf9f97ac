use serde::{Deserialize, Serialize};

/// Snapshot of the fifteen assessment fields as the form hands them over.
///
/// Nothing here is range checked. Ratings are nominally 1–5 and amounts
/// non-negative, but the engine scores whatever it receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub monthly_salary: f64,
    pub annual_bonus: f64,
    pub benefits: f64,
    pub weekly_hours: f64,
    pub commute_hours: f64,
    pub overtime_frequency: f64,
    pub skill_growth: f64,
    pub promotion_chance: f64,
    pub industry_prospect: f64,
    pub work_pressure: f64,
    pub team_atmosphere: f64,
    pub work_interest: f64,
    pub work_flexibility: f64,
    pub vacation_benefit: f64,
    pub work_life_balance: f64,
}

impl Default for AssessmentInput {
    /// The state of a freshly opened form: no pay entered, a 40 hour week,
    /// no commute and every rating in the middle.
    fn default() -> Self {
        Self {
            monthly_salary: 0.0,
            annual_bonus: 0.0,
            benefits: 0.0,
            weekly_hours: 40.0,
            commute_hours: 0.0,
            overtime_frequency: 3.0,
            skill_growth: 3.0,
            promotion_chance: 3.0,
            industry_prospect: 3.0,
            work_pressure: 3.0,
            team_atmosphere: 3.0,
            work_interest: 3.0,
            work_flexibility: 3.0,
            vacation_benefit: 3.0,
            work_life_balance: 3.0,
        }
    }
}

/// Weighted sub-categories making up the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Economic,
    Time,
    Growth,
    Experience,
    Balance,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Economic,
        Dimension::Time,
        Dimension::Growth,
        Dimension::Experience,
        Dimension::Balance,
    ];

    /// Highest score the dimension reaches with in-range input; equal to its
    /// percentage weight in the total.
    pub const fn weight_ceiling(self) -> f64 {
        match self {
            Self::Economic => 30.0,
            Self::Time => 25.0,
            Self::Growth => 20.0,
            Self::Experience => 15.0,
            Self::Balance => 10.0,
        }
    }
}

/// Per-dimension scores and their total, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub economic: f64,
    pub time: f64,
    pub growth: f64,
    pub experience: f64,
    pub balance: f64,
    pub total: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Economic => self.economic,
            Dimension::Time => self.time,
            Dimension::Growth => self.growth,
            Dimension::Experience => self.experience,
            Dimension::Balance => self.balance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
    pub weight_ceiling: f64,
}

impl DimensionScore {
    /// Share of the ceiling reached, as a percentage. Out-of-range input can
    /// push this below 0 or above 100.
    pub fn fill_pct(&self) -> f64 {
        if self.weight_ceiling == 0.0 {
            return 0.0;
        }
        self.score / self.weight_ceiling * 100.0
    }
}

/// Coarse qualitative band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierColor {
    Green,
    Blue,
    Yellow,
    Red,
}

/// The eight score buckets, highest first. Each bucket carries its own
/// flavor label and belongs to one [`TierLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreTier {
    Winner,
    Elite,
    WhiteCollar,
    Striver,
    Worker,
    Tool,
    Horse,
    Sweatshop,
}

impl ScoreTier {
    pub const ALL: [ScoreTier; 8] = [
        ScoreTier::Winner,
        ScoreTier::Elite,
        ScoreTier::WhiteCollar,
        ScoreTier::Striver,
        ScoreTier::Worker,
        ScoreTier::Tool,
        ScoreTier::Horse,
        ScoreTier::Sweatshop,
    ];

    pub const fn level(self) -> TierLevel {
        match self {
            Self::Winner | Self::Elite => TierLevel::Excellent,
            Self::WhiteCollar | Self::Striver => TierLevel::Good,
            Self::Worker | Self::Tool => TierLevel::Average,
            Self::Horse | Self::Sweatshop => TierLevel::NeedsImprovement,
        }
    }

    pub const fn color(self) -> TierColor {
        match self.level() {
            TierLevel::Excellent => TierColor::Green,
            TierLevel::Good => TierColor::Blue,
            TierLevel::Average => TierColor::Yellow,
            TierLevel::NeedsImprovement => TierColor::Red,
        }
    }

    pub const fn humor_key(self) -> &'static str {
        match self {
            Self::Winner => "winner",
            Self::Elite => "elite",
            Self::WhiteCollar => "whiteCollar",
            Self::Striver => "striver",
            Self::Worker => "worker",
            Self::Tool => "tool",
            Self::Horse => "horse",
            Self::Sweatshop => "sweatshop",
        }
    }
}

/// Advisory message selected by the engine; the catalog supplies the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKey {
    LowEconomic,
    HighTimeCost,
    LimitedGrowth,
    PoorExperience,
    Imbalance,
    Excellent,
    Good,
    Average,
    Poor,
}

impl RecommendationKey {
    /// Whether this key is the single closing verdict rather than a
    /// per-dimension warning.
    pub const fn is_closing(self) -> bool {
        matches!(
            self,
            Self::Excellent | Self::Good | Self::Average | Self::Poor
        )
    }
}

/// Everything the presentation layer needs from one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub total_score: f64,
    pub tier: TierLevel,
    #[serde(rename = "tierColorKey")]
    pub tier_color: TierColor,
    #[serde(rename = "humorKey")]
    pub score_tier: ScoreTier,
    pub dimensions: Vec<DimensionScore>,
    pub hourly_value: f64,
    pub recommendations: Vec<RecommendationKey>,
}

impl ScoreReport {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions
            .iter()
            .find(|entry| entry.dimension == dimension)
    }
}
