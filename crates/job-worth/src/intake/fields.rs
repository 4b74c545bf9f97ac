use crate::assessment::AssessmentInput;

/// What a form field measures. Only currency amounts accept digit group
/// separators; nothing is range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Currency,
    Hours,
    Rating,
}

/// The fifteen assessment form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    MonthlySalary,
    AnnualBonus,
    Benefits,
    WeeklyHours,
    CommuteHours,
    OvertimeFrequency,
    SkillGrowth,
    PromotionChance,
    IndustryProspect,
    WorkPressure,
    TeamAtmosphere,
    WorkInterest,
    WorkFlexibility,
    VacationBenefit,
    WorkLifeBalance,
}

impl FormField {
    pub const ALL: [FormField; 15] = [
        FormField::MonthlySalary,
        FormField::AnnualBonus,
        FormField::Benefits,
        FormField::WeeklyHours,
        FormField::CommuteHours,
        FormField::OvertimeFrequency,
        FormField::SkillGrowth,
        FormField::PromotionChance,
        FormField::IndustryProspect,
        FormField::WorkPressure,
        FormField::TeamAtmosphere,
        FormField::WorkInterest,
        FormField::WorkFlexibility,
        FormField::VacationBenefit,
        FormField::WorkLifeBalance,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::MonthlySalary => "monthlySalary",
            Self::AnnualBonus => "annualBonus",
            Self::Benefits => "benefits",
            Self::WeeklyHours => "weeklyHours",
            Self::CommuteHours => "commuteHours",
            Self::OvertimeFrequency => "overtimeFrequency",
            Self::SkillGrowth => "skillGrowth",
            Self::PromotionChance => "promotionChance",
            Self::IndustryProspect => "industryProspect",
            Self::WorkPressure => "workPressure",
            Self::TeamAtmosphere => "teamAtmosphere",
            Self::WorkInterest => "workInterest",
            Self::WorkFlexibility => "workFlexibility",
            Self::VacationBenefit => "vacationBenefit",
            Self::WorkLifeBalance => "workLifeBalance",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::MonthlySalary | Self::AnnualBonus | Self::Benefits => FieldKind::Currency,
            Self::WeeklyHours | Self::CommuteHours => FieldKind::Hours,
            _ => FieldKind::Rating,
        }
    }

    /// Case-insensitive lookup by camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    pub fn read(self, input: &AssessmentInput) -> f64 {
        match self {
            Self::MonthlySalary => input.monthly_salary,
            Self::AnnualBonus => input.annual_bonus,
            Self::Benefits => input.benefits,
            Self::WeeklyHours => input.weekly_hours,
            Self::CommuteHours => input.commute_hours,
            Self::OvertimeFrequency => input.overtime_frequency,
            Self::SkillGrowth => input.skill_growth,
            Self::PromotionChance => input.promotion_chance,
            Self::IndustryProspect => input.industry_prospect,
            Self::WorkPressure => input.work_pressure,
            Self::TeamAtmosphere => input.team_atmosphere,
            Self::WorkInterest => input.work_interest,
            Self::WorkFlexibility => input.work_flexibility,
            Self::VacationBenefit => input.vacation_benefit,
            Self::WorkLifeBalance => input.work_life_balance,
        }
    }

    pub fn write(self, input: &mut AssessmentInput, value: f64) {
        let slot = match self {
            Self::MonthlySalary => &mut input.monthly_salary,
            Self::AnnualBonus => &mut input.annual_bonus,
            Self::Benefits => &mut input.benefits,
            Self::WeeklyHours => &mut input.weekly_hours,
            Self::CommuteHours => &mut input.commute_hours,
            Self::OvertimeFrequency => &mut input.overtime_frequency,
            Self::SkillGrowth => &mut input.skill_growth,
            Self::PromotionChance => &mut input.promotion_chance,
            Self::IndustryProspect => &mut input.industry_prospect,
            Self::WorkPressure => &mut input.work_pressure,
            Self::TeamAtmosphere => &mut input.team_atmosphere,
            Self::WorkInterest => &mut input.work_interest,
            Self::WorkFlexibility => &mut input.work_flexibility,
            Self::VacationBenefit => &mut input.vacation_benefit,
            Self::WorkLifeBalance => &mut input.work_life_balance,
        };
        *slot = value;
    }
}
