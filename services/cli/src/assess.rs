use crate::cli::OutputFormat;
use crate::render::render_report_text;
use clap::Args;
use job_worth::assessment::score;
use job_worth::config::AppConfig;
use job_worth::error::AppError;
use job_worth::intake::{FormField, FormSnapshot};
use job_worth::presentation::{Locale, MessageCatalog, ReportView};
use tracing::{debug, info};

/// Form fields as typed. Anything omitted keeps its default form value;
/// values pass through the same sanitation as a form submission.
#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Monthly salary
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) monthly_salary: Option<String>,
    /// Annual bonus
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) annual_bonus: Option<String>,
    /// Annual value of benefits
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) benefits: Option<String>,
    /// Working hours per week (default 40)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weekly_hours: Option<String>,
    /// Daily round-trip commute in hours
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) commute_hours: Option<String>,
    /// Overtime frequency, 1 (rare) to 5 (constant)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) overtime_frequency: Option<String>,
    /// Skill growth, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) skill_growth: Option<String>,
    /// Promotion chance, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) promotion_chance: Option<String>,
    /// Industry prospect, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) industry_prospect: Option<String>,
    /// Work pressure, 1 (light) to 5 (crushing)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) work_pressure: Option<String>,
    /// Team atmosphere, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) team_atmosphere: Option<String>,
    /// Interest in the work, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) work_interest: Option<String>,
    /// Schedule flexibility, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) work_flexibility: Option<String>,
    /// Vacation benefit, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) vacation_benefit: Option<String>,
    /// Work-life balance, 1 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) work_life_balance: Option<String>,
    /// Message locale (zh-CN or en). Defaults to APP_LOCALE.
    #[arg(long)]
    pub(crate) locale: Option<Locale>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

impl AssessArgs {
    fn provided(&self) -> [(FormField, Option<&String>); 15] {
        [
            (FormField::MonthlySalary, self.monthly_salary.as_ref()),
            (FormField::AnnualBonus, self.annual_bonus.as_ref()),
            (FormField::Benefits, self.benefits.as_ref()),
            (FormField::WeeklyHours, self.weekly_hours.as_ref()),
            (FormField::CommuteHours, self.commute_hours.as_ref()),
            (FormField::OvertimeFrequency, self.overtime_frequency.as_ref()),
            (FormField::SkillGrowth, self.skill_growth.as_ref()),
            (FormField::PromotionChance, self.promotion_chance.as_ref()),
            (FormField::IndustryProspect, self.industry_prospect.as_ref()),
            (FormField::WorkPressure, self.work_pressure.as_ref()),
            (FormField::TeamAtmosphere, self.team_atmosphere.as_ref()),
            (FormField::WorkInterest, self.work_interest.as_ref()),
            (FormField::WorkFlexibility, self.work_flexibility.as_ref()),
            (FormField::VacationBenefit, self.vacation_benefit.as_ref()),
            (FormField::WorkLifeBalance, self.work_life_balance.as_ref()),
        ]
    }

    pub(crate) fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for (field, raw) in self.provided() {
            if let Some(raw) = raw {
                snapshot.set(field, raw.as_str());
            }
        }
        snapshot
    }
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or(config.report.locale);
    let snapshot = args.snapshot();
    let input = snapshot.to_input()?;
    debug!(?input, "assessment input normalized");

    let report = score(&input);
    info!(
        total = report.total_score,
        tier = report.score_tier.humor_key(),
        %locale,
        "job assessed"
    );

    let catalog = MessageCatalog::for_locale(locale);
    let view = ReportView::render(&report, &catalog);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print!("{}", render_report_text(&view, &catalog)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_flags_keep_form_defaults() {
        let args = AssessArgs {
            monthly_salary: Some("15,000".to_string()),
            annual_bonus: Some("30000".to_string()),
            benefits: Some("5000".to_string()),
            ..AssessArgs::default()
        };

        let input = args.snapshot().to_input().expect("flags normalize");
        assert_eq!(input.monthly_salary, 15_000.0);
        assert_eq!(input.weekly_hours, 40.0);
        assert_eq!(input.work_life_balance, 3.0);
        assert_eq!(score(&input).total_score, 73.2);
    }

    #[test]
    fn blank_flag_means_zero() {
        let args = AssessArgs {
            weekly_hours: Some(String::new()),
            ..AssessArgs::default()
        };

        let input = args.snapshot().to_input().expect("blank normalizes");
        assert_eq!(input.weekly_hours, 0.0);
    }

    #[test]
    fn garbage_flag_is_an_error() {
        let args = AssessArgs {
            skill_growth: Some("lots".to_string()),
            ..AssessArgs::default()
        };

        let error = args.snapshot().to_input().expect_err("garbage rejected");
        assert!(error.to_string().contains("skillGrowth"));
    }
}
