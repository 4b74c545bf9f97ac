use crate::assess::{run_assess, AssessArgs};
use crate::batch::{run_batch, BatchArgs};
use clap::{Parser, Subcommand, ValueEnum};
use job_worth::config::AppConfig;
use job_worth::error::AppError;
use job_worth::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "job-worth",
    about = "Score how much a job is really worth across pay, time, growth, experience and balance",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Score a single job from command line fields (default command)
    Assess(AssessArgs),
    /// Score every row of a CSV export
    Batch(BatchArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        locale = %config.report.locale,
        "job worth cli starting"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Assess(AssessArgs::default()));

    match command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Batch(args) => run_batch(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_worth::presentation::Locale;
    use std::path::PathBuf;

    #[test]
    fn no_subcommand_defaults_to_assess() {
        let cli = Cli::try_parse_from(["job-worth"]).expect("bare invocation parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_field_flags_and_locale() {
        let cli = Cli::try_parse_from([
            "job-worth",
            "assess",
            "--monthly-salary",
            "15,000",
            "--commute-hours",
            "-1",
            "--locale",
            "en",
            "--format",
            "json",
        ])
        .expect("assess flags parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.monthly_salary.as_deref(), Some("15,000"));
                assert_eq!(args.commute_hours.as_deref(), Some("-1"));
                assert_eq!(args.locale, Some(Locale::En));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_locale_is_rejected_at_parse_time() {
        let error = Cli::try_parse_from(["job-worth", "assess", "--locale", "fr"])
            .expect_err("locale rejected");
        assert!(error.to_string().contains("fr"));
    }

    #[test]
    fn batch_requires_an_input_file() {
        assert!(Cli::try_parse_from(["job-worth", "batch"]).is_err());

        let cli = Cli::try_parse_from(["job-worth", "batch", "--input", "jobs.csv"])
            .expect("batch parses");
        match cli.command {
            Some(Command::Batch(args)) => {
                assert_eq!(args.input, PathBuf::from("jobs.csv"));
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.locale.is_none());
            }
            other => panic!("expected batch command, got {other:?}"),
        }
    }
}
