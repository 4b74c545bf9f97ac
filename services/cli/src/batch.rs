use crate::cli::OutputFormat;
use crate::render::render_batch_line;
use clap::Args;
use job_worth::assessment::score;
use job_worth::config::AppConfig;
use job_worth::error::AppError;
use job_worth::intake::{AssessmentImporter, ImportedAssessment};
use job_worth::presentation::{Locale, MessageCatalog, ReportView};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one job per row; the header must name every form field
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Message locale (zh-CN or en). Defaults to APP_LOCALE.
    #[arg(long)]
    pub(crate) locale: Option<Locale>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchEntry {
    pub(crate) line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
    pub(crate) report: ReportView,
}

pub(crate) fn score_rows(rows: Vec<ImportedAssessment>, catalog: &MessageCatalog) -> Vec<BatchEntry> {
    rows.into_iter()
        .map(|row| {
            let report = score(&row.input);
            BatchEntry {
                line: row.line,
                label: row.label,
                report: ReportView::render(&report, catalog),
            }
        })
        .collect()
}

pub(crate) fn run_batch(args: BatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let BatchArgs {
        input,
        locale,
        format,
    } = args;

    let locale = locale.unwrap_or(config.report.locale);
    let rows = AssessmentImporter::from_path(&input)?;
    let catalog = MessageCatalog::for_locale(locale);
    let entries = score_rows(rows, &catalog);

    info!(rows = entries.len(), path = %input.display(), %locale, "batch scored");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}", render_batch_line(entry));
            }
        }
    }

    Ok(())
}
