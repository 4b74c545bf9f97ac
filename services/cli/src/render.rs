use crate::batch::BatchEntry;
use job_worth::presentation::{Caption, MessageCatalog, ReportView};

pub(crate) fn render_report_text(view: &ReportView, catalog: &MessageCatalog) -> String {
    let mut lines = Vec::new();

    lines.push(catalog.caption(Caption::ReportTitle).to_string());
    lines.push(format!(
        "{}: {:.1} / 100 | {}",
        catalog.caption(Caption::OverallScore),
        view.total_score,
        view.band_tagline
    ));
    lines.push(format!(
        "{} / {}",
        view.tier.level_label, view.tier.humor_label
    ));
    lines.push(format!("  {}", view.tier.humor_description));
    lines.push(format!(
        "{}: {:.1}",
        catalog.caption(Caption::HourlyValue),
        view.hourly_value
    ));

    lines.push(String::new());
    lines.push(catalog.caption(Caption::DimensionScores).to_string());
    for dimension in &view.dimensions {
        lines.push(format!(
            "- {}: {:.1}/{:.0} ({:.0}%)",
            dimension.label, dimension.score, dimension.weight_ceiling, dimension.fill_pct
        ));
    }

    lines.push(String::new());
    lines.push(catalog.caption(Caption::Recommendations).to_string());
    for recommendation in &view.recommendations {
        lines.push(format!("- {}", recommendation.text));
    }

    if let Some(emoji) = view.celebration.emoji() {
        lines.push(String::new());
        lines.push(format!("{}: {}", catalog.caption(Caption::Celebration), emoji));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub(crate) fn render_batch_line(entry: &BatchEntry) -> String {
    let label = entry.label.as_deref().unwrap_or("-");
    format!(
        "line {} [{}]: {:.1} {} ({})",
        entry.line,
        label,
        entry.report.total_score,
        entry.report.tier.humor_label,
        entry.report.tier.level_label
    )
}
