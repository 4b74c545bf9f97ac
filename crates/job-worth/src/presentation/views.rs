use super::catalog::{Locale, MessageCatalog};
use super::celebration::Celebration;
use crate::assessment::{
    Dimension, RecommendationKey, ScoreReport, ScoreTier, TierColor, TierLevel,
};
use serde::Serialize;

/// Gauge colouring for a 0–100 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Low,
}

impl ScoreBand {
    pub fn for_score(pct: f64) -> Self {
        if pct >= 80.0 {
            Self::Excellent
        } else if pct >= 60.0 {
            Self::Good
        } else if pct >= 40.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub const fn color(self) -> TierColor {
        match self {
            Self::Excellent => TierColor::Green,
            Self::Good => TierColor::Blue,
            Self::Fair => TierColor::Yellow,
            Self::Low => TierColor::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierView {
    pub level: TierLevel,
    pub level_label: &'static str,
    pub color: TierColor,
    pub humor_key: ScoreTier,
    pub humor_label: &'static str,
    pub humor_description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: f64,
    pub weight_ceiling: f64,
    pub fill_pct: f64,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub key: RecommendationKey,
    pub text: &'static str,
}

/// A [`ScoreReport`] with every key resolved for one locale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub locale: Locale,
    pub total_score: f64,
    pub band: ScoreBand,
    pub band_tagline: &'static str,
    pub tier: TierView,
    pub dimensions: Vec<DimensionView>,
    pub hourly_value: f64,
    pub recommendations: Vec<RecommendationView>,
    pub celebration: Celebration,
}

impl ReportView {
    pub fn render(report: &ScoreReport, catalog: &MessageCatalog) -> Self {
        let band = ScoreBand::for_score(report.total_score);

        let tier = TierView {
            level: report.tier,
            level_label: catalog.level_label(report.tier),
            color: report.tier_color,
            humor_key: report.score_tier,
            humor_label: catalog.humor_label(report.score_tier),
            humor_description: catalog.humor_description(report.score_tier),
        };

        // Dimensions are banded on their share of the ceiling, not the raw
        // score, so a full 10/10 balance reads the same as a full 30/30.
        let dimensions = report
            .dimensions
            .iter()
            .map(|entry| {
                let fill_pct = entry.fill_pct();
                DimensionView {
                    dimension: entry.dimension,
                    label: catalog.dimension_label(entry.dimension),
                    score: entry.score,
                    weight_ceiling: entry.weight_ceiling,
                    fill_pct,
                    band: ScoreBand::for_score(fill_pct),
                }
            })
            .collect();

        let recommendations = report
            .recommendations
            .iter()
            .map(|key| RecommendationView {
                key: *key,
                text: catalog.recommendation(*key),
            })
            .collect();

        Self {
            locale: catalog.locale(),
            total_score: report.total_score,
            band,
            band_tagline: catalog.band_tagline(band),
            tier,
            dimensions,
            hourly_value: report.hourly_value,
            recommendations,
            celebration: Celebration::for_total(report.total_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{score, AssessmentInput};

    #[test]
    fn bands_follow_dashboard_thresholds() {
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(39.9), ScoreBand::Low);
        assert_eq!(ScoreBand::Low.color(), TierColor::Red);
    }

    #[test]
    fn render_resolves_text_for_the_locale() {
        let report = score(&AssessmentInput {
            monthly_salary: 15_000.0,
            annual_bonus: 30_000.0,
            benefits: 5_000.0,
            ..AssessmentInput::default()
        });

        let view = ReportView::render(&report, &MessageCatalog::for_locale(Locale::En));

        assert_eq!(view.locale, Locale::En);
        assert_eq!(view.total_score, 73.2);
        assert_eq!(view.band, ScoreBand::Good);
        assert_eq!(view.tier.humor_key, ScoreTier::WhiteCollar);
        assert_eq!(view.tier.humor_label, "Comfortable White-Collar");
        assert_eq!(view.tier.level_label, "Good");
        assert_eq!(view.dimensions.len(), 5);
        assert_eq!(view.recommendations.len(), 1);
        assert_eq!(view.recommendations[0].key, RecommendationKey::Good);
        assert_eq!(view.celebration, Celebration::Confetti);
    }

    #[test]
    fn dimensions_band_on_share_of_ceiling() {
        let report = score(&AssessmentInput::default());
        let view = ReportView::render(&report, &MessageCatalog::for_locale(Locale::ZhCn));

        let time = view
            .dimensions
            .iter()
            .find(|entry| entry.dimension == Dimension::Time)
            .expect("time dimension");
        assert!((time.fill_pct - 88.0).abs() < 1e-9);
        assert_eq!(time.band, ScoreBand::Excellent);
        assert_eq!(view.celebration, Celebration::None);
    }

    #[test]
    fn view_serializes_with_camel_case_keys() {
        let report = score(&AssessmentInput::default());
        let view = ReportView::render(&report, &MessageCatalog::for_locale(Locale::ZhCn));
        let json = serde_json::to_value(&view).expect("view serializes");

        assert_eq!(json["locale"], "zh-CN");
        assert_eq!(json["tier"]["humorKey"], "tool");
        assert_eq!(json["celebration"], "none");
        assert_eq!(json["totalScore"], 49.2);
        assert!(json["bandTagline"].is_string());
        assert!(json["dimensions"][0]["fillPct"].is_number());
        assert!(json.get("total_score").is_none());
    }
}
