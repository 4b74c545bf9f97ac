use super::views::ScoreBand;
use crate::assessment::{Dimension, RecommendationKey, ScoreTier, TierLevel};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported message locales. Simplified Chinese is the default, matching
/// the audience the rubric was written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}' (expected zh-CN or en)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" | "zh-hans" => Ok(Self::ZhCn),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

/// Fixed report captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    ReportTitle,
    OverallScore,
    DimensionScores,
    HourlyValue,
    Recommendations,
    Celebration,
}

/// Resolves engine keys to display text for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub const fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub const fn caption(&self, caption: Caption) -> &'static str {
        match (self.locale, caption) {
            (Locale::En, Caption::ReportTitle) => "Job Worth Report",
            (Locale::En, Caption::OverallScore) => "Overall score",
            (Locale::En, Caption::DimensionScores) => "Dimension scores",
            (Locale::En, Caption::HourlyValue) => "Hourly value",
            (Locale::En, Caption::Recommendations) => "Recommendations",
            (Locale::En, Caption::Celebration) => "Celebration",
            (Locale::ZhCn, Caption::ReportTitle) => "工作性价比报告",
            (Locale::ZhCn, Caption::OverallScore) => "综合得分",
            (Locale::ZhCn, Caption::DimensionScores) => "各维度得分",
            (Locale::ZhCn, Caption::HourlyValue) => "时薪价值",
            (Locale::ZhCn, Caption::Recommendations) => "改进建议",
            (Locale::ZhCn, Caption::Celebration) => "庆祝",
        }
    }

    pub const fn level_label(&self, level: TierLevel) -> &'static str {
        match (self.locale, level) {
            (Locale::En, TierLevel::Excellent) => "Excellent",
            (Locale::En, TierLevel::Good) => "Good",
            (Locale::En, TierLevel::Average) => "Average",
            (Locale::En, TierLevel::NeedsImprovement) => "Needs Improvement",
            (Locale::ZhCn, TierLevel::Excellent) => "优秀",
            (Locale::ZhCn, TierLevel::Good) => "良好",
            (Locale::ZhCn, TierLevel::Average) => "中等",
            (Locale::ZhCn, TierLevel::NeedsImprovement) => "待改善",
        }
    }

    pub const fn humor_label(&self, tier: ScoreTier) -> &'static str {
        match (self.locale, tier) {
            (Locale::En, ScoreTier::Winner) => "Life Winner",
            (Locale::En, ScoreTier::Elite) => "Workplace Elite",
            (Locale::En, ScoreTier::WhiteCollar) => "Comfortable White-Collar",
            (Locale::En, ScoreTier::Striver) => "Striver",
            (Locale::En, ScoreTier::Worker) => "Everyday Worker",
            (Locale::En, ScoreTier::Tool) => "Tool Person",
            (Locale::En, ScoreTier::Horse) => "Workhorse",
            (Locale::En, ScoreTier::Sweatshop) => "Sweatshop Survivor",
            (Locale::ZhCn, ScoreTier::Winner) => "人生赢家",
            (Locale::ZhCn, ScoreTier::Elite) => "职场精英",
            (Locale::ZhCn, ScoreTier::WhiteCollar) => "体面白领",
            (Locale::ZhCn, ScoreTier::Striver) => "奋斗青年",
            (Locale::ZhCn, ScoreTier::Worker) => "打工人",
            (Locale::ZhCn, ScoreTier::Tool) => "工具人",
            (Locale::ZhCn, ScoreTier::Horse) => "牛马",
            (Locale::ZhCn, ScoreTier::Sweatshop) => "血汗工厂幸存者",
        }
    }

    pub const fn humor_description(&self, tier: ScoreTier) -> &'static str {
        match (self.locale, tier) {
            (Locale::En, ScoreTier::Winner) => {
                "Top pay, sane hours and a great team. Your friends are quietly jealous."
            }
            (Locale::En, ScoreTier::Elite) => "A job most people would trade for. Hold on to it.",
            (Locale::En, ScoreTier::WhiteCollar) => {
                "Stable and respectable, with a little room left to grow."
            }
            (Locale::En, ScoreTier::Striver) => {
                "Decent overall; a few adjustments would make it great."
            }
            (Locale::En, ScoreTier::Worker) => "It pays the bills, but do not expect much more.",
            (Locale::En, ScoreTier::Tool) => "Very useful to the company, less so to you.",
            (Locale::En, ScoreTier::Horse) => "Pulling hard for little in return.",
            (Locale::En, ScoreTier::Sweatshop) => "Time to update the resume.",
            (Locale::ZhCn, ScoreTier::Winner) => "钱多事少离家近，朋友们都在默默羡慕。",
            (Locale::ZhCn, ScoreTier::Elite) => "这份工作很多人求之不得，好好珍惜。",
            (Locale::ZhCn, ScoreTier::WhiteCollar) => "稳定体面，还有一点上升空间。",
            (Locale::ZhCn, ScoreTier::Striver) => "整体不错，再调整几处就更好了。",
            (Locale::ZhCn, ScoreTier::Worker) => "能养家糊口，但别期待太多。",
            (Locale::ZhCn, ScoreTier::Tool) => "对公司很有用，对自己就未必了。",
            (Locale::ZhCn, ScoreTier::Horse) => "干得多拿得少，该歇歇了。",
            (Locale::ZhCn, ScoreTier::Sweatshop) => "是时候更新简历了。",
        }
    }

    pub const fn recommendation(&self, key: RecommendationKey) -> &'static str {
        match (self.locale, key) {
            (Locale::En, RecommendationKey::LowEconomic) => {
                "Pay is low for the hours you put in. Negotiate a raise or look at better-paid roles."
            }
            (Locale::En, RecommendationKey::HighTimeCost) => {
                "Working and commuting hours eat too much of your week. Cut the commute or the overtime."
            }
            (Locale::En, RecommendationKey::LimitedGrowth) => {
                "Growth is limited. Invest in new skills or find a role with a clearer path up."
            }
            (Locale::En, RecommendationKey::PoorExperience) => {
                "The day-to-day experience is poor. Raise pressure and team issues with your manager."
            }
            (Locale::En, RecommendationKey::Imbalance) => {
                "Work-life balance needs attention. Protect your time off and ask for more flexibility."
            }
            (Locale::En, RecommendationKey::Excellent) => {
                "This job is well worth it. Keep building on what you have."
            }
            (Locale::En, RecommendationKey::Good) => {
                "A good job overall. Shore up the weak spots to make it great."
            }
            (Locale::En, RecommendationKey::Average) => {
                "An average job. Decide which dimensions you can realistically improve."
            }
            (Locale::En, RecommendationKey::Poor) => {
                "This job costs you more than it gives. Reassess your options."
            }
            (Locale::ZhCn, RecommendationKey::LowEconomic) => {
                "薪资相对投入的时间偏低，可以争取加薪或寻找薪资更高的机会。"
            }
            (Locale::ZhCn, RecommendationKey::HighTimeCost) => {
                "工作和通勤占用时间过多，考虑缩短通勤或减少加班。"
            }
            (Locale::ZhCn, RecommendationKey::LimitedGrowth) => {
                "成长空间有限，建议提升技能或寻找晋升路径更清晰的岗位。"
            }
            (Locale::ZhCn, RecommendationKey::PoorExperience) => {
                "工作体验较差，可以与上级沟通压力和团队问题。"
            }
            (Locale::ZhCn, RecommendationKey::Imbalance) => {
                "工作与生活失衡，注意保护休息时间，争取更多弹性。"
            }
            (Locale::ZhCn, RecommendationKey::Excellent) => "这份工作性价比很高，继续保持！",
            (Locale::ZhCn, RecommendationKey::Good) => "整体不错，补齐短板会更好。",
            (Locale::ZhCn, RecommendationKey::Average) => "表现中等，想想哪些方面可以改进。",
            (Locale::ZhCn, RecommendationKey::Poor) => {
                "这份工作性价比偏低，建议重新评估自己的选择。"
            }
        }
    }

    pub const fn dimension_label(&self, dimension: Dimension) -> &'static str {
        match (self.locale, dimension) {
            (Locale::En, Dimension::Economic) => "Economic return",
            (Locale::En, Dimension::Time) => "Time cost",
            (Locale::En, Dimension::Growth) => "Growth potential",
            (Locale::En, Dimension::Experience) => "Work experience",
            (Locale::En, Dimension::Balance) => "Work-life balance",
            (Locale::ZhCn, Dimension::Economic) => "经济回报",
            (Locale::ZhCn, Dimension::Time) => "时间成本",
            (Locale::ZhCn, Dimension::Growth) => "发展前景",
            (Locale::ZhCn, Dimension::Experience) => "工作体验",
            (Locale::ZhCn, Dimension::Balance) => "生活平衡",
        }
    }

    pub const fn band_tagline(&self, band: ScoreBand) -> &'static str {
        match (self.locale, band) {
            (Locale::En, ScoreBand::Excellent) => "Excellent - this job is great value!",
            (Locale::En, ScoreBand::Good) => "Good - solid overall",
            (Locale::En, ScoreBand::Fair) => "Fair - room for improvement",
            (Locale::En, ScoreBand::Low) => "Needs work - worth a rethink",
            (Locale::ZhCn, ScoreBand::Excellent) => "优秀 - 你的工作性价比很高！",
            (Locale::ZhCn, ScoreBand::Good) => "良好 - 整体表现不错",
            (Locale::ZhCn, ScoreBand::Fair) => "中等 - 还有提升空间",
            (Locale::ZhCn, ScoreBand::Low) => "待改善 - 建议重新评估",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_common_tags() {
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("zh_cn".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn default_locale_is_simplified_chinese() {
        assert_eq!(Locale::default(), Locale::ZhCn);
        assert_eq!(Locale::default().to_string(), "zh-CN");
    }

    #[test]
    fn every_key_resolves_in_every_locale() {
        for locale in [Locale::ZhCn, Locale::En] {
            let catalog = MessageCatalog::for_locale(locale);
            for tier in ScoreTier::ALL {
                assert!(!catalog.humor_label(tier).is_empty());
                assert!(!catalog.humor_description(tier).is_empty());
                assert!(!catalog.level_label(tier.level()).is_empty());
            }
            for dimension in Dimension::ALL {
                assert!(!catalog.dimension_label(dimension).is_empty());
            }
        }
    }

    #[test]
    fn locales_resolve_to_different_text() {
        let en = MessageCatalog::for_locale(Locale::En);
        let zh = MessageCatalog::for_locale(Locale::ZhCn);

        assert_eq!(en.humor_label(ScoreTier::Tool), "Tool Person");
        assert_eq!(zh.humor_label(ScoreTier::Tool), "工具人");
        assert_ne!(
            en.recommendation(RecommendationKey::Poor),
            zh.recommendation(RecommendationKey::Poor)
        );
    }
}
