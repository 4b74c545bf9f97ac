//! Display-side helpers that consume a [`crate::assessment::ScoreReport`].
//! Nothing here feeds back into scoring.

pub mod catalog;
pub mod celebration;
pub mod views;

pub use catalog::{Caption, Locale, MessageCatalog, UnknownLocale};
pub use celebration::{BurstOrigin, Celebration, ConfettiBurst, ConfettiPalette};
pub use views::{DimensionView, RecommendationView, ReportView, ScoreBand, TierView};
