//! Job worth assessment: a pure scoring engine plus the form intake,
//! message catalog and presentation helpers that surround it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod intake;
pub mod presentation;
pub mod telemetry;
