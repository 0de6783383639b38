//! Presentation: canonical status to display strings and a status card.

pub mod format;
pub mod report;

pub use report::{ReportField, StatusReport};
