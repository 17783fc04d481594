//! Report types and their renderings

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{MatchReport, StructuredResumeReport};
