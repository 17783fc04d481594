//! Text processing and analysis module

pub mod text_processor;
pub mod vocabulary;
pub mod skills;
pub mod keywords;
pub mod ats_matcher;
pub mod similarity;
pub mod generator;
pub mod analyzer;

pub use analyzer::MatchEngine;

/// Sorted, duplicate-free set of normalized terms
pub type TermSet = std::collections::BTreeSet<String>;
