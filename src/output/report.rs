//! Report structures returned by the match engine

use crate::config::MatchStrategy;
use crate::processing::generator::StructuredResume;
use crate::processing::TermSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of matching one resume against one job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Share of JD skills found in the resume (0-100)
    pub ats_score: f64,

    /// TF-IDF cosine similarity of the full texts (0-100)
    pub similarity_score: u8,

    pub matched_skills: TermSet,
    pub missing_skills: TermSet,
    pub resume_skills: TermSet,
    pub jd_skills: TermSet,

    pub matched_keywords: TermSet,
    pub missing_keywords: TermSet,

    pub suggestions: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub strategy: MatchStrategy,
    pub vocabulary_size: usize,
    pub resume_characters: usize,
    pub jd_characters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_source: Option<String>,
    pub version: String,
}

/// Similarity before and after appending the generated block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub before: u8,
    pub after: u8,
}

impl ScoreComparison {
    pub fn improvement(&self) -> i16 {
        self.after as i16 - self.before as i16
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredResumeReport {
    #[serde(flatten)]
    pub analysis: MatchReport,
    pub scores: ScoreComparison,
    pub structured_resume: StructuredResume,
}

impl MatchReport {
    /// Record where the texts came from (file names, "form field", ...)
    pub fn with_sources(mut self, resume: impl Into<String>, jd: impl Into<String>) -> Self {
        self.metadata.resume_source = Some(resume.into());
        self.metadata.jd_source = Some(jd.into());
        self
    }

    /// Rounded ATS score for badges and headlines
    pub fn score_percentage(&self) -> u8 {
        self.ats_score.round().clamp(0.0, 100.0) as u8
    }
}

/// Human label for a 0-100 score
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent",
        75..=89 => "Strong",
        60..=74 => "Good",
        40..=59 => "Fair",
        _ => "Weak",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_labels() {
        assert_eq!(score_label(100), "Excellent");
        assert_eq!(score_label(80), "Strong");
        assert_eq!(score_label(60), "Good");
        assert_eq!(score_label(50), "Fair");
        assert_eq!(score_label(0), "Weak");
    }

    #[test]
    fn test_score_comparison_improvement() {
        let comparison = ScoreComparison { before: 40, after: 55 };
        assert_eq!(comparison.improvement(), 15);
        assert_eq!(ScoreComparison { before: 50, after: 45 }.improvement(), -5);
    }
}
