//! Match engine: runs extraction, matching, scoring and generation for one
//! resume/JD pair

use crate::config::{Config, MatchStrategy};
use crate::error::Result;
use crate::output::report::{MatchReport, ReportMetadata, ScoreComparison, StructuredResumeReport};
use crate::processing::ats_matcher::{match_sets, ratio_score};
use crate::processing::generator::{suggestions, StructuredResumeGenerator};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::similarity::similarity_score;
use crate::processing::skills::{build_skill_matcher, SkillMatcher};
use crate::processing::vocabulary::Vocabulary;
use crate::processing::TermSet;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use std::time::Instant;

/// Immutable after construction; share it behind an `Arc`.
pub struct MatchEngine {
    vocabulary: Arc<Vocabulary>,
    skill_matcher: Box<dyn SkillMatcher>,
    keyword_extractor: KeywordExtractor,
    generator: StructuredResumeGenerator,
    score_precision: u32,
}

impl MatchEngine {
    pub fn new(vocabulary: Arc<Vocabulary>, config: &Config) -> Result<Self> {
        let skill_matcher = build_skill_matcher(&vocabulary, config.matching.strategy)?;

        info!(
            "Match engine ready: {} skills, {:?} matching",
            vocabulary.len(),
            config.matching.strategy
        );

        Ok(Self {
            vocabulary,
            skill_matcher,
            keyword_extractor: KeywordExtractor::new(config.matching.min_keyword_length),
            generator: StructuredResumeGenerator::from_config(&config.generator),
            score_precision: config.matching.score_precision,
        })
    }

    /// Load the configured vocabulary and build the engine around it
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = Arc::new(Vocabulary::from_config(&config.matching)?);
        Self::new(vocabulary, config)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.skill_matcher.strategy()
    }

    pub fn extract_skills(&self, text: &str) -> TermSet {
        self.skill_matcher.extract_skills(text)
    }

    /// Context keywords of `text`, excluding the words of `skills` found in it
    pub fn extract_keywords(&self, text: &str, skills: &TermSet) -> TermSet {
        self.keyword_extractor.extract(text, &self.vocabulary, skills)
    }

    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> MatchReport {
        let started = Instant::now();

        let resume_skills = self.extract_skills(resume_text);
        let jd_skills = self.extract_skills(jd_text);
        let skills = match_sets(&resume_skills, &jd_skills);

        let resume_keywords = self.extract_keywords(resume_text, &resume_skills);
        let jd_keywords = self.extract_keywords(jd_text, &jd_skills);
        let keywords = match_sets(&resume_keywords, &jd_keywords);

        let ats_score = ratio_score(&skills.matched, &jd_skills, self.score_precision);
        let similarity = similarity_score(resume_text, jd_text);

        debug!(
            "Skills: resume={} jd={} matched={} | keywords: matched={} missing={}",
            resume_skills.len(),
            jd_skills.len(),
            skills.matched.len(),
            keywords.matched.len(),
            keywords.missing.len()
        );

        MatchReport {
            ats_score,
            similarity_score: similarity,
            suggestions: suggestions(&skills.missing),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            resume_skills,
            jd_skills,
            matched_keywords: keywords.matched,
            missing_keywords: keywords.missing,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms: started.elapsed().as_millis() as u64,
                strategy: self.strategy(),
                vocabulary_size: self.vocabulary.len(),
                resume_characters: resume_text.chars().count(),
                jd_characters: jd_text.chars().count(),
                resume_source: None,
                jd_source: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Analyze, then generate a resume block from the missing skills followed by
    /// the missing keywords and compare similarity before and after adding it.
    pub fn structured_resume(&self, resume_text: &str, jd_text: &str) -> StructuredResumeReport {
        let analysis = self.analyze(resume_text, jd_text);

        let terms: Vec<String> = analysis
            .missing_skills
            .iter()
            .chain(analysis.missing_keywords.iter())
            .cloned()
            .collect();
        let structured_resume = self.generator.generate(&terms);

        let improved_text = format!("{}\n\n{}", resume_text, structured_resume.text);
        let scores = ScoreComparison {
            before: analysis.similarity_score,
            after: similarity_score(&improved_text, jd_text),
        };

        info!(
            "Structured resume generated with {} keywords, similarity {} -> {}",
            structured_resume.keywords_used.len(),
            scores.before,
            scores.after
        );

        StructuredResumeReport {
            analysis,
            scores,
            structured_resume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(terms: &[&str], strategy: MatchStrategy) -> MatchEngine {
        let mut config = Config::default();
        config.matching.strategy = strategy;
        let vocabulary = Arc::new(Vocabulary::from_terms(terms).unwrap());
        MatchEngine::new(vocabulary, &config).unwrap()
    }

    fn set(items: &[&str]) -> TermSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_react_docker_report() {
        let engine = engine(&["python", "react", "docker"], MatchStrategy::Token);
        let report = engine.analyze(
            "Experienced in Python and Docker",
            "Looking for Python, React developer",
        );

        assert_eq!(report.resume_skills, set(&["docker", "python"]));
        assert_eq!(report.jd_skills, set(&["python", "react"]));
        assert_eq!(report.matched_skills, set(&["python"]));
        assert_eq!(report.missing_skills, set(&["react"]));
        assert_eq!(report.ats_score, 50.0);
        assert_eq!(
            report.suggestions,
            vec!["Consider adding projects or experience related to react".to_string()]
        );
        assert_eq!(report.metadata.strategy, MatchStrategy::Token);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let engine = engine(&["python", "react", "docker"], MatchStrategy::Substring);
        let report = engine.analyze("Experienced in Python and Docker", "");

        assert!(report.jd_skills.is_empty());
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.similarity_score, 0);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_identical_texts() {
        let engine = engine(&["python", "react", "docker"], MatchStrategy::Token);
        let text = "Python developer with React and Docker delivering analytics dashboards";
        let report = engine.analyze(text, text);

        assert_eq!(report.similarity_score, 100);
        assert_eq!(report.ats_score, 100.0);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.matched_keywords, set(&["analytics", "dashboards", "delivering"]));
    }

    #[test]
    fn test_context_keywords_reported() {
        let engine = engine(&["python"], MatchStrategy::Token);
        let report = engine.analyze(
            "Python scripting for payment reconciliation",
            "Python engineer for payment fraud analytics",
        );

        assert_eq!(report.matched_keywords, set(&["payment"]));
        assert_eq!(report.missing_keywords, set(&["analytics", "fraud"]));
    }

    #[test]
    fn test_structured_resume_uses_missing_terms() {
        let engine = engine(&["python", "react", "docker"], MatchStrategy::Token);
        let report = engine.structured_resume(
            "Experienced in Python and Docker",
            "Looking for Python, React developer building realtime dashboards",
        );

        assert_eq!(
            report.structured_resume.keywords_used,
            vec!["react".to_string(), "building".to_string(), "dashboards".to_string(), "realtime".to_string()]
        );
        assert_eq!(report.scores.before, report.analysis.similarity_score);
        assert!(report.scores.after >= report.scores.before);
    }

    #[test]
    fn test_multi_word_skills_do_not_leak_into_keywords() {
        let engine = engine(
            &["machine learning", "scikit-learn", "project management", "python"],
            MatchStrategy::Token,
        );
        let report = engine.structured_resume(
            "Python scripting",
            "Needs machine learning, scikit-learn and project management",
        );

        assert_eq!(
            report.analysis.jd_skills,
            set(&["machine learning", "project management", "scikit-learn"])
        );
        assert!(report.analysis.missing_keywords.is_disjoint(&set(&[
            "machine", "learning", "scikit", "learn", "project", "management"
        ])));
        assert_eq!(
            report.structured_resume.keywords_used,
            vec![
                "machine learning".to_string(),
                "project management".to_string(),
                "scikit-learn".to_string(),
                "needs".to_string()
            ]
        );
    }
}
