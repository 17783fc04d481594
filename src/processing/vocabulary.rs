//! Skill vocabulary, loaded once at startup and shared read-only

use crate::config::MatchingConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::text_processor::fold;
use log::info;
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_SKILLS: &str = include_str!("../../assets/skills.json");

#[derive(Debug, Deserialize)]
struct SkillFile {
    skills: Vec<String>,
}

/// Sorted, de-duplicated, case-folded skill terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Fold, trim and de-duplicate the given terms. Blank terms are dropped.
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|term| fold(term.as_ref()))
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort();
        terms.dedup();

        if terms.is_empty() {
            return Err(ResumeMatcherError::Vocabulary("vocabulary contains no skills".to_string()));
        }

        Ok(Self { terms })
    }

    /// Parse `{"skills": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SkillFile = serde_json::from_str(json)
            .map_err(|e| ResumeMatcherError::Vocabulary(format!("invalid skill list: {}", e)))?;
        Self::from_terms(file.skills)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeMatcherError::Vocabulary(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let vocabulary = Self::from_json(&content)?;
        info!("Loaded {} skills from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    /// The skill list compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SKILLS)
    }

    pub fn from_config(config: &MatchingConfig) -> Result<Self> {
        match &config.vocabulary_path {
            Some(path) => Self::load(path),
            None => {
                let vocabulary = Self::embedded()?;
                info!("Using embedded vocabulary ({} skills)", vocabulary.len());
                Ok(vocabulary)
            }
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).is_ok()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
