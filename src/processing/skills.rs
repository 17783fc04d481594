//! Skill extraction against the vocabulary
//!
//! Two strategies sit behind `SkillMatcher`:
//! - `TokenSkillMatcher`: a vocabulary term counts only when it is bounded by
//!   non-alphanumeric characters, so `java` is not found inside `javascript`.
//! - `SubstringSkillMatcher`: plain containment anywhere in the text.
//!
//! Both expect text that went through `text_processor::fold`.

use crate::config::MatchStrategy;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::text_processor::fold;
use crate::processing::vocabulary::Vocabulary;
use crate::processing::TermSet;
use aho_corasick::AhoCorasick;

pub trait SkillMatcher: Send + Sync {
    /// Vocabulary terms present in already folded text
    fn find_skills(&self, folded_text: &str) -> TermSet;

    fn strategy(&self) -> MatchStrategy;

    /// Fold `text` and find the vocabulary terms in it. Folding rather than
    /// `normalize` keeps punctuated terms such as `c++` and `node.js` intact.
    fn extract_skills(&self, text: &str) -> TermSet {
        self.find_skills(&fold(text))
    }
}

pub struct TokenSkillMatcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl TokenSkillMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let terms = vocabulary.terms().to_vec();

        // Standard match kind so overlapping hits ("machine learning" and
        // "learning") are all reported
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { automaton, terms })
    }
}

impl SkillMatcher for TokenSkillMatcher {
    fn find_skills(&self, folded_text: &str) -> TermSet {
        let mut found = TermSet::new();

        for mat in self.automaton.find_overlapping_iter(folded_text) {
            if is_token_boundary(folded_text, mat.start(), mat.end()) {
                found.insert(self.terms[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Token
    }
}

pub struct SubstringSkillMatcher {
    terms: Vec<String>,
}

impl SubstringSkillMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            terms: vocabulary.terms().to_vec(),
        }
    }
}

impl SkillMatcher for SubstringSkillMatcher {
    fn find_skills(&self, folded_text: &str) -> TermSet {
        self.terms
            .iter()
            .filter(|term| folded_text.contains(term.as_str()))
            .cloned()
            .collect()
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Substring
    }
}

pub fn build_skill_matcher(vocabulary: &Vocabulary, strategy: MatchStrategy) -> Result<Box<dyn SkillMatcher>> {
    match strategy {
        MatchStrategy::Token => Ok(Box::new(TokenSkillMatcher::new(vocabulary)?)),
        MatchStrategy::Substring => Ok(Box::new(SubstringSkillMatcher::new(vocabulary))),
    }
}

fn is_token_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
