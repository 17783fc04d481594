//! Context keyword extraction: the words of a document that are neither
//! skills nor filler.

use crate::processing::text_processor::{tokenize, TextProcessor};
use crate::processing::vocabulary::Vocabulary;
use crate::processing::TermSet;

pub struct KeywordExtractor {
    processor: TextProcessor,
    min_length: usize,
}

impl KeywordExtractor {
    /// Keywords must be strictly longer than `min_length` characters
    pub fn new(min_length: usize) -> Self {
        Self {
            processor: TextProcessor::new(),
            min_length,
        }
    }

    /// `skills` are the skills already found in `text`. Their normalized words
    /// are dropped too, so "machine learning" does not leave behind "machine"
    /// and "learning" as keywords.
    pub fn extract(&self, text: &str, vocabulary: &Vocabulary, skills: &TermSet) -> TermSet {
        let skill_words: TermSet = skills.iter().flat_map(|skill| tokenize(skill)).collect();

        self.processor
            .content_tokens(text)
            .into_iter()
            .filter(|token| token.chars().count() > self.min_length)
            .filter(|token| !vocabulary.contains(token) && !skill_words.contains(token))
            .collect()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_exclude_skills_stopwords_and_short_words() {
        let vocabulary = Vocabulary::from_terms(["python", "kubernetes"]).unwrap();
        let extractor = KeywordExtractor::new(4);

        let keywords = extractor.extract(
            "We need strong Python and Kubernetes experience for scalable payment pipelines. Fast, lean team.",
            &vocabulary,
            &TermSet::new(),
        );

        let expected: TermSet = ["payment", "pipelines", "scalable"].iter().map(|s| s.to_string()).collect();
        assert_eq!(keywords, expected);
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        let vocabulary = Vocabulary::from_terms(["rust"]).unwrap();
        let extractor = KeywordExtractor::new(4);

        let keywords = extractor.extract("cloud data infra", &vocabulary, &TermSet::new());
        assert!(keywords.contains("cloud"));
        assert!(keywords.contains("infra"));
        assert!(!keywords.contains("data"));
    }

    #[test]
    fn test_words_of_found_skills_are_not_keywords() {
        let vocabulary = Vocabulary::from_terms(["machine learning", "scikit-learn", "project management"]).unwrap();
        let extractor = KeywordExtractor::new(4);
        let skills: TermSet = ["machine learning", "project management", "scikit-learn"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let keywords = extractor.extract(
            "Machine learning with scikit-learn, project management for fraud analytics",
            &vocabulary,
            &skills,
        );

        let expected: TermSet = ["analytics", "fraud"].iter().map(|s| s.to_string()).collect();
        assert_eq!(keywords, expected);
    }
}
