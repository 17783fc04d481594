//! Text processing and normalization

use std::collections::HashSet;

/// Common English stop words filtered out of context keywords
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
    "and", "any", "are", "around", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "either", "etc", "every", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into",
    "is", "it", "its", "itself", "just", "may", "me", "might", "more", "most",
    "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "others", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shall", "she", "should", "since", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "therefore", "these",
    "they", "this", "those", "though", "through", "throughout", "to", "too", "under", "until",
    "up", "upon", "us", "very", "via", "was", "we", "were", "what", "whatever",
    "when", "where", "whereas", "whether", "which", "while", "who", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Words that show up in nearly every resume or job posting and say nothing
/// about fit
const GENERIC_WORDS: &[&str] = &[
    "ability", "abilities", "able", "applicant", "applicants", "apply", "background", "benefits",
    "candidate", "candidates", "company", "degree", "description", "developer", "developers",
    "engineer", "engineers", "environment", "excellent", "experience", "experienced",
    "experiences", "familiarity", "field", "good", "great", "highly", "ideal", "including",
    "individual", "job", "knowledge", "looking", "minimum", "opportunity", "position",
    "preferred", "professional", "qualification", "qualifications", "related", "required",
    "requirement", "requirements", "responsibilities", "responsibility", "responsible", "role",
    "salary", "seeking", "skill", "skills", "strong", "successful", "team", "teams", "understanding",
    "using", "various", "week", "well", "work", "worked", "working", "world", "years",
];

/// Lowercase, replace everything outside `a-z` with a space, collapse runs of
/// whitespace and trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());

    for word in lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|word| !word.is_empty())
    {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }

    normalized
}

/// Lowercase and collapse whitespace, keeping punctuation so that terms like
/// `c++` and `node.js` stay intact.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace tokens of the normalized text
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    generic_words: HashSet<&'static str>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            generic_words: GENERIC_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_generic_word(&self, word: &str) -> bool {
        self.generic_words.contains(word)
    }

    /// Tokens with stop words and generic words removed
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stop_word(token) && !self.is_generic_word(token))
            .collect()
    }
}
