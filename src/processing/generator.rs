//! Suggestions and structured resume text built from missing terms.
//!
//! Pure templating: only terms handed in are echoed back, nothing is invented.

use crate::config::GeneratorConfig;
use crate::processing::TermSet;
use serde::{Deserialize, Serialize};

const SUMMARY_PREFIX: &str = "Results-driven professional";
const SUMMARY_SUFFIX: &str = "focused on delivering reliable, well-tested solutions that meet business goals.";

const BULLET_TEMPLATES: &[(&str, &str)] = &[
    ("Built and maintained production features using ", "."),
    ("Collaborated with cross-functional teams to deliver projects involving ", "."),
    ("Improved reliability and performance of key systems by applying ", "."),
];

/// One improvement sentence per missing skill, in sorted order
pub fn suggestions(missing_skills: &TermSet) -> Vec<String> {
    missing_skills
        .iter()
        .map(|skill| format!("Consider adding projects or experience related to {}", skill))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub summary: String,
    pub bullets: Vec<String>,
    pub keywords_used: Vec<String>,
    pub text: String,
}

pub struct StructuredResumeGenerator {
    max_keywords: usize,
    group_size: usize,
}

impl Default for StructuredResumeGenerator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl StructuredResumeGenerator {
    pub fn new(max_keywords: usize, group_size: usize) -> Self {
        Self {
            max_keywords,
            group_size: group_size.max(1),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.max_keywords, config.group_size)
    }

    /// Weave up to `max_keywords` of `terms` into a summary paragraph and one
    /// bullet per group. Fewer terms simply produce fewer bullets.
    pub fn generate(&self, terms: &[String]) -> StructuredResume {
        let keywords_used: Vec<String> = terms.iter().take(self.max_keywords).cloned().collect();
        let groups: Vec<&[String]> = keywords_used.chunks(self.group_size).collect();

        let summary = match groups.first() {
            Some(first) => format!(
                "{} with hands-on experience in {}, {}",
                SUMMARY_PREFIX,
                join_terms(first),
                SUMMARY_SUFFIX
            ),
            None => format!("{} {}", SUMMARY_PREFIX, SUMMARY_SUFFIX),
        };

        let bullets: Vec<String> = groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                let (prefix, suffix) = BULLET_TEMPLATES[index % BULLET_TEMPLATES.len()];
                format!("{}{}{}", prefix, join_terms(group), suffix)
            })
            .collect();

        let mut text = format!("SUMMARY\n{}\n", summary);
        if !bullets.is_empty() {
            text.push_str("\nKEY SKILLS & EXPERIENCE\n");
            for bullet in &bullets {
                text.push_str("- ");
                text.push_str(bullet);
                text.push('\n');
            }
        }

        StructuredResume {
            summary,
            bullets,
            keywords_used,
            text,
        }
    }
}

/// "a", "a and b", "a, b and c"
fn join_terms(terms: &[String]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suggestions_one_per_skill() {
        let missing: TermSet = ["react", "docker"].iter().map(|s| s.to_string()).collect();
        let result = suggestions(&missing);

        assert_eq!(
            result,
            vec![
                "Consider adding projects or experience related to docker".to_string(),
                "Consider adding projects or experience related to react".to_string(),
            ]
        );
        assert!(suggestions(&TermSet::new()).is_empty());
    }

    #[test]
    fn test_generate_caps_and_groups_keywords() {
        let generator = StructuredResumeGenerator::default();
        let input = terms(&["a1", "a2", "a3", "b1", "b2", "b3", "c1", "c2", "dropped1", "dropped2"]);

        let resume = generator.generate(&input);

        assert_eq!(resume.keywords_used.len(), 8);
        assert_eq!(resume.bullets.len(), 3);
        assert!(resume.summary.contains("a1, a2 and a3"));
        assert!(resume.bullets[0].contains("a1, a2 and a3"));
        assert!(resume.bullets[1].contains("b1, b2 and b3"));
        assert!(resume.bullets[2].ends_with("c1 and c2."));
        assert!(!resume.text.contains("dropped"));
        assert!(resume.text.starts_with("SUMMARY\n"));
        assert!(resume.text.contains("KEY SKILLS & EXPERIENCE\n- "));
    }

    #[test]
    fn test_generate_tolerates_few_keywords() {
        let generator = StructuredResumeGenerator::default();

        let single = generator.generate(&terms(&["terraform"]));
        assert_eq!(single.bullets, vec!["Built and maintained production features using terraform.".to_string()]);

        let empty = generator.generate(&[]);
        assert!(empty.bullets.is_empty());
        assert!(empty.keywords_used.is_empty());
        assert_eq!(
            empty.summary,
            "Results-driven professional focused on delivering reliable, well-tested solutions that meet business goals."
        );
        assert!(!empty.text.contains("KEY SKILLS"));
    }

    #[test]
    fn test_zero_group_size_does_not_panic() {
        let generator = StructuredResumeGenerator::new(8, 0);
        let resume = generator.generate(&terms(&["a", "b"]));
        assert_eq!(resume.bullets.len(), 2);
    }
}
