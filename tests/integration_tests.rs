//! Integration tests for the resume matcher

use resume_matcher::config::{Config, MatchStrategy};
use resume_matcher::error::ResumeMatcherError;
use resume_matcher::input::InputManager;
use resume_matcher::processing::{MatchEngine, TermSet};
use std::path::Path;

fn set(items: &[&str]) -> TermSet {
    items.iter().map(|s| s.to_string()).collect()
}

fn engine() -> MatchEngine {
    MatchEngine::from_config(&Config::default()).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("React"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains("https://react.dev"));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.docx");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Containerized workloads with Docker"));
}

#[tokio::test]
async fn test_text_extraction_from_pdf() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.pdf");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_pdf_without_text_layer_extracts_empty() {
    let manager = InputManager::new();
    let bytes = std::fs::read("tests/fixtures/scanned_resume.pdf").unwrap();

    let text = manager.extract_upload("scan.pdf", &bytes).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_pdf_upload_cleans_scratch_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let manager = InputManager::new().with_scratch_dir(Some(dir.path().join("uploads")));
    let bytes = std::fs::read("tests/fixtures/sample_resume.pdf").unwrap();

    let text = manager.extract_upload("jane.pdf", &bytes).await.unwrap();
    assert!(text.contains("Docker"));
    assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
}

#[tokio::test]
async fn test_docx_upload_is_extracted() {
    let manager = InputManager::new();
    let bytes = std::fs::read("tests/fixtures/sample_resume.docx").unwrap();

    let text = manager.extract_upload("jane.docx", &bytes).await.unwrap();
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_end_to_end_match_with_embedded_vocabulary() {
    let manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let jd = manager.extract_text(Path::new("tests/fixtures/sample_jd.txt")).await.unwrap();

    let engine = engine();
    let report = engine.analyze(&resume, &jd);

    assert_eq!(
        report.jd_skills,
        set(&["aws", "docker", "kafka", "kubernetes", "postgresql", "python", "terraform"])
    );
    assert_eq!(report.matched_skills, set(&["docker", "kubernetes", "postgresql", "python"]));
    assert_eq!(report.missing_skills, set(&["aws", "kafka", "terraform"]));
    assert_eq!(report.ats_score, 57.14);
    assert_eq!(report.suggestions.len(), 3);
    assert!(report.missing_keywords.contains("fraud"));
    assert!(report.similarity_score > 0 && report.similarity_score < 100);

    for skill in &report.resume_skills {
        assert!(engine.vocabulary().contains(skill));
    }
}

#[tokio::test]
async fn test_docx_and_txt_resumes_score_the_same_skills() {
    let manager = InputManager::new();
    let txt = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let docx = manager.extract_text(Path::new("tests/fixtures/sample_resume.docx")).await.unwrap();
    let jd = manager.extract_text(Path::new("tests/fixtures/sample_jd.txt")).await.unwrap();

    let engine = engine();
    let from_txt = engine.analyze(&txt, &jd);
    let from_docx = engine.analyze(&docx, &jd);

    assert_eq!(from_txt.matched_skills, from_docx.matched_skills);
    assert_eq!(from_txt.ats_score, from_docx.ats_score);
}

#[test]
fn test_structured_resume_improves_similarity() {
    let resume = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let jd = std::fs::read_to_string("tests/fixtures/sample_jd.txt").unwrap();

    let report = engine().structured_resume(&resume, &jd);

    assert_eq!(
        &report.structured_resume.keywords_used[..3],
        &["aws".to_string(), "kafka".to_string(), "terraform".to_string()]
    );
    assert!(report.structured_resume.keywords_used.len() <= 8);
    assert!(report.structured_resume.text.starts_with("SUMMARY\n"));
    assert!(report.scores.after >= report.scores.before);
}

#[test]
fn test_custom_vocabulary_and_substring_strategy() {
    let dir = tempfile::TempDir::new().unwrap();
    let vocabulary_path = dir.path().join("skills.json");
    std::fs::write(&vocabulary_path, r#"{"skills": ["Java", "SQL", " go ", "java"]}"#).unwrap();

    let mut config = Config::default();
    config.matching.vocabulary_path = Some(vocabulary_path);
    config.matching.strategy = MatchStrategy::Substring;

    let engine = MatchEngine::from_config(&config).unwrap();
    assert_eq!(engine.vocabulary().terms(), &["go".to_string(), "java".to_string(), "sql".to_string()]);

    // Substring matching finds "java" inside "javascript" and "sql" inside "nosql"
    let skills = engine.extract_skills("JavaScript developer, good with NoSQL");
    assert_eq!(skills, set(&["go", "java", "sql"]));
}
