//! Text extraction from various file formats
//!
//! Extractors are synchronous; `InputManager` runs them on the blocking pool.

use crate::error::{Result, ResumeMatcherError};
use dotext::MsDoc;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::Read;
use std::path::Path;

pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeMatcherError::ExtractionFailed(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;

        // A scan without a text layer still yields page breaks
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let mut document = dotext::Docx::open(path).map_err(|e| {
            ResumeMatcherError::ExtractionFailed(format!("Failed to open DOCX '{}': {}", path.display(), e))
        })?;

        let mut text = String::new();
        document.read_to_string(&mut text).map_err(|e| {
            ResumeMatcherError::ExtractionFailed(format!("Failed to read DOCX '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = std::fs::read_to_string(path)?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown to HTML and strip it back down to plain lines
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
    let clean_text = tag_regex.replace_all(&text, "");

    clean_text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
