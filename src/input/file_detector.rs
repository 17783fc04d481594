//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Formats accepted for resume uploads
    pub fn is_resume_format(&self) -> bool {
        matches!(self, FileType::Pdf | FileType::Docx)
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("pdf"),
            FileType::Docx => Some("docx"),
            FileType::Text => Some("txt"),
            FileType::Markdown => Some("md"),
            FileType::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("Docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("doc"), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path(Path::new("cv.final.pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("README")), FileType::Unknown);
    }

    #[test]
    fn test_resume_formats() {
        assert!(FileType::Pdf.is_resume_format());
        assert!(FileType::Docx.is_resume_format());
        assert!(!FileType::Text.is_resume_format());
        assert!(!FileType::Unknown.is_resume_format());
    }
}
