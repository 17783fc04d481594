//! Input manager for handling different file types

use crate::config::ServerConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const SCRATCH_PREFIX: &str = "resume-";

/// Routes files to the right extractor and bounds how long extraction may take.
///
/// Extraction always runs on tokio's blocking pool. Uploaded bytes are copied to
/// a scratch file that lives inside the blocking task, so it is removed when the
/// task finishes however it finishes. A timed-out task keeps running in the
/// background, so a parser that never returns leaves its file behind until
/// `sweep_scratch_dir` runs at the next server start.
#[derive(Debug, Clone)]
pub struct InputManager {
    timeout: Duration,
    scratch_dir: Option<PathBuf>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            scratch_dir: None,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new()
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
            .with_scratch_dir(config.upload_dir.clone())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_scratch_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scratch_dir = dir;
        self
    }

    /// Extract text from a file on disk (CLI path)
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = self.detect_file_type(path)?;
        let extractor = extractor_for(file_type).ok_or_else(|| {
            ResumeMatcherError::UnsupportedFormat(format!("Unsupported file type for: {}", path.display()))
        })?;

        info!("Extracting {:?} text from: {}", file_type, path.display());
        let owned_path = path.to_path_buf();
        self.run_blocking(move || extractor.extract(&owned_path)).await
    }

    /// Extract text from uploaded bytes. Only resume formats (PDF, DOCX) are accepted.
    pub async fn extract_upload(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let file_type = FileType::from_path(Path::new(file_name));
        if !file_type.is_resume_format() {
            return Err(ResumeMatcherError::UnsupportedFormat(format!(
                "'{}': only PDF and DOCX resumes are accepted",
                file_name
            )));
        }

        let extractor = extractor_for(file_type).ok_or_else(|| {
            ResumeMatcherError::UnsupportedFormat(format!("Unsupported file type for: {}", file_name))
        })?;

        let suffix = format!(".{}", file_type.extension().unwrap_or("bin"));
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX).suffix(&suffix);

        let mut scratch = match &self.scratch_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                builder.tempfile_in(dir)?
            }
            None => builder.tempfile()?,
        };
        scratch.write_all(bytes)?;
        scratch.flush()?;

        debug!(
            "Stored upload '{}' ({} bytes) at {}",
            file_name,
            bytes.len(),
            scratch.path().display()
        );

        self.run_blocking(move || {
            let result = extractor.extract(scratch.path());
            drop(scratch);
            result
        })
        .await
    }

    /// Remove scratch files left in the configured scratch directory by a
    /// previous process. Returns how many were removed.
    pub fn sweep_scratch_dir(&self) -> Result<usize> {
        let Some(dir) = &self.scratch_dir else {
            return Ok(0);
        };
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let is_scratch = entry.file_name().to_string_lossy().starts_with(SCRATCH_PREFIX);
            if is_scratch && entry.file_type()?.is_file() {
                std::fs::remove_file(entry.path())?;
                removed += 1;
            }
        }

        if removed > 0 {
            info!("Removed {} stale upload(s) from {}", removed, dir.display());
        }
        Ok(removed)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeMatcherError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub(crate) async fn run_blocking<F>(&self, job: F) -> Result<String>
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        let handle = tokio::task::spawn_blocking(job);

        match tokio::time::timeout(self.timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => {
                warn!("Extraction task did not complete: {}", join_error);
                let reason = if join_error.is_panic() {
                    "the document parser crashed on this file".to_string()
                } else {
                    join_error.to_string()
                };
                Err(ResumeMatcherError::ExtractionFailed(reason))
            }
            Err(_) => {
                warn!("Extraction exceeded {:?}", self.timeout);
                Err(ResumeMatcherError::ExtractionTimeout(self.timeout.as_secs()))
            }
        }
    }
}

fn extractor_for(file_type: FileType) -> Option<Box<dyn TextExtractor>> {
    match file_type {
        FileType::Pdf => Some(Box::new(PdfExtractor)),
        FileType::Docx => Some(Box::new(DocxExtractor)),
        FileType::Text => Some(Box::new(PlainTextExtractor)),
        FileType::Markdown => Some(Box::new(MarkdownExtractor)),
        FileType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_extension() {
        let manager = InputManager::new();
        let result = manager.extract_upload("resume.txt", b"Python").await;
        assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_no_scratch_file() {
        let dir = TempDir::new().unwrap();
        let manager = InputManager::new().with_scratch_dir(Some(dir.path().to_path_buf()));

        let result = manager.extract_upload("resume.pdf", b"%PDF-garbage").await;
        assert!(matches!(result, Err(ResumeMatcherError::ExtractionFailed(_))));
        assert_eq!(scratch_entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_successful_upload_leaves_no_scratch_file() {
        let dir = TempDir::new().unwrap();
        let manager = InputManager::new().with_scratch_dir(Some(dir.path().to_path_buf()));
        let bytes = std::fs::read("tests/fixtures/sample_resume.pdf").unwrap();

        let text = manager.extract_upload("resume.pdf", &bytes).await.unwrap();
        assert!(text.contains("Kafka"));
        assert_eq!(scratch_entries(dir.path()), 0);
    }

    #[test]
    fn test_sweep_removes_only_stale_uploads() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("resume-abc123.pdf"), b"%PDF").unwrap();
        std::fs::write(dir.path().join("resume-def456.docx"), b"PK").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();

        let manager = InputManager::new().with_scratch_dir(Some(dir.path().to_path_buf()));
        assert_eq!(manager.sweep_scratch_dir().unwrap(), 2);
        assert_eq!(scratch_entries(dir.path()), 1);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_sweep_without_scratch_dir_is_a_no_op() {
        assert_eq!(InputManager::new().sweep_scratch_dir().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let manager = InputManager::new().with_timeout(Duration::from_millis(50));
        let result = manager
            .run_blocking(|| {
                std::thread::sleep(Duration::from_millis(500));
                Ok(String::new())
            })
            .await;
        assert!(matches!(result, Err(ResumeMatcherError::ExtractionTimeout(_))));
    }

    #[tokio::test]
    async fn test_panic_becomes_extraction_error() {
        let manager = InputManager::new();
        let result = manager
            .run_blocking(|| -> Result<String> { panic!("parser blew up") })
            .await;
        assert!(matches!(result, Err(ResumeMatcherError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_extension_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README");
        std::fs::write(&path, "text").unwrap();

        let result = InputManager::new().extract_text(&path).await;
        assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
    }
}
