//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub matching: MatchingConfig,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub request_timeout_secs: u64,
    /// Directory for scratch copies of uploads; the system temp dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub strategy: MatchStrategy,
    pub min_keyword_length: usize,
    pub score_precision: u32,
    /// JSON skill list; the embedded vocabulary is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Vocabulary term must sit on word boundaries
    Token,
    /// Vocabulary term may appear anywhere, including inside longer words
    Substring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub max_keywords: usize,
    pub group_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024,
            request_timeout_secs: 30,
            upload_dir: None,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::Token,
            min_keyword_length: 4,
            score_precision: 2,
            vocabulary_path: None,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_keywords: 8,
            group_size: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            matching: MatchingConfig::default(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ResumeMatcherError::Configuration("server.port must be non-zero".to_string()));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ResumeMatcherError::Configuration(
                "server.request_timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.generator.group_size == 0 {
            return Err(ResumeMatcherError::Configuration("generator.group_size must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.matching.strategy, MatchStrategy::Token);
        assert_eq!(config.matching.min_keyword_length, 4);
        assert_eq!(config.generator.max_keywords, 8);
        assert_eq!(config.generator.group_size, 3);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.matching.strategy = MatchStrategy::Substring;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("strategy = \"substring\""));

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.matching.strategy, MatchStrategy::Substring);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_invalid_group_size_rejected() {
        let mut config = Config::default();
        config.generator.group_size = 0;
        assert!(matches!(config.validate(), Err(ResumeMatcherError::Configuration(_))));
    }
}
