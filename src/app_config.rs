use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::file_utils::FileManager;
use crate::language_utils::ScanLanguage;
use crate::report::VIDEO_ID_PLACEHOLDER;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Raw search words, stemmed per language at startup
    #[serde(default)]
    pub search_words: Vec<String>,

    /// Fuzzy match threshold (0-100); a window must score strictly above it
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Directory of SRT files to scan
    #[serde(default = "default_srt_directory")]
    pub srt_directory: PathBuf,

    /// Output CSV file, created/truncated at startup
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Video URL template; `{video_id}` is replaced by the cleaned filename
    #[serde(default = "default_video_url_template")]
    pub video_url_template: String,

    /// ISO 639-1 codes of the languages to dispatch on
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_threshold() -> u8 {
    90
}

fn default_srt_directory() -> PathBuf {
    PathBuf::from("./srts")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("output.csv")
}

fn default_video_url_template() -> String {
    format!("https://www.twitch.tv/videos/{}", VIDEO_ID_PLACEHOLDER)
}

fn default_languages() -> Vec<String> {
    vec!["de".to_string(), "en".to_string()]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.search_words.iter().all(|word| word.trim().is_empty()) {
            return Err(ConfigError::NoSearchWords.into());
        }

        if self.threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold).into());
        }

        if !self.video_url_template.contains(VIDEO_ID_PLACEHOLDER) {
            return Err(crate::errors::ReportError::MissingPlaceholder(VIDEO_ID_PLACEHOLDER).into());
        }

        if !FileManager::dir_exists(&self.srt_directory) {
            return Err(ConfigError::DirectoryNotFound(
                self.srt_directory.display().to_string(),
            )
            .into());
        }

        // Reject unsupported language tags before any file is processed
        let _ = self.scan_languages()?;

        Ok(())
    }

    /// Resolve the configured language codes, order kept, duplicates dropped
    pub fn scan_languages(&self) -> Result<Vec<ScanLanguage>> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages.into());
        }

        let mut languages: Vec<ScanLanguage> = Vec::with_capacity(self.languages.len());
        for code in &self.languages {
            let language = ScanLanguage::from_code(code)?;
            if !languages.contains(&language) {
                languages.push(language);
            }
        }

        Ok(languages)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            search_words: Vec::new(),
            threshold: default_threshold(),
            srt_directory: default_srt_directory(),
            output_file: default_output_file(),
            video_url_template: default_video_url_template(),
            languages: default_languages(),
            log_level: LogLevel::default(),
        }
    }
}
