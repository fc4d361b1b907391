use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Formatting engine settings
    #[serde(default)]
    pub formatting: FormattingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Formatting engine configuration.
///
/// The marker vocabularies are immutable lookup data with fixed English
/// defaults; exposing them here keeps them injectable for localization
/// without any engine change.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormattingConfig {
    /// Sentences accumulated before a paragraph is flushed
    #[serde(default = "default_sentences_per_paragraph")]
    pub sentences_per_paragraph: usize,

    /// Minimum marker-led sentences for a paragraph to become a list
    #[serde(default = "default_min_list_markers")]
    pub min_list_markers: usize,

    /// Words that force a paragraph flush (case-sensitive substring match)
    #[serde(default = "default_transition_markers")]
    pub transition_markers: Vec<String>,

    /// Ordinal/sequential words that open a bullet when leading a sentence
    #[serde(default = "default_list_markers")]
    pub list_markers: Vec<String>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            sentences_per_paragraph: default_sentences_per_paragraph(),
            min_list_markers: default_min_list_markers(),
            transition_markers: default_transition_markers(),
            list_markers: default_list_markers(),
        }
    }
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

fn default_sentences_per_paragraph() -> usize {
    3
}

fn default_min_list_markers() -> usize {
    2
}

fn default_transition_markers() -> Vec<String> {
    ["However", "Moreover", "Furthermore", "In conclusion"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_list_markers() -> Vec<String> {
    [
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "firstly",
        "secondly",
        "thirdly",
        "lastly",
        "one",
        "two",
        "three",
        "four",
        "five",
        "next",
        "then",
        "finally",
        "additionally",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, creating a default one if it is missing
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.formatting.sentences_per_paragraph == 0 {
            return Err(anyhow!("sentences_per_paragraph must be at least 1"));
        }
        if self.formatting.min_list_markers == 0 {
            return Err(anyhow!("min_list_markers must be at least 1"));
        }
        if self.formatting.list_markers.is_empty() {
            return Err(anyhow!("list_markers must not be empty"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            formatting: FormattingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
