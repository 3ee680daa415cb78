use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::formats::CaptionFormat;
use crate::language_utils;

/// Conversion configuration module
/// This module handles loading and validating the settings a `Converter`
/// runs with.
/// Represents the conversion configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language key for single-track input
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Language keys for the 2nd, 3rd, ... tracks of a multi-language SRT file
    #[serde(default)]
    pub track_languages: Vec<String>,

    /// Format written by `Converter::convert_default`
    #[serde(default)]
    pub output_format: CaptionFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Filter for log::set_max_level
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Config {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_tag(&self.default_language)
            .context("Invalid default language")?;

        for (i, language) in self.track_languages.iter().enumerate() {
            language_utils::validate_language_tag(language)
                .with_context(|| format!("Invalid language for track {}", i + 2))?;
        }

        let mut keys: Vec<&str> = Vec::with_capacity(self.track_languages.len() + 1);
        keys.push(&self.default_language);
        for language in &self.track_languages {
            if keys.contains(&language.as_str()) {
                return Err(anyhow!("Duplicate track language: {}", language));
            }
            keys.push(language);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_language: default_language(),
            track_languages: Vec::new(),
            output_format: CaptionFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}
