/*!
 * Caption format readers and writers.
 *
 * Every format implements `CaptionReader` and/or `CaptionWriter` and only
 * ever exchanges data through `CaptionSet`:
 * - `srt`: SubRip reader and writer
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::caption_model::CaptionSet;
use crate::errors::{AppError, CaptionError};

pub mod srt;

pub use srt::{SrtReader, SrtWriter};

/// Parses one caption format into the intermediate model
pub trait CaptionReader {
    /// Cheap sniff for format identity; never fails
    fn detect(&self, content: &str) -> bool;

    /// Parse a whole document, keying single-track content by `default_language`
    fn read(&self, content: &str, default_language: &str) -> Result<CaptionSet, CaptionError>;

    /// Parse raw bytes after checking they are UTF-8 text
    fn read_bytes(&self, content: &[u8], default_language: &str) -> Result<CaptionSet, CaptionError> {
        self.read(decode_input(content)?, default_language)
    }
}

/// Serializes the intermediate model into one caption format
pub trait CaptionWriter {
    fn write(&self, captions: &CaptionSet) -> String;
}

/// Registered caption formats
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptionFormat {
    #[default]
    Srt,
}

impl CaptionFormat {
    /// All formats in detection order
    pub const ALL: &'static [CaptionFormat] = &[CaptionFormat::Srt];

    pub fn display_name(&self) -> &str {
        match self {
            Self::Srt => "SubRip",
        }
    }

    pub fn extension(&self) -> &str {
        match self {
            Self::Srt => "srt",
        }
    }

    pub fn reader(&self) -> Box<dyn CaptionReader> {
        match self {
            Self::Srt => Box::new(SrtReader::new()),
        }
    }

    pub fn writer(&self) -> Box<dyn CaptionWriter> {
        match self {
            Self::Srt => Box::new(SrtWriter::new()),
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for CaptionFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "srt" | "subrip" => Ok(Self::Srt),
            _ => Err(AppError::UnknownFormat(s.to_string())),
        }
    }
}

/// First registered format whose reader recognizes the content
pub fn detect_format(content: &str) -> Option<CaptionFormat> {
    CaptionFormat::ALL
        .iter()
        .copied()
        .find(|format| format.reader().detect(content))
}

/// Accept only UTF-8 text, dropping a leading byte order mark
pub fn decode_input(content: &[u8]) -> Result<&str, CaptionError> {
    let text = std::str::from_utf8(content).map_err(|e| {
        CaptionError::UnsupportedInput(format!("content is not valid UTF-8 text: {}", e))
    })?;
    Ok(strip_bom(text))
}

pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Split on `\n`, `\r\n` and lone `\r`; a final terminator adds no empty line
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().flat_map(|line| line.split('\r')).collect()
}

/// A markup pattern and its replacement, applied to each content line
#[derive(Debug, Clone)]
pub struct MarkupRule {
    pattern: Regex,
    replacement: &'static str,
}

impl MarkupRule {
    pub fn new(pattern: Regex, replacement: &'static str) -> Self {
        Self { pattern, replacement }
    }
}

/// Apply every rule in order
pub fn strip_markup(line: &str, rules: &[MarkupRule]) -> String {
    rules.iter().fold(line.to_string(), |text, rule| {
        rule.pattern.replace_all(&text, rule.replacement).into_owned()
    })
}

/// Cosmetic color spans that SubRip-style text often carries
pub static FONT_COLOR_RULES: Lazy<Vec<MarkupRule>> = Lazy::new(|| {
    vec![
        MarkupRule::new(
            Regex::new(r##"(?i)<font color="#[0-9a-f]{6}">"##).expect("Invalid font open regex"),
            "",
        ),
        MarkupRule::new(
            Regex::new(r"(?i)</font>").expect("Invalid font close regex"),
            "",
        ),
    ]
});
