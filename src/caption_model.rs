/*!
 * Caption intermediate model.
 *
 * Every reader produces a `CaptionSet` and every writer consumes one; no
 * format talks to another directly. The model is a plain ownership tree:
 * a set owns its tracks, a track owns its captions, a caption owns its nodes.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language_utils;
use crate::timestamp;

/// Inline style marker for formats with richer markup than plain text.
///
/// Formats that cannot represent styling drop these on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleNode {
    /// Style identifier, e.g. `italic` or a class name
    pub name: String,

    /// `true` opens the span, `false` closes it
    pub open: bool,
}

/// Atomic content unit of a caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum CaptionNode {
    /// Run of text without embedded line breaks
    Text(String),

    /// Explicit line break between two runs
    Break,

    /// Inline style marker
    Style(StyleNode),
}

impl CaptionNode {
    /// Build a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }
}

/// Drop leading, trailing and doubled breaks.
pub fn normalize_nodes(nodes: Vec<CaptionNode>) -> Vec<CaptionNode> {
    let mut normalized: Vec<CaptionNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.is_break() && normalized.last().is_none_or(CaptionNode::is_break) {
            continue;
        }
        normalized.push(node);
    }
    while normalized.last().is_some_and(CaptionNode::is_break) {
        normalized.pop();
    }
    normalized
}

/// One timed caption event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Start offset in microseconds
    pub start: u64,

    /// End offset in microseconds
    pub end: u64,

    /// Ordered content
    #[serde(default)]
    pub nodes: Vec<CaptionNode>,
}

impl Caption {
    pub fn new(start: u64, end: u64, nodes: Vec<CaptionNode>) -> Self {
        Self { start, end, nodes }
    }

    /// Start time as `HH:MM:SS<sep>mmm`
    pub fn format_start(&self, msec_separator: char) -> String {
        timestamp::format(self.start, msec_separator)
    }

    /// End time as `HH:MM:SS<sep>mmm`
    pub fn format_end(&self, msec_separator: char) -> String {
        timestamp::format(self.end, msec_separator)
    }

    /// Display duration in microseconds
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Plain text with breaks rendered as newlines and style markers dropped
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.nodes {
            match node {
                CaptionNode::Text(content) => text.push_str(content),
                CaptionNode::Break => text.push('\n'),
                CaptionNode::Style(_) => {}
            }
        }
        text
    }

    /// Whether the node sequence has no leading, trailing or doubled break
    pub fn has_valid_nodes(&self) -> bool {
        let starts_with_break = self.nodes.first().is_some_and(CaptionNode::is_break);
        let ends_with_break = self.nodes.last().is_some_and(CaptionNode::is_break);
        let doubled = self
            .nodes
            .windows(2)
            .any(|pair| pair[0].is_break() && pair[1].is_break());
        !(starts_with_break || ends_with_break || doubled)
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} --> {} {:?}",
            self.format_start('.'),
            self.format_end('.'),
            self.text()
        )
    }
}

/// Captions for a single language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// Language key, usually a locale tag such as `en-US`
    pub language: String,

    /// Captions in source order
    pub captions: Vec<Caption>,
}

/// Language-indexed collection of captions.
///
/// Keys are unique and keep their insertion order, which is the order
/// writers emit them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionSet {
    tracks: Vec<CaptionTrack>,
}

impl CaptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the captions for a language, replacing any existing track in place
    pub fn set_captions(&mut self, language: impl Into<String>, captions: Vec<Caption>) {
        let language = language.into();
        match self.tracks.iter_mut().find(|t| t.language == language) {
            Some(track) => track.captions = captions,
            None => self.tracks.push(CaptionTrack { language, captions }),
        }
    }

    /// Captions for an exact language key
    pub fn get_captions(&self, language: &str) -> Option<&[Caption]> {
        self.tracks
            .iter()
            .find(|t| t.language == language)
            .map(|t| t.captions.as_slice())
    }

    /// Language keys in insertion order
    pub fn get_languages(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.language.as_str()).collect()
    }

    pub fn tracks(&self) -> &[CaptionTrack] {
        &self.tracks
    }

    /// First language key that names the same ISO 639 language as `code`.
    ///
    /// `en`, `eng` and `en-GB` all match a track keyed `en-US`.
    pub fn find_language(&self, code: &str) -> Option<&str> {
        self.tracks
            .iter()
            .map(|t| t.language.as_str())
            .find(|language| *language == code || language_utils::language_tags_match(language, code))
    }

    /// Total number of captions across all languages
    pub fn caption_count(&self) -> usize {
        self.tracks.iter().map(|t| t.captions.len()).sum()
    }

    /// True when no language holds a single caption
    pub fn is_empty(&self) -> bool {
        self.caption_count() == 0
    }
}

impl fmt::Display for CaptionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Caption Set")?;
        for track in &self.tracks {
            writeln!(f, "{}: {} captions", track.language, track.captions.len())?;
        }
        Ok(())
    }
}
