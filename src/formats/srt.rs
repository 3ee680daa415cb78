use log::{debug, warn};

use crate::caption_model::{Caption, CaptionNode, CaptionSet, normalize_nodes};
use crate::errors::CaptionError;
use crate::formats::{
    CaptionReader, CaptionWriter, FONT_COLOR_RULES, MarkupRule, split_lines, strip_bom, strip_markup,
};
use crate::timestamp;

// @module: SubRip (.srt) reader and writer

/// Line placed between per-language blocks when several tracks share one file.
///
/// Not part of SubRip proper; other SRT consumers will show it as text.
/// The writer keeps the blank line that ends the previous track's last block
/// before the marker; files with the marker directly after caption text are
/// read the same way.
pub const MULTI_LANGUAGE_MARKER: &str = "MULTI-LANGUAGE SRT";

/// Token between the start and end timestamps of a timing line
pub const TIMING_SEPARATOR: &str = "-->";

fn is_index_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

fn is_track_marker(line: &str) -> bool {
    line.trim() == MULTI_LANGUAGE_MARKER
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Outcome of one step of the block scanner
#[derive(Debug)]
enum Step {
    /// A complete caption block
    Caption(Caption),
    /// A well-formed block with no text
    Empty,
    /// Marker line ending the current language track
    TrackEnd,
    /// First line that does not start a block; scanning stops here
    Done,
}

/// Block scanner over the lines of one document
struct BlockScanner<'a> {
    lines: Vec<&'a str>,
    position: usize,
    markup_rules: &'a [MarkupRule],
}

impl<'a> BlockScanner<'a> {
    fn new(content: &'a str, markup_rules: &'a [MarkupRule]) -> Self {
        Self {
            lines: split_lines(strip_bom(content)),
            position: 0,
            markup_rules,
        }
    }

    fn next_step(&mut self) -> Result<Step, CaptionError> {
        let start = self.position;
        let Some(line) = self.lines.get(start) else {
            return Ok(Step::Done);
        };

        if self.is_track_boundary(start) {
            self.position = start + 1;
            return Ok(Step::TrackEnd);
        }
        if !is_index_line(line) {
            debug!("Stopping SRT scan at line {}: {:?} is not a caption index", start + 1, line);
            return Ok(Step::Done);
        }

        let next_block = self.find_next_block(start);
        let (caption_start, caption_end) = self.parse_timing(start + 1)?;

        let mut nodes = Vec::new();
        let text_start = (start + 2).min(next_block);
        for line in &self.lines[text_start..next_block] {
            if is_blank(line) {
                continue;
            }
            nodes.push(CaptionNode::Text(strip_markup(line, self.markup_rules)));
            nodes.push(CaptionNode::Break);
        }
        let nodes = normalize_nodes(nodes);

        self.position = next_block;

        if nodes.is_empty() {
            debug!("Caption block at line {} has no text, skipping", start + 1);
            return Ok(Step::Empty);
        }
        Ok(Step::Caption(Caption::new(caption_start, caption_end, nodes)))
    }

    /// Index of the first line after the block starting at `start`.
    ///
    /// A block ends at the first non-blank line following a blank one, at a
    /// track boundary in its text, or at end of input when the file has no
    /// trailing blank line.
    fn find_next_block(&self, start: usize) -> usize {
        let mut seen_blank = false;
        for (index, line) in self.lines.iter().enumerate().skip(start) {
            if is_blank(line) {
                seen_blank = true;
            } else if seen_blank || (index >= start + 2 && self.is_track_boundary(index)) {
                return index;
            }
        }
        self.lines.len()
    }

    /// Index line followed by something that looks like a timing line
    fn starts_block(&self, index: usize) -> bool {
        match (self.lines.get(index), self.lines.get(index + 1)) {
            (Some(index_line), Some(timing_line)) => {
                is_index_line(index_line) && timing_line.contains(TIMING_SEPARATOR)
            }
            _ => false,
        }
    }

    /// A marker line counts only when a new block starts right after it;
    /// otherwise it is ordinary caption text.
    fn is_track_boundary(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(|line| is_track_marker(line)) && self.starts_block(index + 1)
    }

    fn parse_timing(&self, index: usize) -> Result<(u64, u64), CaptionError> {
        let line = self.lines.get(index).copied().unwrap_or_default();
        let malformed = |reason: String| CaptionError::MalformedTiming {
            line_number: index + 1,
            line: line.to_string(),
            reason,
        };

        let parts: Vec<&str> = line.split(TIMING_SEPARATOR).collect();
        if parts.len() < 2 {
            return Err(malformed(format!("missing '{}' separator", TIMING_SEPARATOR)));
        }

        // Anything after the end stamp (e.g. X1:.. Y1:.. coordinates) is ignored
        let end_stamp = parts[1].split_whitespace().next().unwrap_or_default();
        let start = timestamp::parse(parts[0]).map_err(|e| malformed(e.to_string()))?;
        let end = timestamp::parse(end_stamp).map_err(|e| malformed(e.to_string()))?;

        if end < start {
            return Err(malformed(format!(
                "end {} precedes start {}",
                timestamp::format(end, ','),
                timestamp::format(start, ',')
            )));
        }
        Ok((start, end))
    }
}

/// Reads SubRip documents
#[derive(Debug, Clone)]
pub struct SrtReader {
    track_languages: Vec<String>,
    markup_rules: Vec<MarkupRule>,
}

impl Default for SrtReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SrtReader {
    pub fn new() -> Self {
        Self {
            track_languages: Vec::new(),
            markup_rules: FONT_COLOR_RULES.to_vec(),
        }
    }

    /// Language keys for the second and later tracks of a multi-language file.
    ///
    /// Tracks beyond this list are ignored, as is any track whose key was
    /// already used by an earlier track.
    pub fn with_track_languages(mut self, languages: Vec<String>) -> Self {
        self.track_languages = languages;
        self
    }

    /// Replace the markup substitution table applied to every text line
    pub fn with_markup_rules(mut self, rules: Vec<MarkupRule>) -> Self {
        self.markup_rules = rules;
        self
    }

    fn track_language<'a>(&'a self, track: usize, default_language: &'a str) -> Option<&'a str> {
        match track {
            0 => Some(default_language),
            n => self.track_languages.get(n - 1).map(String::as_str),
        }
    }
}

impl CaptionReader for SrtReader {
    fn detect(&self, content: &str) -> bool {
        let lines = split_lines(strip_bom(content));
        lines.len() >= 2 && is_index_line(lines[0]) && lines[1].contains(TIMING_SEPARATOR)
    }

    fn read(&self, content: &str, default_language: &str) -> Result<CaptionSet, CaptionError> {
        let mut scanner = BlockScanner::new(content, &self.markup_rules);
        let mut caption_set = CaptionSet::new();
        let mut captions = Vec::new();
        let mut track = 0;

        loop {
            match scanner.next_step()? {
                Step::Caption(caption) => captions.push(caption),
                Step::Empty => {}
                Step::TrackEnd => {
                    if let Some(language) = self.track_language(track, default_language) {
                        store_track(&mut caption_set, track, language, std::mem::take(&mut captions));
                    }
                    track += 1;
                    if self.track_language(track, default_language).is_none() {
                        warn!(
                            "Ignoring SRT track {} and later: no language configured for it",
                            track + 1
                        );
                        break;
                    }
                }
                Step::Done => break,
            }
        }

        if let Some(language) = self.track_language(track, default_language) {
            store_track(&mut caption_set, track, language, captions);
        }

        if caption_set.is_empty() {
            return Err(CaptionError::NoCaptions("empty caption file".to_string()));
        }

        Ok(caption_set)
    }
}

fn store_track(caption_set: &mut CaptionSet, track: usize, language: &str, captions: Vec<Caption>) {
    if caption_set.get_captions(language).is_some() {
        warn!(
            "Ignoring SRT track {}: language {} was already read from an earlier track",
            track + 1,
            language
        );
        return;
    }
    debug!("Read {} SRT captions for {}", captions.len(), language);
    caption_set.set_captions(language, captions);
}

/// Writes SubRip documents
#[derive(Debug, Clone, Default)]
pub struct SrtWriter;

impl SrtWriter {
    pub fn new() -> Self {
        Self
    }

    fn recreate_track(&self, captions: &[Caption]) -> String {
        let mut srt = String::new();
        let mut count = 0;

        for caption in captions {
            let text = render_nodes(&caption.nodes);
            if text.is_empty() {
                debug!("Skipping caption at {} with no renderable text", caption.format_start(','));
                continue;
            }
            count += 1;
            srt.push_str(&format!(
                "{}\n{} {} {}\n{}\n\n",
                count,
                caption.format_start(','),
                TIMING_SEPARATOR,
                caption.format_end(','),
                text
            ));
        }

        srt
    }
}

impl CaptionWriter for SrtWriter {
    fn write(&self, captions: &CaptionSet) -> String {
        let blocks: Vec<String> = captions
            .tracks()
            .iter()
            .map(|track| self.recreate_track(&track.captions))
            .filter(|block| !block.is_empty())
            .collect();

        let separator = format!("{}\n", MULTI_LANGUAGE_MARKER);
        let mut document = blocks.join(separator.as_str());
        // drop the blank separator after the final caption
        if document.ends_with("\n\n") {
            document.pop();
        }
        document
    }
}

/// Render nodes as SubRip text lines.
///
/// Text runs on one line are joined by a space and each break starts a new
/// line. Blank lines are dropped so a caption can never end its block early.
/// Leading indentation is kept on every line but the first.
fn render_nodes(nodes: &[CaptionNode]) -> String {
    let mut lines: Vec<String> = vec![String::new()];

    for node in nodes {
        match node {
            CaptionNode::Text(content) => {
                for (i, part) in content.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    let part = part.trim_end_matches('\r');
                    if part.is_empty() {
                        continue;
                    }
                    if let Some(current) = lines.last_mut() {
                        if !current.is_empty() {
                            current.push(' ');
                        }
                        current.push_str(part);
                    }
                }
            }
            CaptionNode::Break => lines.push(String::new()),
            CaptionNode::Style(_) => {}
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .filter(|line| !line.trim_start().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
