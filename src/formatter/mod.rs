/*!
 * Transcript formatting pipeline.
 *
 * The pipeline processes a finalized transcript snapshot through four stages:
 * 1. **Sanitize**: Strip live-caption markup down to plain text
 * 2. **Punctuate**: Repair capitalization and punctuation spacing
 * 3. **Segment**: Group sentences into paragraphs
 * 4. **Lists**: Rewrite ordinal/sequential paragraphs as bulleted lists
 *
 * Each stage is a pure `&str -> String` transform; the runner folds the input
 * through them in order. There is no streaming and no state between calls:
 * every invocation formats one complete snapshot.
 */

pub mod lists;
pub mod punctuate;
pub mod sanitize;
pub mod segment;

// Re-export types used externally
pub use lists::ListFormatter;
pub use punctuate::PunctuationNormalizer;
pub use sanitize::MarkupSanitizer;
pub use segment::ParagraphSegmenter;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::FormattingConfig;

/// Sentence boundary: terminal punctuation followed by whitespace.
/// The punctuation mark stays with the preceding sentence; the whitespace
/// is consumed by the split.
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence boundary regex"));

/// Split text into sentences on terminal punctuation followed by whitespace.
///
/// Shared by the segmenter and the list formatter so both stages agree on
/// what a sentence is. Text ending exactly at a boundary yields no trailing
/// empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
        // The terminal mark is a single byte; keep it on the sentence.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// A single pure text transform in the formatting pipeline.
pub trait TextStage {
    /// Stage name, used for tracing
    fn name(&self) -> &'static str;

    /// Apply the transform. Total over any input; never fails.
    fn apply(&self, input: &str) -> String;
}

/// The transcript formatting pipeline, built once from configuration and
/// reusable across calls. Holds no per-call state; `format` is reentrant.
pub struct TranscriptFormatter {
    stages: Vec<Box<dyn TextStage + Send + Sync>>,
}

impl TranscriptFormatter {
    /// Build the standard four-stage pipeline from formatting configuration
    pub fn from_config(config: &FormattingConfig) -> Self {
        let stages: Vec<Box<dyn TextStage + Send + Sync>> = vec![
            Box::new(MarkupSanitizer),
            Box::new(PunctuationNormalizer),
            Box::new(ParagraphSegmenter::from_config(config)),
            Box::new(ListFormatter::from_config(config)),
        ];
        Self { stages }
    }

    /// Run the full pipeline on one transcript snapshot
    pub fn format(&self, transcript: &str) -> String {
        if transcript.is_empty() {
            return String::new();
        }

        let mut text = transcript.to_string();
        for stage in &self.stages {
            let output = stage.apply(&text);
            debug!(
                "Stage {}: {} chars in, {} chars out",
                stage.name(),
                text.len(),
                output.len()
            );
            text = output;
        }
        text
    }
}

impl Default for TranscriptFormatter {
    fn default() -> Self {
        Self::from_config(&FormattingConfig::default())
    }
}

/// Format a transcript with the default configuration
pub fn format_transcript(transcript: &str) -> String {
    TranscriptFormatter::default().format(transcript)
}
