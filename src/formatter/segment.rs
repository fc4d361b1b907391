/*!
 * Paragraph segmentation.
 *
 * Splits normalized text into a sentence sequence and accumulates sentences
 * into paragraphs. A paragraph is flushed when the buffer reaches the
 * configured sentence count (the counter resets on every flush) or when the
 * current sentence contains a transition marker ("However", "Moreover",
 * "Furthermore", "In conclusion" by default) anywhere in its text.
 *
 * Paragraphs are space-joined sentences, separated by a blank line in the
 * serialized output.
 */

use super::{TextStage, split_sentences};
use crate::app_config::FormattingConfig;

/// Groups sentences into paragraphs
pub struct ParagraphSegmenter {
    sentences_per_paragraph: usize,
    transition_markers: Vec<String>,
}

impl ParagraphSegmenter {
    pub fn from_config(config: &FormattingConfig) -> Self {
        Self {
            sentences_per_paragraph: config.sentences_per_paragraph.max(1),
            transition_markers: config.transition_markers.clone(),
        }
    }

    /// Case-sensitive substring match, anywhere in the sentence
    fn is_transition(&self, sentence: &str) -> bool {
        self.transition_markers
            .iter()
            .any(|marker| sentence.contains(marker.as_str()))
    }

    /// Segment text into paragraphs joined by blank lines
    pub fn segment(&self, input: &str) -> String {
        let mut paragraphs: Vec<String> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();

        for sentence in split_sentences(input) {
            buffer.push(sentence);

            if buffer.len() >= self.sentences_per_paragraph || self.is_transition(sentence) {
                paragraphs.push(buffer.join(" "));
                buffer.clear();
            }
        }

        if !buffer.is_empty() {
            paragraphs.push(buffer.join(" "));
        }

        paragraphs.join("\n\n")
    }
}

impl TextStage for ParagraphSegmenter {
    fn name(&self) -> &'static str {
        "segment"
    }

    fn apply(&self, input: &str) -> String {
        self.segment(input)
    }
}
