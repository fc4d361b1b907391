/*!
 * List detection and bullet formatting.
 *
 * Operates on each paragraph independently; paragraph boundaries from the
 * segmenter are preserved exactly. A paragraph whose sentences start with
 * enough ordinal/sequential marker words ("first", "second", "next",
 * "finally", ...) is rewritten as newline-joined bullet lines; sentences
 * without a marker fold into the preceding bullet as continuation text.
 *
 * A non-marker sentence that arrives before any bullet has started still
 * opens a bullet of its own, so no sentence is ever dropped. This makes the
 * occasional stray lead-in sentence its own bullet; that is the intended
 * trade-off, not a defect.
 */

use std::collections::HashSet;

use super::{TextStage, split_sentences};
use crate::app_config::FormattingConfig;

/// Bullet prefix for list lines
const BULLET: &str = "\u{2022} ";

/// Paragraph separator shared with the segmenter's serialized form
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Lead token of a sentence: first whitespace-delimited word, lower-cased,
/// with one trailing `, . ; :` stripped.
fn lead_token(sentence: &str) -> Option<String> {
    let first_word = sentence.split_whitespace().next()?;
    let lowered = first_word.to_lowercase();
    let stripped = lowered
        .strip_suffix([',', '.', ';', ':'])
        .unwrap_or(&lowered);
    Some(stripped.to_string())
}

/// Rewrites marker-dense paragraphs as bulleted lists
pub struct ListFormatter {
    markers: HashSet<String>,
    min_marker_sentences: usize,
}

impl ListFormatter {
    pub fn from_config(config: &FormattingConfig) -> Self {
        Self {
            markers: config
                .list_markers
                .iter()
                .map(|marker| marker.to_lowercase())
                .collect(),
            min_marker_sentences: config.min_list_markers.max(1),
        }
    }

    fn is_marker_sentence(&self, sentence: &str) -> bool {
        lead_token(sentence).is_some_and(|token| self.markers.contains(&token))
    }

    /// Format every qualifying paragraph as a bulleted list
    pub fn format_lists(&self, input: &str) -> String {
        input
            .split(PARAGRAPH_SEPARATOR)
            .map(|paragraph| self.format_paragraph(paragraph))
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR)
    }

    fn format_paragraph(&self, paragraph: &str) -> String {
        let sentences = split_sentences(paragraph);

        let marker_count = sentences
            .iter()
            .filter(|sentence| self.is_marker_sentence(sentence))
            .count();

        if marker_count < self.min_marker_sentences {
            return paragraph.to_string();
        }

        // Two states: before any bullet exists, and inside the list. A
        // marker sentence always opens a bullet; a non-marker sentence
        // continues the current bullet, or opens one when none exists yet.
        let mut lines: Vec<String> = Vec::new();
        for sentence in sentences {
            if self.is_marker_sentence(sentence) || lines.is_empty() {
                lines.push(format!("{}{}", BULLET, sentence));
            } else if let Some(current) = lines.last_mut() {
                current.push(' ');
                current.push_str(sentence);
            }
        }

        lines.join("\n")
    }
}

impl TextStage for ListFormatter {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn apply(&self, input: &str) -> String {
        self.format_lists(input)
    }
}
