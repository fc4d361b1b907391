/*!
 * Markup sanitization for raw transcripts.
 *
 * Live captioning wraps interim (not yet finalized) recognized words in
 * `<span>`-style markup; a user-edited transcript may carry further stray
 * tags. This stage parses the input as an HTML fragment and concatenates its
 * text nodes, matching what a browser's `textContent` extraction returns:
 * tags removed, entities decoded, text whitespace preserved.
 */

use scraper::Html;

use super::TextStage;

/// Strip markup from text, returning the concatenated text nodes.
///
/// Total over any input: malformed markup degrades to whatever plain text
/// remains extractable, tag-free input passes through, empty input yields
/// empty output.
pub fn strip_markup(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(input);
    fragment.root_element().text().collect()
}

/// Pipeline stage wrapper around [`strip_markup`]
pub struct MarkupSanitizer;

impl TextStage for MarkupSanitizer {
    fn name(&self) -> &'static str {
        "sanitize"
    }

    fn apply(&self, input: &str) -> String {
        strip_markup(input)
    }
}
