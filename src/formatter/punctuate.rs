/*!
 * Punctuation and capitalization repair for recognizer output.
 *
 * Speech recognizers emit long runs of lowercase words with little or no
 * punctuation. This stage applies four ordered rewrites:
 * 1. Capitalize the letter at start of text or after `[.!?]` + whitespace
 * 2. Insert a space after `. ! ? , ; :` when a letter follows directly
 * 3. Remove whitespace directly before `. ! ? , ; :`
 * 4. Synthesize sentence breaks: a letter followed by whitespace and an
 *    uppercase letter gains a period before the space
 *
 * Rule 4 is a heuristic, not a grammar: it cannot tell a genuine sentence
 * boundary from a capitalized proper noun mid-sentence ("met John yesterday"
 * becomes "met. John yesterday"). This imprecision is a known property of the
 * stage and is kept as-is.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::TextStage;

/// Lowercase letter at start of text or after a sentence end
static SENTENCE_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[.!?]\s+)([a-z])").expect("Invalid sentence start regex"));

/// Punctuation mark glued to the following letter
static MISSING_SPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?,;:])([A-Za-z])").expect("Invalid missing space regex"));

/// Whitespace glued to the front of a punctuation mark
static SPACE_BEFORE_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.!?,;:])").expect("Invalid pre-punctuation regex"));

/// Letter, whitespace, uppercase letter: a missing sentence break
static MISSING_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z])\s+([A-Z])").expect("Invalid missing break regex"));

/// Normalize punctuation and capitalization in plain transcript text.
pub fn normalize(input: &str) -> String {
    let text = SENTENCE_START_REGEX.replace_all(input, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });

    let text = MISSING_SPACE_REGEX.replace_all(&text, "${1} ${2}");

    let text = SPACE_BEFORE_PUNCT_REGEX.replace_all(&text, "${1}");

    synthesize_breaks(&text)
}

/// Insert a period wherever a letter is followed by whitespace and an
/// uppercase letter.
///
/// The rewrite consumes the uppercase letter, so chained sites ("a B C")
/// need another pass; each inserted period removes its site and creates no
/// new ones, so re-applying until nothing matches reaches the same result as
/// a single lookahead pass and always terminates.
fn synthesize_breaks(input: &str) -> String {
    let mut text = input.to_string();
    while MISSING_BREAK_REGEX.is_match(&text) {
        text = MISSING_BREAK_REGEX.replace_all(&text, "${1}. ${2}").into_owned();
    }
    text
}

/// Pipeline stage wrapper around [`normalize`]
pub struct PunctuationNormalizer;

impl TextStage for PunctuationNormalizer {
    fn name(&self) -> &'static str {
        "punctuate"
    }

    fn apply(&self, input: &str) -> String {
        normalize(input)
    }
}
