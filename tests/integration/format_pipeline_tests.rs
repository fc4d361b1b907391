/*!
 * End-to-end tests for the full formatting pipeline
 */

use voxscript::app_config::FormattingConfig;
use voxscript::formatter::{TranscriptFormatter, format_transcript, sanitize};

use crate::common::{alphanumeric_signature, sample_raw_transcript};

#[test]
fn test_formatTranscript_withSequentialSentences_shouldProduceBulletList() {
    let result = format_transcript("first we start. second we build. third we ship.");
    assert_eq!(
        result,
        "• First we start.\n• Second we build.\n• Third we ship."
    );
}

#[test]
fn test_formatTranscript_withBareWords_shouldOnlyCapitalize() {
    assert_eq!(format_transcript("hello world"), "Hello world");
}

#[test]
fn test_formatTranscript_withTransitionWord_shouldBreakParagraphThere() {
    let result =
        format_transcript("it was done. However, we continued. we finished. we left.");
    assert_eq!(
        result,
        "It was done. However, we continued.\n\nWe finished. We left."
    );
}

#[test]
fn test_formatTranscript_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(format_transcript(""), "");
}

#[test]
fn test_formatTranscript_withMarkupAndList_shouldStripThenBullet() {
    let result = format_transcript("<p>first we plan. second we deliver.</p>");
    assert_eq!(result, "• First we plan.\n• Second we deliver.");
}

#[test]
fn test_formatTranscript_withRawTranscript_shouldLoseNoContent() {
    // Every word of the sanitized input survives formatting; only case,
    // punctuation, bullets, and whitespace may change.
    let raw = sample_raw_transcript();
    let plain = sanitize::strip_markup(raw);
    let formatted = format_transcript(raw);
    assert_eq!(
        alphanumeric_signature(&formatted),
        alphanumeric_signature(&plain)
    );
}

#[test]
fn test_formatTranscript_withRawTranscript_shouldPreserveSentenceOrder() {
    let formatted = format_transcript(sample_raw_transcript());
    let collect = formatted.find("collect the audio").unwrap();
    let publish = formatted.find("publish the notes").unwrap();
    let agreed = formatted.find("agreed on dates").unwrap();
    assert!(collect < publish && publish < agreed);
}

#[test]
fn test_formatter_withCustomConfig_shouldApplyItThroughPipeline() {
    let config = FormattingConfig {
        sentences_per_paragraph: 2,
        ..Default::default()
    };
    let formatter = TranscriptFormatter::from_config(&config);
    let result = formatter.format("A one. B two. C three. D four.");
    assert_eq!(result, "A one. B two.\n\nC three. D four.");
}

#[test]
fn test_formatter_calledTwiceOnSameInput_shouldBeDeterministic() {
    let formatter = TranscriptFormatter::default();
    let input = "first point here. second point there. some extra context.";
    assert_eq!(formatter.format(input), formatter.format(input));
}
