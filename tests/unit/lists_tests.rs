/*!
 * Tests for the list detector/formatter stage
 */

use voxscript::app_config::FormattingConfig;
use voxscript::formatter::lists::ListFormatter;

fn formatter() -> ListFormatter {
    ListFormatter::from_config(&FormattingConfig::default())
}

#[test]
fn test_formatLists_withTwoMarkerSentences_shouldBullet() {
    let result = formatter().format_lists("First we gather requirements. Next we write code.");
    assert_eq!(
        result,
        "• First we gather requirements.\n• Next we write code."
    );
}

#[test]
fn test_formatLists_withExactlyOneMarkerSentence_shouldNeverBullet() {
    let input = "First we gather requirements. The rest is routine. Nothing else changes.";
    assert_eq!(formatter().format_lists(input), input);
}

#[test]
fn test_formatLists_withOrdinalAndNumberWords_shouldCountBoth() {
    let result = formatter().format_lists("One buy flour. Two add water. Three knead well.");
    assert_eq!(
        result,
        "• One buy flour.\n• Two add water.\n• Three knead well."
    );
}

#[test]
fn test_formatLists_withMarkerFollowedByComma_shouldStripTrailingPunctuation() {
    let result = formatter().format_lists("Firstly, we plan. Secondly, we execute.");
    assert_eq!(result, "• Firstly, we plan.\n• Secondly, we execute.");
}

#[test]
fn test_formatLists_withContinuationSentences_shouldFoldIntoPrecedingBullet() {
    let input = "First we plan. The plan is rough. It evolves. Second we build.";
    let result = formatter().format_lists(input);
    assert_eq!(
        result,
        "• First we plan. The plan is rough. It evolves.\n• Second we build."
    );
}

#[test]
fn test_formatLists_withStrayLeadInSentence_shouldBulletItToKeepContent() {
    // Deliberate policy: a non-marker sentence before the first marker
    // becomes its own bullet rather than being dropped.
    let result = formatter().format_lists("Quick recap. First we met. Then we voted.");
    assert_eq!(
        result,
        "• Quick recap.\n• First we met.\n• Then we voted."
    );
}

#[test]
fn test_formatLists_withMixedParagraphs_shouldOnlyRewriteQualifyingOnes() {
    let input = "Nothing sequential here. Just prose. More prose.\n\n\
                 First we met. Then we voted. Finally we adjourned.\n\n\
                 Closing paragraph stands alone.";
    let result = formatter().format_lists(input);
    assert_eq!(
        result,
        "Nothing sequential here. Just prose. More prose.\n\n\
         • First we met.\n• Then we voted.\n• Finally we adjourned.\n\n\
         Closing paragraph stands alone."
    );
}

#[test]
fn test_formatLists_withMarkerMidSentence_shouldNotCount() {
    // Only the lead token is tested for membership
    let input = "We did it first. It was second nature. And third time lucky.";
    assert_eq!(formatter().format_lists(input), input);
}

#[test]
fn test_formatLists_withCustomMarkerVocabulary_shouldUseIt() {
    let config = FormattingConfig {
        list_markers: vec!["alpha".to_string(), "beta".to_string()],
        ..Default::default()
    };
    let formatter = ListFormatter::from_config(&config);
    let result = formatter.format_lists("Alpha comes in. Beta follows on.");
    assert_eq!(result, "• Alpha comes in.\n• Beta follows on.");
}

#[test]
fn test_formatLists_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(formatter().format_lists(""), "");
}
