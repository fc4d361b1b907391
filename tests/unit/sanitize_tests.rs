/*!
 * Tests for the markup sanitizer stage
 */

use voxscript::formatter::sanitize::strip_markup;

#[test]
fn test_stripMarkup_withLiveCaptionMarkup_shouldYieldPlainText() {
    let input = r#"we talked about budgets <span class="interim">and timelines</span>"#;
    assert_eq!(strip_markup(input), "we talked about budgets and timelines");
}

#[test]
fn test_stripMarkup_withDeeplyNestedMarkup_shouldKeepAllTextNodes() {
    let input = "<div><p>alpha <em>beta <strong>gamma</strong></em></p> delta</div>";
    assert_eq!(strip_markup(input), "alpha beta gamma delta");
}

#[test]
fn test_stripMarkup_withAttributesAndSelfClosingTags_shouldDropThem() {
    let input = r#"before<br/>after <img src="x.png"> end"#;
    assert_eq!(strip_markup(input), "beforeafter  end");
}

#[test]
fn test_stripMarkup_withMalformedNesting_shouldNotFail() {
    let input = "<b><i>crossed</b></i> tags";
    assert_eq!(strip_markup(input), "crossed tags");
}

#[test]
fn test_stripMarkup_appliedTwice_shouldEqualSingleApplication() {
    // Idempotence over markup-bearing input
    let inputs = [
        "<span>one</span> two",
        "<div><p>three</p><p>four</p></div>",
        "plain words only",
    ];
    for input in inputs {
        let once = strip_markup(input);
        assert_eq!(strip_markup(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_stripMarkup_withEmptyString_shouldReturnEmpty() {
    assert_eq!(strip_markup(""), "");
}

#[test]
fn test_stripMarkup_withOnlyTags_shouldReturnEmpty() {
    assert_eq!(strip_markup("<div><span></span></div>"), "");
}
