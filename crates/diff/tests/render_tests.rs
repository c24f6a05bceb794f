use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use text_compare::{DiffMode, Options, TextDiff};

#[test]
fn test_inline_character_substitution() {
    let markup = TextDiff::inline_diff("hello world", "hallo world", &Options::default());
    assert_snapshot!(markup, @"h[-e-]{+a+}llo world");
}

#[test]
fn test_inline_word_drift() {
    let options = Options::new().mode(DiffMode::Word);
    let markup = TextDiff::inline_diff("the quick fox", "the very quick fox", &options);
    assert_snapshot!(markup, @"the [-quick-]{+very+} [-fox-]{+quick fox+}");
}

#[test]
fn test_inline_ignored_case_shows_original() {
    let options = Options::new().case_sensitive(false);
    let markup = TextDiff::inline_diff("Hello World", "hello there", &options);
    assert_snapshot!(markup, @"Hello [-World-]{+there+}");
}

#[test]
fn test_inline_no_changes() {
    let options = Options::new().ignore_whitespace(true);
    let markup = TextDiff::inline_diff("a  b", "a b", &options);
    assert_snapshot!(markup, @"a  b");
}

#[test]
fn test_unified_listing() {
    let listing = TextDiff::unified_diff("hello world", "hallo world", &Options::default());
    assert_eq!(listing, " h\n-e\n+a\n llo world\n");
}

#[test]
fn test_unified_keeps_trailing_newlines() {
    let options = Options::new().mode(DiffMode::Word);
    let listing = TextDiff::unified_diff("one\n", "two\n", &options);
    assert_eq!(listing, "-one\n+two\n \n");
}

#[test]
fn test_ignored_whitespace_shows_modified_side() {
    let options = Options::new().ignore_whitespace(true);

    let markup = TextDiff::inline_diff("", "  ", &options);
    assert_eq!(markup, "  ");

    let listing = TextDiff::unified_diff("", "  ", &options);
    assert_eq!(listing, "   \n");
}
