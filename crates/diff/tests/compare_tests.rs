use pretty_assertions::assert_eq;
use text_compare::{compare, DiffMode, EditKind, EditOp, LineCol, Options, Span, TextDiff};

/// Flatten a diff into (kind, text) pairs for easy comparison
fn summary(old: &str, new: &str, options: Options) -> Vec<(EditKind, String)> {
    compare(old, new, &options)
        .changes()
        .map(|change| (change.kind, change.text().to_string()))
        .collect()
}

fn eq(text: &str) -> (EditKind, String) {
    (EditKind::Equal, text.to_string())
}

fn del(text: &str) -> (EditKind, String) {
    (EditKind::Delete, text.to_string())
}

fn ins(text: &str) -> (EditKind, String) {
    (EditKind::Insert, text.to_string())
}

#[test]
fn test_character_mode_resynchronizes_after_substitution() {
    let ops = summary("hello world", "hallo world", Options::default());
    assert_eq!(
        ops,
        vec![eq("h"), del("e"), ins("a"), eq("llo world")]
    );
}

#[test]
fn test_character_mode_resynchronizes_after_deletion() {
    let options = Options::default();
    assert_eq!(summary("abcx", "abx", options), vec![eq("ab"), del("c"), eq("x")]);
    assert_eq!(summary("hello", "helo", options), vec![eq("hel"), del("l"), eq("o")]);
    assert_eq!(
        summary("abxyzc", "abc", options),
        vec![eq("ab"), del("xyz"), eq("c")]
    );
    assert_eq!(summary("abcd", "abc", options), vec![eq("abc"), del("d")]);
}

#[test]
fn test_character_mode_favours_deletion() {
    // The old side is peeled off first, even where an insertion would be shorter
    assert_eq!(
        summary("abx", "abcx", Options::default()),
        vec![eq("ab"), del("x"), ins("cx")]
    );
}

#[test]
fn test_word_mode_does_not_resynchronize() {
    let options = Options::new().mode(DiffMode::Word);
    let ops = summary("the quick fox", "the very quick fox", options);

    // "quick" and "fox" exist on both sides but are never matched again
    assert_eq!(
        ops,
        vec![
            eq("the "),
            del("quick"),
            ins("very"),
            eq(" "),
            del("fox"),
            ins("quick fox"),
        ]
    );
}

#[test]
fn test_word_mode_substituted_word() {
    let options = Options::new().mode(DiffMode::Word);
    let ops = summary("The quick brown fox", "The quick red fox", options);
    assert_eq!(
        ops,
        vec![eq("The quick "), del("brown"), ins("red"), eq(" fox")]
    );
}

#[test]
fn test_identity() {
    let text = "Same text,\n  with  spacing.";
    for mode in [DiffMode::Character, DiffMode::Word] {
        for case_sensitive in [true, false] {
            for ignore_whitespace in [true, false] {
                let options = Options::new()
                    .mode(mode)
                    .case_sensitive(case_sensitive)
                    .ignore_whitespace(ignore_whitespace);
                let diff = compare(text, text, &options);

                assert!(!diff.has_changes());
                assert!(diff.changes().all(|change| change.kind == EditKind::Equal));
                assert_eq!(diff.reconstruct_old(), text);
                assert_eq!(diff.reconstruct_new(), text);
            }
        }
    }
}

#[test]
fn test_total_disjointness() {
    for mode in [DiffMode::Character, DiffMode::Word] {
        let options = Options::new().mode(mode);
        assert_eq!(summary("a b c", "", options), vec![del("a b c")]);
        assert_eq!(summary("", "a b c", options), vec![ins("a b c")]);
    }
}

#[test]
fn test_case_insensitive_is_all_equal() {
    for mode in [DiffMode::Character, DiffMode::Word] {
        let options = Options::new().mode(mode).case_sensitive(false);
        let diff = compare("ABC", "abc", &options);

        assert!(!diff.has_changes());
        assert_eq!(
            diff.ops(),
            &[EditOp::Equal {
                old: Span::new(0, 3),
                new: Span::new(0, 3),
            }]
        );

        let change = diff.changes().next().unwrap();
        assert_eq!(change.text(), "ABC");
        assert_eq!(change.new_text(), Some("abc"));
    }
}

#[test]
fn test_case_sensitive_reports_pairs() {
    for mode in [DiffMode::Character, DiffMode::Word] {
        let options = Options::new().mode(mode);
        assert_eq!(summary("ABC", "abc", options), vec![del("ABC"), ins("abc")]);
    }
}

#[test]
fn test_ignore_whitespace_is_all_equal() {
    for mode in [DiffMode::Character, DiffMode::Word] {
        let options = Options::new().mode(mode).ignore_whitespace(true);
        let diff = compare("a  b", "a b", &options);

        assert!(!diff.has_changes());
        assert_eq!(diff.len(), 1);

        let change = diff.changes().next().unwrap();
        assert_eq!(change.old, Some("a  b"));
        assert_eq!(change.new, Some("a b"));
    }
}

#[test]
fn test_whitespace_difference_surfaces_when_not_ignored() {
    assert_eq!(
        summary("a  b", "a b", Options::default()),
        vec![eq("a "), del(" "), eq("b")]
    );
    assert_eq!(
        summary("a  b", "a b", Options::new().mode(DiffMode::Word)),
        vec![eq("a"), del("  "), ins(" "), eq("b")]
    );
}

#[test]
fn test_ignore_whitespace_trims_ends() {
    let options = Options::new().ignore_whitespace(true);
    let diff = compare("  hello \t world\n", "hello world", &options);

    assert!(!diff.has_changes());
    assert_eq!(diff.reconstruct_old(), "  hello \t world\n");
    assert_eq!(diff.reconstruct_new(), "hello world");
}

#[test]
fn test_options_compose() {
    let options = Options::new()
        .mode(DiffMode::Word)
        .case_sensitive(false)
        .ignore_whitespace(true);
    let diff = options.compare("The   QUICK fox", " the quick\tfox ");
    assert!(!diff.has_changes());
}

#[test]
fn test_changes_keep_original_casing() {
    let options = Options::new().case_sensitive(false);
    let diff = compare("Hello World", "HELLO there", &options);

    assert_eq!(diff.reconstruct_old(), "Hello World");
    assert_eq!(diff.reconstruct_new(), "HELLO there");

    let first = diff.changes().next().unwrap();
    assert_eq!(first.kind, EditKind::Equal);
    assert_eq!(first.old, Some("Hello "));
    assert_eq!(first.new, Some("HELLO "));
}

#[test]
fn test_stats() {
    let diff = TextDiff::diff("hello world", "hallo world");
    let stats = diff.stats();

    assert_eq!(stats.equal_ops, 2);
    assert_eq!(stats.delete_ops, 1);
    assert_eq!(stats.insert_ops, 1);
    assert_eq!(stats.equal_bytes, 10);
    assert_eq!(stats.deleted_bytes, 1);
    assert_eq!(stats.inserted_bytes, 1);
    assert!(stats.has_changes());
    assert!((diff.similarity() - 10.0 / 11.0).abs() < f64::EPSILON);
}

#[test]
fn test_locations() {
    let diff = TextDiff::diff("ab\ncd", "ab\nxd");
    let locations = diff.locations();

    assert_eq!(locations.len(), 4);
    assert_eq!(locations[0].old, Some(LineCol { line: 0, column: 0 }));
    assert_eq!(locations[1].old, Some(LineCol { line: 1, column: 0 }));
    assert_eq!(locations[1].new, None);
    assert_eq!(locations[2].old, None);
    assert_eq!(locations[2].new, Some(LineCol { line: 1, column: 0 }));
    assert_eq!(locations[3].old, Some(LineCol { line: 1, column: 1 }));
    assert_eq!(locations[3].new, Some(LineCol { line: 1, column: 1 }));
}

#[test]
fn test_diff_with_mode() {
    let chars = TextDiff::diff_with_mode("cat", "cut", DiffMode::Character);
    let words = TextDiff::diff_with_mode("cat", "cut", DiffMode::Word);

    assert_eq!(chars.len(), 4);
    assert_eq!(words.len(), 2);
    assert_eq!(TextDiff::configure(), Options::default());
}

#[test]
fn test_change_tag_interop() {
    assert_eq!(similar::ChangeTag::from(EditKind::Delete), similar::ChangeTag::Delete);
    assert_eq!(EditKind::from(similar::ChangeTag::Insert), EditKind::Insert);
    assert_eq!(EditKind::Equal.to_string(), "equal");
}
