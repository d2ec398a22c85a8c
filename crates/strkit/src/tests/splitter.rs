use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{EmptyDelimiterError, split_adaptive};

#[rstest]
// ':' free in the input, so it is the working delimiter.
#[case("a<>b<>c", "<>", &["a", "b", "c"])]
// Input contains ':': first free alternate '|' takes over.
#[case("a::b::c", "::", &["a", "b", "c"])]
// Splitting on ':' itself still works; the substitution avoids it.
#[case("a:b:c", ":", &["a", "b", "c"])]
// Consecutive delimiters yield empty substrings, none dropped.
#[case("a<><>b", "<>", &["a", "", "b"])]
#[case("<>a<>", "<>", &["", "a", ""])]
// Delimiter absent from the input: one element.
#[case("abc", "::", &["abc"])]
// Empty input: a single empty element, matching a direct char split.
#[case("", "::", &[""])]
// All six candidates present: the first delimiter character stands in.
#[case("a:b|c^d=e/f-g##h", "##", &["a:b|c^d=e/f-g", "h"])]
fn splits_adaptively(#[case] input: &str, #[case] delimiter: &str, #[case] expected: &[&str]) {
    let parts: Vec<String> = split_adaptive(input, delimiter).unwrap();
    assert_eq!(parts, expected);
}

#[test]
fn empty_delimiter_is_rejected_before_any_work() {
    assert_eq!(split_adaptive("anything", ""), Err(EmptyDelimiterError));
}

#[test]
fn exhaustion_fallback_can_fracture_on_collisions() {
    // All candidates present and the fallback character 'x' also occurs in
    // the data: the split fractures there too. Documented last-resort
    // behavior.
    let parts = split_adaptive(":|^=/-xa xx b", "xx").unwrap();
    assert_eq!(parts, [":|^=/-", "a ", " b"]);
}
