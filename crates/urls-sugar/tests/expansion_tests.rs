//! Integration tests for url element expansion
//!
//! Covers:
//! - Mandatory-only sequences
//! - Optional groups (single, independent, nested)
//! - Constant alternatives (cartesian products)
//! - List variables and their repetition bounds
//! - Matching generated patterns against concrete paths

use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use urls_sugar::*;

#[test]
fn test_single_constant() {
    assert_eq!(expand(&[constant("home")]), vec!["^home/$"]);
}

#[test]
fn test_single_variable() {
    assert_eq!(
        expand(&[variable("id", "[0-9]+")]),
        vec!["^(?P<id>[0-9]+)/$"]
    );
}

#[test]
fn test_single_optional_structural_order() {
    assert_eq!(expand(&[optional([constant("edit")])]), vec!["^$", "^edit/$"]);
}

#[test]
fn test_single_optional_priority_order() {
    let sugar = url_sugar(vec![optional([constant("edit")])], "edit");
    assert_eq!(sugar.regexps(), vec!["^edit/$", "^$"]);
}

#[test]
fn test_mandatory_sequence_concatenates_wrapped_fragments() {
    let elements = vec![
        Constant::new("api").with_prefix("v1.").into(),
        Variable::new("user", "[a-z]+").with_suffix("@").into(),
        Constant::new("feed").with_suffix(".json").into(),
    ];
    assert_eq!(
        expand(&elements),
        vec!["^v1\\.api/(?P<user>[a-z]+)@feed\\.json$"]
    );
}

#[test]
fn test_optional_with_several_mandatory_children_yields_two() {
    let elements = vec![optional([
        constant("a"),
        constant("b"),
        variable("c", "[0-9]"),
    ])];
    assert_eq!(expand(&elements), vec!["^$", "^a/b/(?P<c>[0-9])/$"]);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
fn test_independent_optionals_yield_power_of_two(#[case] k: usize) {
    let elements: Vec<Element> = (0..k)
        .map(|i| optional([constant(format!("o{}", i))]))
        .collect();

    let regexps = expand(&elements);
    assert_eq!(regexps.len(), 1 << k);

    // One variant per subset, no duplicates
    let mut unique = regexps.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 1 << k);
}

#[test]
fn test_two_optionals_priority_order() {
    let sugar = url_sugar(
        vec![optional([constant("a")]), optional([constant("b")])],
        (),
    );
    assert_eq!(sugar.regexps(), vec!["^a/b/$", "^b/$", "^a/$", "^$"]);
}

#[rstest]
#[case(vec!["a"], vec!["x"], 1)]
#[case(vec!["a", "b"], vec!["x", "y", "z"], 6)]
#[case(vec!["a", "b", "c"], vec!["x", "y"], 6)]
fn test_constant_alternatives_cartesian_product(
    #[case] first: Vec<&str>,
    #[case] second: Vec<&str>,
    #[case] expected: usize,
) {
    let elements = vec![
        constant(first.clone()),
        variable("id", "[0-9]+"),
        constant(second.clone()),
    ];
    let regexps = expand(&elements);
    assert_eq!(regexps.len(), expected);
    assert_eq!(regexps.len(), first.len() * second.len());
}

#[test]
fn test_cartesian_product_order() {
    let elements = vec![constant(["a", "b"]), constant(["x", "y"])];
    assert_eq!(
        expand(&elements),
        vec!["^a/x/$", "^a/y/$", "^b/x/$", "^b/y/$"]
    );
}

#[test]
fn test_list_variable_bounds() {
    let ids = Variable::new("ids", "[0-9]+")
        .with_separator(",")
        .with_min(2)
        .with_max(4);
    let regexps = expand(&[ids.into()]);
    assert_eq!(regexps, vec!["^(?P<ids>[0-9]+(,[0-9]+){1,4})/$"]);
    assert!(regexps[0].contains("{1,4}"));
}

#[test]
fn test_unambiguous_variables() {
    let elements = vec![
        Variable::new("tag", "[a-z]+").unambiguous(true).into(),
        Variable::new("author", "[a-z]+").unambiguous(true).into(),
    ];
    let regexps = expand(&elements);
    assert_eq!(
        regexps,
        vec!["^tag:(?P<tag>[a-z]+)/author:(?P<author>[a-z]+)/$"]
    );

    let re = Regex::new(&regexps[0]).unwrap();
    let caps = re.captures("tag:rust/author:ferris/").unwrap();
    assert_eq!(&caps["tag"], "rust");
    assert_eq!(&caps["author"], "ferris");
}

// ============================================================================
// Generated patterns match the paths they describe
// ============================================================================

#[rstest]
#[case("archive/", true)]
#[case("archive/2024/", true)]
#[case("archive/2024/05/", true)]
#[case("archive/05/", false)]
#[case("archive/2024/5/", false)]
#[case("archives/", false)]
#[case("archive", false)]
fn test_generated_patterns_match_concrete_paths(#[case] path: &str, #[case] matches: bool) {
    let sugar = url_sugar(
        vec![
            constant("archive"),
            optional([
                variable("year", "[0-9]{4}"),
                optional([variable("month", "[0-9]{2}")]),
            ]),
        ],
        (),
    );

    let any_match = sugar
        .regexps()
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .any(|re| re.is_match(path));
    assert_eq!(any_match, matches, "path {:?}", path);
}

#[test]
fn test_every_variant_matches_its_sample_path() {
    let elements = vec![
        constant(["posts", "articles"]),
        optional([constant("by"), variable("author", "[a-z]+")]),
        Variable::new("ids", "[0-9]+")
            .with_separator("-")
            .with_max(3)
            .with_suffix("")
            .into(),
        Constant::new("export").with_prefix(".").with_suffix("").into(),
    ];

    let regexps = expand(&elements);
    assert_eq!(regexps.len(), 4);

    let samples = [
        "posts/1-2.export",
        "articles/9-9-9-9.export",
        "posts/by/ann/7.export",
        "articles/by/bob/3.export",
    ];
    for (pattern, sample) in regexps.iter().zip(samples) {
        let re = Regex::new(pattern).unwrap();
        assert!(re.is_match(sample), "{} should match {}", pattern, sample);
    }
}

#[test]
fn test_list_variable_captures_whole_list() {
    let regexps = expand(&[Variable::new("ids", "[0-9]+").with_separator(",").into()]);
    let re = Regex::new(&regexps[0]).unwrap();
    let caps = re.captures("1,22,333/").unwrap();
    assert_eq!(&caps["ids"], "1,22,333");
    // The inner repetition group only keeps the last instance
    assert_eq!(caps.get(2).map(|m| m.as_str()), Some(",333"));
}
