use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_edit_distance() {
    assert_eq!(edit_distance("lerp", "lerp"), 0);
    assert_eq!(edit_distance("lrp", "lerp"), 1);
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("", "abs"), 3);
}

#[test]
fn test_edit_distance_ignores_case() {
    assert_eq!(edit_distance("interlockedadd", "InterlockedAdd"), 0);
}

#[test]
fn test_suggest_similar() {
    let candidates = ["length", "lerp", "lit"];
    assert_eq!(
        suggest_similar("lenght", candidates.into_iter()),
        Some("length".to_string())
    );
}

#[test]
fn test_suggest_similar_no_match() {
    let candidates = ["alpha", "beta", "gamma"];
    assert_eq!(suggest_similar("xyz", candidates.into_iter()), None);
    assert_eq!(suggest_similar("", candidates.into_iter()), None);
}

#[test]
fn test_suggest_prefers_first_on_tie() {
    let candidates = ["min", "mix"];
    assert_eq!(
        suggest_similar("mi", candidates.into_iter()),
        Some("min".to_string())
    );
}

#[test]
fn test_suggest_function_over_catalog() {
    let catalog = Catalog::intrinsics().unwrap();
    assert_eq!(
        suggest_function(&catalog, "normalise"),
        Some("normalize".to_string())
    );
    assert_eq!(
        suggest_function(&catalog, "interlockedadd"),
        Some("InterlockedAdd".to_string())
    );
}
