use super::*;
use crate::resolve;
use hlsl_types::Type;
use pretty_assertions::assert_eq;

fn catalog() -> Catalog {
    Catalog::intrinsics().unwrap()
}

#[test]
fn test_resolved_has_no_diagnostic() {
    let catalog = catalog();
    let args = [Argument::input(Type::FLOAT), Argument::input(Type::FLOAT)];
    let resolution = resolve(&catalog, "max", &args);
    assert_eq!(
        resolution.diagnostic(&catalog, "max", &args, Span::new(0, 3)),
        None
    );
}

#[test]
fn test_unknown_function_suggests_name() {
    let catalog = catalog();
    let args = [Argument::input(Type::FLOAT3)];
    let resolution = resolve(&catalog, "normalise", &args);
    let diag = resolution
        .diagnostic(&catalog, "normalise", &args, Span::new(4, 13))
        .unwrap();

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "unknown function `normalise`");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 13)));
    assert_eq!(diag.suggestions, vec!["did you mean `normalize`?".to_string()]);
}

#[test]
fn test_arity_mismatch_message() {
    let catalog = catalog();
    let args = [Argument::input(Type::INT)];
    let resolution = resolve(&catalog, "InterlockedAdd", &args);
    let diag = resolution
        .diagnostic(&catalog, "InterlockedAdd", &args, Span::DUMMY)
        .unwrap();

    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(
        diag.message,
        "`InterlockedAdd` takes 2 or 3 arguments but 1 supplied"
    );
    assert_eq!(diag.notes.len(), 4);
}

#[test]
fn test_no_applicable_lists_same_arity_candidates() {
    let catalog = catalog();
    let args = [Argument::input(Type::FLOAT2), Argument::input(Type::FLOAT3)];
    let resolution = resolve(&catalog, "max", &args);
    let diag = resolution
        .diagnostic(&catalog, "max", &args, Span::DUMMY)
        .unwrap();

    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.message, "no overload of `max` accepts (float2, float3)");
    assert_eq!(diag.notes.len(), 8);
    assert_eq!(diag.notes[0], "candidate: float max(float x, float y)");
}

#[test]
fn test_candidate_notes_are_capped() {
    let catalog = catalog();
    let args = [Argument::input(Type::FLOAT2X2)];
    let resolution = resolve(&catalog, "abs", &args);
    let diag = resolution
        .diagnostic(&catalog, "abs", &args, Span::DUMMY)
        .unwrap();

    assert_eq!(diag.notes.len(), MAX_CANDIDATE_NOTES + 1);
    assert_eq!(diag.notes.last().unwrap(), "and 8 more candidates");
}

#[test]
fn test_join_arities() {
    assert_eq!(join_arities(&[1]), "1");
    assert_eq!(join_arities(&[2, 3]), "2 or 3");
    assert_eq!(join_arities(&[1, 2, 4]), "1, 2 or 4");
}
