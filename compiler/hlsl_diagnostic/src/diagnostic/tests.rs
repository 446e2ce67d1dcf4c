use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("no overload of `max` accepts (float3, int)")
        .with_label(Span::new(0, 5), "here")
        .with_note("candidate: float max(float x, float y)")
        .with_suggestion("convert the arguments explicitly");

    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 5)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_later_label_replaces_earlier() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_label(Span::new(0, 3), "first")
        .with_label(Span::new(10, 15), "call");

    assert_eq!(
        diag.label,
        Some(Label {
            span: Span::new(10, 15),
            message: "call".to_string(),
        })
    );
}

#[test]
fn test_unlabelled_has_no_span() {
    assert_eq!(Diagnostic::error(ErrorCode::E2001).primary_span(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown function `maxx`")
        .with_label(Span::new(0, 4), "not an intrinsic")
        .with_suggestion("did you mean `max`?");

    assert_eq!(
        diag.to_string(),
        "error [E2001]: unknown function `maxx`\n  --> 0..4: not an intrinsic\n  = help: did you mean `max`?"
    );
}

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E2001.to_string(), "E2001");
    assert_eq!(ErrorCode::E2003.as_str(), "E2003");
}
