use super::*;

#[test]
fn test_span_basics() {
    let span = Span::new(4, 10);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert!(span.contains(4));
    assert!(span.contains(9));
    assert!(!span.contains(10));
    assert!(Span::DUMMY.is_empty());
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(3, 7)), "3..7");
}
