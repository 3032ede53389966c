use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_disjoint() {
    let merged = Span::new(20, 30).merge(Span::new(0, 4));
    assert_eq!(merged, Span::new(0, 30));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert!(!span.contains(7));
}

#[test]
fn test_span_from_range_saturates() {
    assert_eq!(Span::from_range(3..9), Span::new(3, 9));
    let big = u32::MAX as usize + 5;
    assert_eq!(Span::from_range(0..big).end, u32::MAX);
}

#[test]
fn test_span_display() {
    assert_eq!(format!("{}", Span::new(4, 12)), "4..12");
    assert_eq!(format!("{:?}", Span::new(4, 12)), "4..12");
}
