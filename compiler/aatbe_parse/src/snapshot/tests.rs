use super::*;

#[test]
fn snapshot_is_one_word() {
    assert_eq!(std::mem::size_of::<ParserSnapshot>(), std::mem::size_of::<usize>());
}

#[test]
fn snapshots_order_by_position() {
    let early = ParserSnapshot::new(3);
    let late = ParserSnapshot::new(7);
    assert!(early < late);
    assert_eq!(early.max(late).position(), 7);

    let copy = early;
    assert_eq!(copy, early);
}
