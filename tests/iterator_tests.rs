use indexed_vec::IndexedVec;

#[test]
fn test_iterator_empty_vector() {
    let v = IndexedVec::<u8>::new();

    let mut iter = v.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_iterator_populated_vector() {
    let v = IndexedVec::from_sequence(["hello", "world", "test"]);

    let mut iter = v.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(Some(&"hello")));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    assert_eq!(iter.next(), Some(Some(&"world")));
    assert_eq!(iter.size_hint(), (1, Some(1)));

    assert_eq!(iter.next(), Some(Some(&"test")));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_reports_holes() {
    let mut v = IndexedVec::from_sequence([1, 2, 3]);
    v.unset(1);

    let collected: Vec<_> = v.iter().collect();
    assert_eq!(collected, vec![Some(&1), None, Some(&3)]);
}

#[test]
fn test_iterator_stops_at_length() {
    let mut v = IndexedVec::with_capacity(16);
    v.push('a');
    v.push('b');

    assert_eq!(v.iter().count(), 2);
    assert_eq!(v.values().count(), 2);
}

#[test]
fn test_reverse_iteration() {
    let v = IndexedVec::from_sequence([1, 2, 3]);

    let collected: Vec<_> = v.iter().rev().flatten().copied().collect();
    assert_eq!(collected, vec![3, 2, 1]);
}

#[test]
fn test_for_loop_over_reference() {
    let v = IndexedVec::from_sequence(["a", "b"]);

    let mut seen = Vec::new();
    for slot in &v {
        seen.push(slot.copied());
    }
    assert_eq!(seen, vec![Some("a"), Some("b")]);
}

#[test]
fn test_into_iter_moves_slots() {
    let mut v = IndexedVec::with_capacity(8);
    v.push(String::from("a"));
    v.push(String::from("b"));
    v.push(String::from("c"));
    v.unset(0);
    v.pop();

    let collected: Vec<_> = v.into_iter().collect();
    assert_eq!(collected, vec![None, Some(String::from("b"))]);
}

#[test]
fn test_iterator_clone_is_independent() {
    let v = IndexedVec::from_sequence([1, 2]);

    let mut first = v.iter();
    first.next();
    let mut second = first.clone();

    assert_eq!(first.next(), Some(Some(&2)));
    assert_eq!(second.next(), Some(Some(&2)));
}

#[test]
fn test_cursor_walks_live_slots() {
    let mut v = IndexedVec::with_capacity(8);
    v.push(10);
    v.push(20);
    v.push(30);
    v.pop();

    let mut cursor = v.cursor();
    let mut seen = Vec::new();
    while cursor.is_valid() {
        seen.push(cursor.current().copied());
        cursor.advance();
    }

    assert_eq!(seen, vec![Some(10), Some(20)]);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_cursor_reset_restarts() {
    let v = IndexedVec::from_sequence(["x", "y"]);
    let mut cursor = v.cursor();

    cursor.advance();
    assert_eq!(cursor.current(), Some(&"y"));

    cursor.reset();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current(), Some(&"x"));
}

#[test]
fn test_cursors_are_independent() {
    let v = IndexedVec::from_sequence([1, 2, 3]);
    let mut outer = v.cursor();
    let mut pairs = Vec::new();

    while outer.is_valid() {
        let mut inner = v.cursor();
        while inner.is_valid() {
            pairs.push((outer.position(), inner.position()));
            inner.advance();
        }
        outer.advance();
    }

    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[4], (1, 1));
}

#[test]
fn test_cursor_on_hole() {
    let mut v = IndexedVec::from_sequence([1, 2]);
    v.unset(0);

    let cursor = v.cursor();
    assert!(cursor.is_valid());
    assert_eq!(cursor.current(), None);
}
