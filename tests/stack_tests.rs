use indexed_vec::IndexedVec;

fn three_chars() -> IndexedVec<&'static str> {
    let mut v = IndexedVec::with_capacity(3);
    v.push("char1");
    v.push("char2");
    v.push("char3");
    v
}

#[test]
fn test_pop_returns_last() {
    let mut v = three_chars();

    assert_eq!(v.pop(), Some("char3"));
    assert_eq!(v.len(), 2);
}

#[test]
fn test_push_beyond_capacity() {
    let mut v = three_chars();
    assert_eq!(v.capacity(), 3);

    v.push("char4");
    assert_eq!(v.len(), 4);
    assert_eq!(v.capacity(), 6);

    assert_eq!(v.pop(), Some("char4"));
    assert_eq!(v.len(), 3);
}

#[test]
fn test_pop_empty_vector() {
    let mut v = IndexedVec::<u8>::new();
    assert_eq!(v.pop(), None); // Should return None
    assert_eq!(v.len(), 0);
}

#[test]
fn test_pop_drains_in_lifo_order() {
    let mut v = IndexedVec::new();
    for i in 0..20 {
        v.push(i);
    }

    let mut popped = Vec::new();
    while let Some(value) = v.pop() {
        popped.push(value);
    }

    assert_eq!(popped, (0..20).rev().collect::<Vec<_>>());
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 32);
}

#[test]
fn test_push_then_pop_restores_length() {
    let mut v = IndexedVec::from_sequence(vec![1, 2, 3]);
    let before = v.to_sequence();

    v.push(99);
    assert_eq!(v.pop(), Some(99));

    assert_eq!(v.len(), 3);
    assert_eq!(v.to_sequence(), before);
}

#[test]
fn test_pop_hole_shortens_vector() {
    let mut v = IndexedVec::from_sequence(["a", "b"]);
    v.unset(1);

    assert_eq!(v.pop(), None);
    assert_eq!(v.len(), 1);
    assert_eq!(v.pop(), Some("a"));
    assert!(v.is_empty());
}

#[test]
fn test_push_after_clear_reuses_capacity() {
    let mut v = IndexedVec::with_capacity(4);
    v.push(1);
    v.push(2);
    v.clear();

    assert!(v.is_empty());
    assert_eq!(v.capacity(), 4);

    v.push(3);
    assert_eq!(v.get(0), Some(&3));
    assert_eq!(v.get(1), None);
    assert_eq!(v.buffer().reallocations(), 0);
}

#[test]
fn test_first_and_last() {
    let mut v = IndexedVec::new();
    assert_eq!(v.first(), None);
    assert_eq!(v.last(), None);

    v.push("bottom");
    v.push("top");

    assert_eq!(v.first(), Some(&"bottom"));
    assert_eq!(v.last(), Some(&"top"));
}
