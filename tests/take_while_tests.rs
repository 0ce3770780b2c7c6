//! Predicate-bounded sequence tests


use seqmerge::{constant, from_iter, take_while, Sequence};
use test_support::Counted;

#[test]
fn test_emits_prefix_before_first_rejection() {
    let bounded = take_while(from_iter(vec![1, 2, 3, 4, 1, 5]), |x| *x < 4);
    // The later 1 would pass again, but the gate is already closed.
    assert_eq!(bounded.collect_vec(), vec![1, 2, 3]);
}

#[test]
fn test_rejection_is_latched() {
    let mut bounded = take_while(from_iter(vec![1, 4, 2]), |x| *x < 4);
    assert_eq!(bounded.next(), Some(1));
    assert_eq!(bounded.next(), None);
    assert_eq!(bounded.next(), None);
    assert!(!bounded.has_next());
}

#[test]
fn test_closed_gate_stops_touching_the_backing_sequence() {
    let (backing, pulls) = Counted::new(vec![1, 2, 9, 3, 4]);
    let mut bounded = take_while(backing, |x| *x < 5);

    assert_eq!(bounded.next(), Some(1));
    assert_eq!(bounded.next(), Some(2));
    assert_eq!(bounded.next(), None);
    // Three pulls so far: two passes plus the discarded 9.
    assert_eq!(pulls.get(), 3);

    assert_eq!(bounded.next(), None);
    assert!(!bounded.has_next());
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_rejected_element_is_discarded() {
    let (backing, pulls) = Counted::new(vec![1, 2, 3, 9]);
    let bounded = take_while(backing, |x| *x < 5);
    assert_eq!(bounded.collect_vec(), vec![1, 2, 3]);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_backing_exhaustion_without_rejection() {
    let mut bounded = take_while(from_iter(vec![1, 2, 3]), |x| *x < 10);
    assert_eq!(bounded.next(), Some(1));
    assert_eq!(bounded.next(), Some(2));
    assert_eq!(bounded.next(), Some(3));
    assert_eq!(bounded.next(), None);
    assert!(!bounded.has_next());
}

#[test]
fn test_empty_backing_sequence() {
    let mut bounded = take_while(from_iter(Vec::<i32>::new()), |x| *x < 10);
    assert!(!bounded.has_next());
    assert_eq!(bounded.next(), None);
}

#[test]
fn test_probe_does_not_consume() {
    let mut bounded = take_while(from_iter(vec![1, 2]), |x| *x < 10);
    assert!(bounded.has_next());
    assert!(bounded.has_next());
    assert_eq!(bounded.collect_vec(), vec![1, 2]);
}

#[test]
fn test_probe_observes_the_closing_rejection() {
    let mut bounded = take_while(from_iter(vec![9, 1]), |x| *x < 5);
    assert!(!bounded.has_next());
    assert_eq!(bounded.next(), None);
}

#[test]
fn test_bounds_an_infinite_sequence() {
    let doubling = from_iter(std::iter::successors(Some(1i64), |n| Some(n * 2)));
    let bounded = take_while(doubling, |n| *n < 100);
    assert_eq!(bounded.collect_vec(), vec![1, 2, 4, 8, 16, 32, 64]);
}

#[test]
fn test_constant_sequence_closed_at_once() {
    let bounded = take_while(constant(5), |x| *x < 3);
    assert_eq!(bounded.collect_vec(), Vec::<i32>::new());
}

#[test]
fn test_constant_sequence_passing_forever() {
    let bounded = take_while(constant(2), |x| *x < 3);
    let first: Vec<i32> = bounded.into_iter().take(5).collect();
    assert_eq!(first, vec![2, 2, 2, 2, 2]);
}
