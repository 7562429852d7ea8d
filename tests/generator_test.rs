/*!
 * Lazy Generator Tests
 * Pull-based term delivery and recurrence determinism
 */

use concord::{fibonacci, LazyGenerator};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn reference_generator() -> LazyGenerator<u64> {
    LazyGenerator::spawn((0, 0), |a, b| if *a == 0 || *b == 0 { 1 } else { a + b })
}

#[test]
fn test_first_five_terms() {
    let generator = reference_generator();
    assert_eq!(generator.take(5), vec![1, 1, 2, 3, 5]);
}

#[test]
fn test_sequence_continues_across_calls() {
    let generator = reference_generator();

    let first = generator.take(5);
    let second = generator.take(5);

    assert_eq!(first, vec![1, 1, 2, 3, 5]);
    // No restart from the seed
    assert_eq!(second, vec![8, 13, 21, 34, 55]);
}

#[test]
fn test_terms_computed_on_demand() {
    let computed = Arc::new(AtomicUsize::new(0));
    let computed_clone = Arc::clone(&computed);

    let generator = LazyGenerator::spawn((0u64, 0u64), move |_, _| {
        computed_clone.fetch_add(1, Ordering::SeqCst);
        1
    });

    // The worker runs one step ahead at most: after k requests it has
    // computed at most k + 1 terms, never the whole sequence eagerly
    generator.take(3);
    thread::sleep(Duration::from_millis(50));
    assert!(computed.load(Ordering::SeqCst) <= 4);
}

#[test]
fn test_custom_recurrence() {
    let generator = LazyGenerator::spawn((1u64, 1u64), |a, b| a + 2 * b);

    // (1,1) -> 3, (1,3) -> 7, (3,7) -> 17
    assert_eq!(generator.take(3), vec![3, 7, 17]);
}

#[test]
fn test_fibonacci_convenience() {
    assert_eq!(fibonacci(1), 1);
    assert_eq!(fibonacci(2), 1);
    assert_eq!(fibonacci(3), 2);
    assert_eq!(fibonacci(4), 3);
    assert_eq!(fibonacci(5), 5);
    assert_eq!(fibonacci(12), 144);
}

#[test]
fn test_independent_generators_do_not_share_state() {
    let a = reference_generator();
    let b = reference_generator();

    a.take(4);
    // b still starts from its own seed
    assert_eq!(b.next(), 1);
}

#[test]
fn test_drop_does_not_hang() {
    let generator = reference_generator();
    generator.take(2);
    drop(generator);
}
