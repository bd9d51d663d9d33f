/*!
 * Queue Tests
 */

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use sync_containers::prelude::*;

#[test]
fn test_pop_empty_never_fails() {
    let queue: SyncQueue<String> = SyncQueue::new();
    let mut out = String::from("untouched");

    assert_eq!(queue.pop(), None);
    assert!(!queue.pop_into(&mut out));
    assert_eq!(out, "untouched");
}

#[test]
fn test_drain_into_preserves_order() {
    let source = SyncQueue::new();
    for v in [1, 2, 3] {
        source.push(v);
    }
    let destination = SyncQueue::new();

    source.drain_into(&destination);

    assert!(source.is_empty());
    let mut out = 0;
    for expected in [1, 2, 3] {
        assert!(destination.pop_into(&mut out));
        assert_eq!(out, expected);
    }
    assert!(destination.is_empty());
}

#[test]
fn test_drain_into_with_concurrent_producer() {
    let source = Arc::new(SyncQueue::new());
    let destination = Arc::new(SyncQueue::new());

    let producer = {
        let source = source.clone();
        thread::spawn(move || {
            for i in 0..10_000 {
                source.push(i);
            }
        })
    };

    let mut moved = 0;
    while !producer.is_finished() {
        moved += source.drain_into(&destination);
    }
    producer.join().unwrap();
    moved += source.drain_into(&destination);

    assert_eq!(moved, 10_000);
    assert_eq!(destination.len(), 10_000);

    // Single producer, single drainer: order is preserved end to end
    let drained: Vec<i32> = destination.drain().into_iter().collect();
    assert_eq!(drained, (0..10_000).collect::<Vec<_>>());
}

#[test]
fn test_peek_empty_is_error() {
    let queue: SyncQueue<u8> = SyncQueue::new();
    let err = queue.peek().unwrap_err();
    assert_eq!(err.operation(), Operation::Peek);
    assert!(!err.is_out_of_range());
}
