/*!
 * Concurrency Stress Tests
 *
 * Many threads hammering one instance; element accounting must balance
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use sync_containers::prelude::*;

const THREADS: usize = 8;
const PER_THREAD: usize = 2_000;

#[test]
fn test_array_concurrent_push_back() {
    let array = Arc::new(SyncArray::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let array = array.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    array.push_back(t * PER_THREAD + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(array.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    array.for_each(|v| {
        assert!(seen.insert(*v), "duplicate value {}", v);
    });
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn test_queue_producers_and_consumers_balance() {
    let queue = Arc::new(SyncQueue::new());
    let popped = Arc::new(AtomicUsize::new(0));
    let producers_done = Arc::new(AtomicUsize::new(0));

    let producers: Vec<_> = (0..THREADS / 2)
        .map(|t| {
            let queue = queue.clone();
            let producers_done = producers_done.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    queue.push(t * PER_THREAD + i);
                }
                producers_done.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    let consumers: Vec<_> = (0..THREADS / 2)
        .map(|_| {
            let queue = queue.clone();
            let popped = popped.clone();
            let producers_done = producers_done.clone();
            thread::spawn(move || {
                let mut mine = Vec::new();
                loop {
                    match queue.pop() {
                        Some(v) => mine.push(v),
                        None if producers_done.load(Ordering::SeqCst) == THREADS / 2 => break,
                        None => thread::yield_now(),
                    }
                }
                popped.fetch_add(mine.len(), Ordering::SeqCst);
                mine
            })
        })
        .collect();

    for handle in producers {
        handle.join().unwrap();
    }

    let mut all = HashSet::new();
    for handle in consumers {
        for v in handle.join().unwrap() {
            assert!(all.insert(v), "value {} popped twice", v);
        }
    }

    // Anything the consumers missed after the last check is still queued
    let pushed = (THREADS / 2) * PER_THREAD;
    assert_eq!(popped.load(Ordering::SeqCst) + queue.len(), pushed);
}

#[test]
fn test_list_mixed_operations_balance() {
    let list = Arc::new(SyncList::new());
    let inserts = Arc::new(AtomicUsize::new(0));
    let removes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let list = list.clone();
            let inserts = inserts.clone();
            let removes = removes.clone();
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(t as u64);
                for i in 0..PER_THREAD {
                    match rng.gen_range(0..4) {
                        0 => {
                            list.push_front(i);
                            inserts.fetch_add(1, Ordering::SeqCst);
                        }
                        1 => {
                            list.push_back(i);
                            inserts.fetch_add(1, Ordering::SeqCst);
                        }
                        2 => {
                            if list.pop_front().is_some() {
                                removes.fetch_add(1, Ordering::SeqCst);
                            }
                        }
                        _ => {
                            // Positions go stale under contention; only
                            // successful erases count
                            if let Some(pos) = list.position_where(|v| v % 2 == 0) {
                                if list.erase_at(pos).is_ok() {
                                    removes.fetch_add(1, Ordering::SeqCst);
                                }
                            }
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        list.len(),
        inserts.load(Ordering::SeqCst) - removes.load(Ordering::SeqCst)
    );
}

#[test]
fn test_map_disjoint_keys_and_erase() {
    let map = Arc::new(SyncMap::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = map.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    assert!(map.insert((t, i), i));
                }
                for i in (0..PER_THREAD).step_by(2) {
                    assert_eq!(map.erase(&(t, i)), Some(i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), THREADS * PER_THREAD / 2);
    assert_eq!(map.find(&(0, 1)), Some(1));
    assert_eq!(map.find(&(0, 0)), None);
}

#[test]
fn test_clone_while_writers_run() {
    let array = Arc::new(SyncArray::new());

    let writer = {
        let array = array.clone();
        thread::spawn(move || {
            for i in 0..PER_THREAD {
                array.push_back(i);
            }
        })
    };

    // Every clone is a consistent prefix of the final contents
    for _ in 0..50 {
        let copy = (*array).clone();
        let snapshot = copy.snapshot();
        assert!(snapshot.iter().copied().eq(0..snapshot.len()));
    }

    writer.join().unwrap();
    assert_eq!(array.len(), PER_THREAD);
}
