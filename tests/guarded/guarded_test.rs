/*!
 * Guarded Core Tests
 *
 * The shared skeleton behaves the same behind every container shape
 */

use std::sync::Arc;
use std::thread;
use sync_containers::core::guard::{Backing, Guarded};
use sync_containers::prelude::*;
use sync_containers::try_init_tracing;

fn fill_and_clear<S>(container: &S, fill: impl Fn(&S))
where
    S: Synchronized,
{
    assert!(container.is_empty());
    fill(container);
    let len = container.len();
    assert!(len > 0);
    assert_eq!(container.clear(), len);
    assert!(container.is_empty());
}

#[test]
fn test_common_contract_across_shapes() {
    try_init_tracing();

    fill_and_clear(&SyncList::new(), |l| l.push_back(1));
    fill_and_clear(&SyncQueue::new(), |q| q.push(1));
    fill_and_clear(&SyncArray::new(), |a| a.push_back(1));
    fill_and_clear(&SyncMap::new(), |m| {
        m.insert(1, 1);
    });
}

#[test]
fn test_scoped_access_blocks_other_threads() {
    let guarded = Arc::new(Guarded::new(Vec::new()));

    let mut access = guarded.lock();
    let writer = {
        let guarded = guarded.clone();
        thread::spawn(move || guarded.with_mut(|v| v.push("writer")))
    };

    // The writer cannot get in while we hold the lock
    thread::sleep(std::time::Duration::from_millis(20));
    access.push("holder");
    drop(access);

    writer.join().unwrap();
    assert_eq!(guarded.snapshot(), vec!["holder", "writer"]);
}

#[test]
fn test_into_inner_and_get_mut() {
    let mut guarded = Guarded::labeled(vec![1, 2], "owned");
    guarded.get_mut().push(3);
    assert_eq!(guarded.epoch(), 1);
    assert_eq!(Backing::len(&guarded.into_inner()), 3);
}

#[test]
fn test_label_flows_from_config() {
    let queue: SyncQueue<u8> = SyncQueue::with_config(ContainerConfig::named("inbox"));
    let list: SyncList<u8> = SyncList::with_config(ContainerConfig::default());

    assert_eq!(queue.label(), "inbox");
    assert_eq!(list.label(), "container");
    assert_eq!(SyncMap::<u8, u8>::new().label(), "map");
}
