/*!
 * Serialization Tests
 */

use pretty_assertions::assert_eq;
use sync_containers::prelude::*;

#[test]
fn test_containers_serialize_as_plain_collections() {
    let array: SyncArray<u8> = vec![1, 2, 3].into();
    assert_eq!(serde_json::to_string(&array).unwrap(), "[1,2,3]");

    let queue: SyncQueue<&str> = ["a", "b"].into_iter().collect();
    assert_eq!(serde_json::to_string(&queue).unwrap(), r#"["a","b"]"#);

    let map: SyncMap<String, u8> = [("b".to_string(), 2), ("a".to_string(), 1)]
        .into_iter()
        .collect();
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_deserialize_into_fresh_instance() {
    let list: SyncList<i32> = serde_json::from_str("[3,1,2]").unwrap();
    assert_eq!(list.to_vec(), vec![3, 1, 2]);
    assert_eq!(list.pop_front(), Some(3));

    let map: SyncMap<String, bool> = serde_json::from_str(r#"{"on":true}"#).unwrap();
    assert_eq!(map.find("on"), Some(true));
}
