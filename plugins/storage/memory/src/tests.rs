use super::*;
use student_api::StoreErrorKind;

fn new_record(name: &str, value: &str) -> NewRecord {
    NewRecord { name: name.into(), value: value.into() }
}

#[tokio::test]
async fn insert_assigns_distinct_hex_ids() {
    let store = MemoryStore::new();
    let a = store.insert(new_record("A", "1")).await.unwrap();
    let b = store.insert(new_record("B", "2")).await.unwrap();

    assert_ne!(a, b);
    assert_eq!(a.as_str().len(), ID_WIDTH);
    assert!(a.as_str().bytes().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn find_all_keeps_insertion_order() {
    let store = MemoryStore::new();
    for i in 0..5 {
        store.insert(new_record(&format!("n{i}"), &i.to_string())).await.unwrap();
    }
    let names: Vec<String> = store.find_all().await.unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["n0", "n1", "n2", "n3", "n4"]);
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let store = MemoryStore::new();
    let id = store.insert(new_record("A", "1")).await.unwrap();

    store
        .update(RecordUpdate { id: id.clone(), name: "B".into(), value: "2".into() })
        .await
        .unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all, vec![Record { id, name: "B".into(), value: "2".into() }]);
}

#[tokio::test]
async fn update_accepts_uppercase_hex() {
    let store = MemoryStore::new();
    store.insert(new_record("A", "1")).await.unwrap();
    let id = store.insert(new_record("B", "2")).await.unwrap();
    let upper = RecordId::new(id.as_str().to_ascii_uppercase());

    store
        .update(RecordUpdate { id: upper, name: "C".into(), value: "3".into() })
        .await
        .unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all[1].name, "C");
}

#[tokio::test]
async fn missing_id_is_a_silent_noop() {
    let store = MemoryStore::new();
    store.insert(new_record("A", "1")).await.unwrap();
    let before = store.find_all().await.unwrap();
    let ghost = RecordId::new("ffffffffffffffffffffffff");

    store
        .update(RecordUpdate { id: ghost.clone(), name: "X".into(), value: "Y".into() })
        .await
        .unwrap();
    store.delete(&ghost).await.unwrap();

    assert_eq!(store.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let store = MemoryStore::new();
    let a = store.insert(new_record("A", "1")).await.unwrap();
    let b = store.insert(new_record("B", "2")).await.unwrap();

    store.delete(&a).await.unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, b);
}

#[tokio::test]
async fn malformed_ids_are_rejected() {
    let store = MemoryStore::new();
    store.insert(new_record("A", "1")).await.unwrap();

    for bad in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "0000000000000000000000001"] {
        let err = store.delete(&RecordId::new(bad)).await.unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidIdentifier, "id {bad:?}");

        let err = store
            .update(RecordUpdate { id: RecordId::new(bad), name: "X".into(), value: "Y".into() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidIdentifier, "id {bad:?}");
    }

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "A");
}

#[tokio::test]
async fn init_is_idempotent() {
    let store = MemoryStore::new();
    store.init().await.unwrap();
    store.init().await.unwrap();
}
