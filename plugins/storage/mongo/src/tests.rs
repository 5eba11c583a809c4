use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;
use student_api::StoreErrorKind;

#[test]
fn parse_id_accepts_object_id_hex() {
    let oid = ObjectId::new();
    let parsed = parse_id(&RecordId::new(oid.to_hex())).unwrap();
    assert_eq!(parsed, oid);
}

#[test]
fn parse_id_rejects_malformed() {
    for bad in ["", "not-an-id", "65f1c0ffee", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
        let err = parse_id(&RecordId::new(bad)).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidIdentifier, "id {bad:?}");
    }
}

#[test]
fn document_with_object_id_maps_to_hex() {
    let oid = ObjectId::new();
    let doc = doc! { "_id": oid, "name": "Ada", "value": "42" };
    let record = record_from_document(&doc);
    assert_eq!(record.id.as_str(), oid.to_hex());
    assert_eq!(record.name, "Ada");
    assert_eq!(record.value, "42");
}

#[test]
fn document_with_missing_or_foreign_fields_is_rendered() {
    let doc = doc! { "_id": "custom-key", "value": 7_i32 };
    let record = record_from_document(&doc);
    assert_eq!(record.id.as_str(), "custom-key");
    assert_eq!(record.name, "");
    assert_eq!(record.value, "7");
}

#[test]
fn config_defaults_point_at_local_students_collection() {
    let cfg = MongoStoreConfig::default();
    assert_eq!(cfg.uri, "mongodb://127.0.0.1:27017/clg");
    assert_eq!(cfg.database, None);
    assert_eq!(cfg.collection, "students");
}

#[tokio::test]
async fn malformed_id_fails_before_connecting() {
    // Nothing listens on port 1; a connection attempt would be Unavailable.
    let store = MongoStore::new(MongoStoreConfig {
        uri: "mongodb://127.0.0.1:1/clg?serverSelectionTimeoutMS=200".into(),
        ..Default::default()
    });
    let err = store.delete(&RecordId::new("bogus")).await.unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidIdentifier);

    let err = store
        .update(RecordUpdate { id: RecordId::new("bogus"), name: "a".into(), value: "b".into() })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidIdentifier);
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let store = MongoStore::new(MongoStoreConfig {
        uri: "mongodb://127.0.0.1:1/clg?serverSelectionTimeoutMS=200".into(),
        ..Default::default()
    });
    let err = store.init().await.unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Unavailable);
}

// ============================================================
// CONNECTOR
// ============================================================

/// Connector whose connect routine counts attempts and fails the first
/// `failures` of them.
fn counting_connector(failures: usize) -> (Connector<usize>, Arc<AtomicUsize>) {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let connector = Connector::new(move || -> ConnectFuture<usize> {
        let counter = counter.clone();
        Box::pin(async move {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::time::sleep(Duration::from_millis(20)).await;
            if n <= failures {
                Err(StoreError::unavailable(format!("attempt {n} refused")))
            } else {
                Ok(n)
            }
        })
    });
    (connector, attempts)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_calls_share_one_connect() {
    let (connector, attempts) = counting_connector(0);

    let results = futures::future::join_all((0..16).map(|_| connector.ensure_connected())).await;

    for result in results {
        assert_eq!(*result.unwrap(), 1);
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 1);

    connector.ensure_connected().await.unwrap();
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_connect_is_retried_by_next_call() {
    let (connector, attempts) = counting_connector(1);

    let err = connector.ensure_connected().await.unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Unavailable);
    assert_eq!(attempts.load(Ordering::SeqCst), 1);

    assert_eq!(*connector.ensure_connected().await.unwrap(), 2);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);

    // Bound now; no further attempts.
    assert_eq!(*connector.ensure_connected().await.unwrap(), 2);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}
