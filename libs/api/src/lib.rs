pub mod error;

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

pub use error::{StoreError, StoreErrorKind};

// ════════════════════════════════════════════════════════════════
//  Record Types
// ════════════════════════════════════════════════════════════════

/// Opaque record identifier assigned by the store.
///
/// The HTTP layer never inspects it; each `RecordStore` parses it into
/// its own native key and reports `InvalidIdentifier` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted student entry as returned by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub value: String,
}

/// Payload for an insert. The store assigns the identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub value: String,
}

/// Overwrites `name` and `value` of the record with `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordUpdate {
    pub id: RecordId,
    pub name: String,
    pub value: String,
}

// ════════════════════════════════════════════════════════════════
//  Store Trait
// ════════════════════════════════════════════════════════════════

/// Backend holding the record collection. One instance per server,
/// shared by all request tasks behind an `Arc`.
///
/// Plugins: mongo (document database), memory (in-process).
pub trait RecordStore: Send + Sync {
    /// Connect and bind the collection. Idempotent and safe to call
    /// concurrently: only the first successful call connects, later
    /// calls reuse the bound handle.
    fn init(&self) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;

    /// Append a record and return the identifier the store assigned.
    fn insert(&self, record: NewRecord)
        -> Pin<Box<dyn Future<Output = Result<RecordId, StoreError>> + Send + '_>>;

    /// Overwrite `name`/`value` by identifier. Matching zero records is not an error.
    fn update(&self, update: RecordUpdate)
        -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;

    /// Remove a record by identifier. Matching zero records is not an error.
    fn delete(&self, id: &RecordId)
        -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;

    /// Every record in the store's natural iteration order.
    fn find_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>>;
}
