use std::future::Future;
use std::pin::Pin;

use tokio::sync::RwLock;

use student_api::{NewRecord, Record, RecordId, RecordStore, RecordUpdate, StoreError};

/// Identifiers are 24 lowercase hex digits, the same width as a
/// document-store object id, so forms behave identically on both backends.
const ID_WIDTH: usize = 24;

// ═══════════════════════════════════════════════════════════════
//  MemoryStore
// ═══════════════════════════════════════════════════════════════

struct Inner {
    records: Vec<(u128, Record)>,
    next_id: u128,
}

/// In-process record store. Insertion order is the natural order.
/// Nothing survives a restart.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

fn parse_id(id: &RecordId) -> Result<u128, StoreError> {
    let s = id.as_str();
    if s.len() != ID_WIDTH || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StoreError::invalid_identifier(format!(
            "'{s}' is not a {ID_WIDTH}-digit hex identifier"
        )));
    }
    u128::from_str_radix(s, 16).map_err(|e| StoreError::invalid_identifier(format!("'{s}': {e}")))
}

fn format_id(n: u128) -> RecordId {
    RecordId::new(format!("{n:0width$x}", width = ID_WIDTH))
}

impl RecordStore for MemoryStore {
    fn init(&self) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async { Ok(()) })
    }

    fn insert(
        &self,
        record: NewRecord,
    ) -> Pin<Box<dyn Future<Output = Result<RecordId, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let key = inner.next_id;
            inner.next_id += 1;
            let id = format_id(key);
            inner.records.push((
                key,
                Record {
                    id: id.clone(),
                    name: record.name,
                    value: record.value,
                },
            ));
            tracing::debug!(id = %id, "inserted record");
            Ok(id)
        })
    }

    fn update(
        &self,
        update: RecordUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            let key = parse_id(&update.id)?;
            let mut inner = self.inner.write().await;
            match inner.records.iter_mut().find(|(k, _)| *k == key) {
                Some((_, record)) => {
                    record.name = update.name;
                    record.value = update.value;
                }
                None => tracing::debug!(id = %update.id, "update matched no record"),
            }
            Ok(())
        })
    }

    fn delete(
        &self,
        id: &RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        let id = id.clone();
        Box::pin(async move {
            let key = parse_id(&id)?;
            let mut inner = self.inner.write().await;
            let before = inner.records.len();
            inner.records.retain(|(k, _)| *k != key);
            if inner.records.len() == before {
                tracing::debug!(id = %id, "delete matched no record");
            }
            Ok(())
        })
    }

    fn find_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            Ok(inner.records.iter().map(|(_, r)| r.clone()).collect())
        })
    }
}

#[cfg(test)]
mod tests;
