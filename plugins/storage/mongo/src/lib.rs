mod config;
mod connector;

use std::future::Future;
use std::pin::Pin;

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};

use student_api::{NewRecord, Record, RecordId, RecordStore, RecordUpdate, StoreError};

use connector::{ConnectFuture, Connector};

pub use config::MongoStoreConfig;

// ═══════════════════════════════════════════════════════════════
//  MongoStore
// ═══════════════════════════════════════════════════════════════

/// Record store backed by one MongoDB collection.
///
/// The collection handle is bound once, on the first `init()` or the
/// first operation, whichever comes first. The driver's client pools its
/// own connections and is never closed explicitly.
pub struct MongoStore {
    collection: Connector<Collection<Document>>,
}

impl MongoStore {
    pub fn new(config: MongoStoreConfig) -> Self {
        Self {
            collection: Connector::new(move || -> ConnectFuture<_> {
                Box::pin(connect(config.clone()))
            }),
        }
    }

    async fn ensure_connected(&self) -> Result<&Collection<Document>, StoreError> {
        self.collection.ensure_connected().await
    }
}

async fn connect(cfg: MongoStoreConfig) -> Result<Collection<Document>, StoreError> {
    let client = Client::with_uri_str(&cfg.uri)
        .await
        .map_err(|e| StoreError::unavailable(format!("connect: {e}")))?;

    let db = match &cfg.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(config::DEFAULT_DATABASE)),
    };

    // The driver connects lazily; ping so an unreachable server fails here.
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::unavailable(format!("ping '{}': {e}", db.name())))?;

    tracing::info!(
        database = %db.name(),
        collection = %cfg.collection,
        "connected to store"
    );
    Ok(db.collection(&cfg.collection))
}

fn parse_id(id: &RecordId) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| StoreError::invalid_identifier(format!("'{id}': {e}")))
}

fn bson_to_text(value: Option<&Bson>) -> String {
    match value {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Documents written by other clients may lack fields or hold non-string
/// values; those are rendered as text rather than rejected.
pub(crate) fn record_from_document(doc: &Document) -> Record {
    Record {
        id: RecordId::new(bson_to_text(doc.get("_id"))),
        name: bson_to_text(doc.get("name")),
        value: bson_to_text(doc.get("value")),
    }
}

impl RecordStore for MongoStore {
    fn init(&self) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            self.ensure_connected().await?;
            Ok(())
        })
    }

    fn insert(
        &self,
        record: NewRecord,
    ) -> Pin<Box<dyn Future<Output = Result<RecordId, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let coll = self.ensure_connected().await?;
            let result = coll
                .insert_one(doc! { "name": record.name, "value": record.value })
                .await
                .map_err(|e| StoreError::operation(format!("insert: {e}")))?;
            Ok(RecordId::new(bson_to_text(Some(&result.inserted_id))))
        })
    }

    fn update(
        &self,
        update: RecordUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            let oid = parse_id(&update.id)?;
            let coll = self.ensure_connected().await?;
            let result = coll
                .update_one(
                    doc! { "_id": oid },
                    doc! { "$set": { "name": update.name, "value": update.value } },
                )
                .await
                .map_err(|e| StoreError::operation(format!("update {oid}: {e}")))?;
            if result.matched_count == 0 {
                tracing::debug!(id = %oid, "update matched no document");
            }
            Ok(())
        })
    }

    fn delete(
        &self,
        id: &RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        let parsed = parse_id(id);
        Box::pin(async move {
            let oid = parsed?;
            let coll = self.ensure_connected().await?;
            let result = coll
                .delete_one(doc! { "_id": oid })
                .await
                .map_err(|e| StoreError::operation(format!("delete {oid}: {e}")))?;
            if result.deleted_count == 0 {
                tracing::debug!(id = %oid, "delete matched no document");
            }
            Ok(())
        })
    }

    fn find_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let coll = self.ensure_connected().await?;
            let docs: Vec<Document> = coll
                .find(doc! {})
                .await
                .map_err(|e| StoreError::operation(format!("find: {e}")))?
                .try_collect()
                .await
                .map_err(|e| StoreError::operation(format!("find cursor: {e}")))?;
            Ok(docs.iter().map(record_from_document).collect())
        })
    }
}

#[cfg(test)]
mod tests;
