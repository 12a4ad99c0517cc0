//! Document store client for the yatra service.
//!
//! Wraps the MongoDB driver behind the narrow interface the resource
//! handlers need: capped listing, lookup by public id, inserts, and a
//! collection-wide clear used by the seed operation. The driver's internal
//! `_id` field is stripped from every read via projection so it never leaks
//! into API responses.

use ::bson::Document;
use futures_util::TryStreamExt;
use mongodb::{Client, Collection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use ::bson;
pub use ::bson::doc;

/// Hard cap applied to every listing query.
pub const LIST_CAP: i64 = 1000;

/// Errors surfaced by the document store client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to document store: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("document store operation failed: {0}")]
    Operation(#[from] mongodb::error::Error),
}

/// Handle to the document store. Cloning is cheap (the driver pools
/// connections internally); `shutdown` must be called exactly once, on the
/// owning handle, when the process is done with the store.
#[derive(Clone)]
pub struct Store {
    client: Client,
    database: mongodb::Database,
}

impl Store {
    /// Connect to the store at `url` and select `database`.
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(StoreError::Connect)?;
        let database = client.database(database);

        tracing::info!(
            target: "yatra-db",
            database = database.name(),
            "document store client ready"
        );

        Ok(Self { client, database })
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// List documents matching `filter`, capped at [`LIST_CAP`], with the
    /// store-internal `_id` stripped. An empty result is not an error.
    pub async fn find<T>(&self, collection: &str, filter: Document) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cursor = self
            .collection::<T>(collection)
            .find(filter)
            .projection(doc! { "_id": 0 })
            .limit(LIST_CAP)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Look up a single document by its public `id` field.
    pub async fn find_by_id<T>(&self, collection: &str, id: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        Ok(self
            .collection::<T>(collection)
            .find_one(doc! { "id": id })
            .projection(doc! { "_id": 0 })
            .await?)
    }

    /// Insert a single record.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> Result<(), StoreError>
    where
        T: Serialize + Send + Sync,
    {
        self.collection::<T>(collection).insert_one(record).await?;
        Ok(())
    }

    /// Bulk insert, returning the number of documents written.
    pub async fn insert_many<T>(&self, collection: &str, records: &[T]) -> Result<usize, StoreError>
    where
        T: Serialize + Send + Sync,
    {
        let outcome = self.collection::<T>(collection).insert_many(records).await?;
        Ok(outcome.inserted_ids.len())
    }

    /// Delete every document in `collection`, returning the removed count.
    pub async fn clear(&self, collection: &str) -> Result<u64, StoreError> {
        let outcome = self
            .collection::<Document>(collection)
            .delete_many(doc! {})
            .await?;

        tracing::warn!(
            target: "yatra-db",
            collection,
            deleted = outcome.deleted_count,
            "collection cleared"
        );

        Ok(outcome.deleted_count)
    }

    /// Release the underlying connection pool. Call once, at shutdown.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!(target: "yatra-db", "document store client shut down");
    }
}
