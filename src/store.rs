// src/store.rs

use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::AppError};

/// Handle to the document store.
///
/// Carries an explicit initialized/uninitialized state instead of a nullable
/// global: the handle always exists, and when the database settings are
/// absent every operation reports `StoreUnavailable`.
#[derive(Clone)]
pub struct Store {
    db: Option<Database>,
}

impl Store {
    /// Builds a store handle from configuration.
    ///
    /// Missing settings or a malformed connection string leave the handle
    /// uninitialized. The driver connects lazily, so an unreachable server
    /// only surfaces on first use.
    pub async fn connect(config: &Config) -> Self {
        let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
            return Self::uninitialized();
        };

        match Client::with_uri_str(url).await {
            Ok(client) => Self {
                db: Some(client.database(name)),
            },
            Err(e) => {
                tracing::error!("Failed to build store client: {}", e);
                Self::uninitialized()
            }
        }
    }

    pub fn uninitialized() -> Self {
        Self { db: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.db.is_some()
    }

    fn database(&self) -> Result<&Database, AppError> {
        self.db.as_ref().ok_or(AppError::StoreUnavailable)
    }

    /// Inserts a document into the named collection and returns its
    /// generated id.
    pub async fn insert<T>(&self, collection: &str, document: &T) -> Result<ObjectId, AppError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .database()?
            .collection::<T>(collection)
            .insert_one(document)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Inserted document has a non-ObjectId key".to_string()))
    }

    /// Fetches up to `limit` documents matching `filter`.
    /// No ordering guarantee; callers sort.
    pub async fn query<T>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cursor = self
            .database()?
            .collection::<T>(collection)
            .find(filter)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Fetches a single document by id.
    pub async fn find_one<T>(&self, collection: &str, id: ObjectId) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        Ok(self
            .database()?
            .collection::<T>(collection)
            .find_one(doc! { "_id": id })
            .await?)
    }

    /// Applies a partial atomic mutation (`$inc`, `$push`) to the document
    /// with the given id. Returns whether a document matched.
    pub async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        mutation: Document,
    ) -> Result<bool, AppError> {
        let result = self
            .database()?
            .collection::<Document>(collection)
            .update_one(doc! { "_id": id }, mutation)
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Lists collection names, for the diagnostic endpoint.
    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.database()?.list_collection_names().await?)
    }
}

/// Parses a caller-supplied id string into a native document id.
///
/// The single place this conversion happens: a bad id becomes
/// `MalformedId`, never a raw parse error escaping to the caller.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::MalformedId(format!("Invalid post id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_hex() {
        let id = ObjectId::new();
        let parsed = parse_object_id(&id.to_hex()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::MalformedId(_))
        ));
        assert!(matches!(parse_object_id(""), Err(AppError::MalformedId(_))));
        // Right length, not hex
        assert!(matches!(
            parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(AppError::MalformedId(_))
        ));
    }

    #[tokio::test]
    async fn uninitialized_store_reports_unavailable() {
        let store = Store::uninitialized();
        assert!(!store.is_initialized());

        let err = store
            .find_one::<Document>("post", ObjectId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable));

        let err = store
            .update_one("post", ObjectId::new(), doc! { "$inc": { "likes": 1 } })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable));
    }
}
