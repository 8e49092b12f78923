//! Appwrite-backed implementations of the collaborator traits.
//!
//! Thin adapters over [`appwrite_client`]: the media store maps onto a
//! storage bucket, the post store onto a database collection, and the
//! cleanup hook onto file deletion. Wire field names (`imageUrl`, `imageId`,
//! `caption`, `location`, `tags`, `creator`) follow the posts collection
//! schema.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;
use url::Url;
use uuid::Uuid;

use appwrite_client::{AppwriteClient, Document};

use crate::error::{MediaError, MediaResult, StoreError, StoreResult};
use crate::traits::media::{MediaCleanup, MediaStore, StoredMedia};
use crate::traits::store::PostStore;
use crate::types::draft::MediaFile;
use crate::types::post::{PostFields, PostRecord, UserId};

/// Media store over an Appwrite storage bucket.
pub struct AppwriteMediaStore {
    client: Arc<AppwriteClient>,
    bucket_id: String,
}

impl AppwriteMediaStore {
    pub fn new(client: Arc<AppwriteClient>, bucket_id: impl Into<String>) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }
}

#[async_trait]
impl MediaStore for AppwriteMediaStore {
    async fn upload(&self, file_id: &str, file: &MediaFile) -> MediaResult<StoredMedia> {
        let stored = self
            .client
            .create_file(
                &self.bucket_id,
                file_id,
                &file.file_name,
                file.mime_type.as_deref(),
                file.bytes.clone(),
            )
            .await
            .map_err(MediaError::upload)?;

        Ok(StoredMedia { id: stored.id })
    }

    fn view_url(&self, stored_id: &str) -> Url {
        self.client.file_view_url(&self.bucket_id, stored_id)
    }
}

/// Post store over an Appwrite database collection.
pub struct AppwritePostStore {
    client: Arc<AppwriteClient>,
    database_id: String,
    collection_id: String,
}

impl AppwritePostStore {
    pub fn new(
        client: Arc<AppwriteClient>,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            collection_id: collection_id.into(),
        }
    }
}

#[async_trait]
impl PostStore for AppwritePostStore {
    async fn create_post(&self, fields: &PostFields) -> StoreResult<Option<PostRecord>> {
        let data = serde_json::to_value(fields)?;
        let document_id = Uuid::new_v4().to_string();

        let doc = self
            .client
            .create_document(&self.database_id, &self.collection_id, &document_id, data)
            .await
            .map_err(StoreError::backend)?;

        Ok(Some(record_from_document(doc)))
    }

    async fn update_post(
        &self,
        post_id: &str,
        fields: &PostFields,
    ) -> StoreResult<Option<PostRecord>> {
        let data = serde_json::to_value(fields)?;

        let doc = self
            .client
            .update_document(&self.database_id, &self.collection_id, post_id, data)
            .await
            .map_err(StoreError::backend)?;

        Ok(doc.map(record_from_document))
    }
}

/// Cleanup hook that deletes replaced files from the bucket.
///
/// Deletion failures are logged and swallowed: the document is already
/// committed when the hook runs, so the worst case is an orphaned file.
pub struct AppwriteMediaCleanup {
    client: Arc<AppwriteClient>,
    bucket_id: String,
}

impl AppwriteMediaCleanup {
    pub fn new(client: Arc<AppwriteClient>, bucket_id: impl Into<String>) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }
}

#[async_trait]
impl MediaCleanup for AppwriteMediaCleanup {
    async fn media_replaced(&self, old_media_id: &str) {
        if let Err(e) = self.client.delete_file(&self.bucket_id, old_media_id).await {
            warn!(old_media_id, error = %e, "Failed to delete replaced media");
        }
    }
}

fn record_from_document(doc: Document) -> PostRecord {
    let tags = doc
        .data
        .get("tags")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    PostRecord {
        caption: doc.str_field("caption").unwrap_or_default().to_string(),
        media_url: doc.str_field("imageUrl").unwrap_or_default().to_string(),
        media_id: doc.str_field("imageId").unwrap_or_default().to_string(),
        location: doc.str_field("location").unwrap_or_default().to_string(),
        creator: UserId::new(doc.str_field("creator").unwrap_or_default()),
        created_at: doc.created_at,
        tags,
        id: doc.id,
    }
}
