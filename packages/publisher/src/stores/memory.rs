//! In-memory store implementations for testing and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use url::Url;
use uuid::Uuid;

use crate::error::{MediaResult, StoreResult};
use crate::traits::media::{MediaStore, StoredMedia};
use crate::traits::store::PostStore;
use crate::types::draft::MediaFile;
use crate::types::post::{PostFields, PostRecord};

/// In-memory media store.
///
/// Keeps uploaded files in a map and derives `memory://media/{id}` view
/// URLs. Useful for tests and development; data is lost on drop.
pub struct MemoryMediaStore {
    base: Url,
    files: RwLock<HashMap<String, MediaFile>>,
}

impl Default for MemoryMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMediaStore {
    /// Create a new empty media store.
    pub fn new() -> Self {
        Self {
            base: Url::parse("memory://media/").expect("static base URL"),
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored files.
    pub fn file_count(&self) -> usize {
        self.files.read().unwrap().len()
    }

    /// Whether a file with this id was uploaded.
    pub fn contains(&self, stored_id: &str) -> bool {
        self.files.read().unwrap().contains_key(stored_id)
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn upload(&self, file_id: &str, file: &MediaFile) -> MediaResult<StoredMedia> {
        self.files
            .write()
            .unwrap()
            .insert(file_id.to_string(), file.clone());
        Ok(StoredMedia {
            id: file_id.to_string(),
        })
    }

    fn view_url(&self, stored_id: &str) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("base URL has a path")
            .push(stored_id);
        url
    }
}

/// In-memory post store.
///
/// Documents live in a map keyed by generated ids. `update_post` on a
/// missing id answers `Ok(None)`, matching the remote store's
/// non-exceptional miss.
pub struct MemoryPostStore {
    posts: RwLock<HashMap<String, PostRecord>>,
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPostStore {
    /// Create a new empty post store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Seed an existing record, as if committed earlier.
    pub fn seed(&self, record: PostRecord) {
        self.posts
            .write()
            .unwrap()
            .insert(record.id.clone(), record);
    }

    /// Number of stored posts.
    pub fn post_count(&self) -> usize {
        self.posts.read().unwrap().len()
    }

    /// Fetch a stored post by id.
    pub fn get(&self, post_id: &str) -> Option<PostRecord> {
        self.posts.read().unwrap().get(post_id).cloned()
    }

    fn record_from(id: String, fields: &PostFields) -> PostRecord {
        PostRecord {
            id,
            caption: fields.caption.clone(),
            media_url: fields.media_url.clone(),
            media_id: fields.media_id.clone(),
            location: fields.location.clone(),
            tags: fields.tags.clone(),
            creator: fields.creator.clone(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create_post(&self, fields: &PostFields) -> StoreResult<Option<PostRecord>> {
        let record = Self::record_from(Uuid::new_v4().to_string(), fields);
        self.posts
            .write()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(Some(record))
    }

    async fn update_post(
        &self,
        post_id: &str,
        fields: &PostFields,
    ) -> StoreResult<Option<PostRecord>> {
        let mut posts = self.posts.write().unwrap();
        if !posts.contains_key(post_id) {
            return Ok(None);
        }

        let mut record = Self::record_from(post_id.to_string(), fields);
        if let Some(existing) = posts.get(post_id) {
            record.created_at = existing.created_at;
        }
        posts.insert(post_id.to_string(), record.clone());
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::post::UserId;
    use tokio_test::assert_ok;

    fn fields(caption: &str) -> PostFields {
        PostFields {
            caption: caption.to_string(),
            media_url: String::new(),
            media_id: String::new(),
            location: String::new(),
            tags: Vec::new(),
            creator: UserId::new("u1"),
        }
    }

    #[tokio::test]
    async fn test_media_upload_and_view_url() {
        let store = MemoryMediaStore::new();
        let stored = assert_ok!(
            store
                .upload("f1", &MediaFile::new("pic.png", vec![1, 2, 3]))
                .await
        );

        assert_eq!(stored.id, "f1");
        assert!(store.contains("f1"));
        assert_eq!(store.view_url("f1").as_str(), "memory://media/f1");
    }

    #[tokio::test]
    async fn test_post_create_then_update() {
        let store = MemoryPostStore::new();

        let created = store.create_post(&fields("first")).await.unwrap().unwrap();
        assert_eq!(store.post_count(), 1);

        let updated = store
            .update_post(&created.id, &fields("second"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.caption, "second");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.post_count(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_none() {
        let store = MemoryPostStore::new();
        let result = store.update_post("nope", &fields("x")).await.unwrap();
        assert!(result.is_none());
    }
}
