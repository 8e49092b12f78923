//! Document store trait.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::post::{PostFields, PostRecord};

/// Remote document store holding post records.
///
/// `Ok(None)` is the soft-failure signal: the store refused the write
/// without raising an error, distinct from `Err(_)`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post document and return it as committed.
    async fn create_post(&self, fields: &PostFields) -> StoreResult<Option<PostRecord>>;

    /// Replace the document identified by `post_id` with `fields`.
    ///
    /// Returns `Ok(None)` when the target no longer exists.
    async fn update_post(
        &self,
        post_id: &str,
        fields: &PostFields,
    ) -> StoreResult<Option<PostRecord>>;
}
