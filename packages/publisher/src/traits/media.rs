//! Media storage traits.

use async_trait::async_trait;
use url::Url;

use crate::error::MediaResult;
use crate::types::draft::MediaFile;

/// Handle to a stored media object.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    /// Identifier of the object inside the backing bucket.
    pub id: String,
}

/// Blob storage for post media.
///
/// Implementations must guarantee that a successful [`upload`](Self::upload)
/// return means the object is immediately readable through
/// [`view_url`](Self::view_url).
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload one file under a caller-generated unique id.
    async fn upload(&self, file_id: &str, file: &MediaFile) -> MediaResult<StoredMedia>;

    /// Publicly dereferenceable URL for a stored object. Pure derivation.
    fn view_url(&self, stored_id: &str) -> Url;
}

/// Hook fired when an update replaced a post's media with a fresh upload.
///
/// The previous object is no longer referenced by any document at that
/// point. The hook must not fail the submission - the document is already
/// committed when it runs.
#[async_trait]
pub trait MediaCleanup: Send + Sync {
    async fn media_replaced(&self, old_media_id: &str);
}

/// Default cleanup that leaves replaced media in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepReplacedMedia;

#[async_trait]
impl MediaCleanup for KeepReplacedMedia {
    async fn media_replaced(&self, old_media_id: &str) {
        // TODO: wire a deletion policy once retention rules are decided;
        // replaced objects currently accumulate in the bucket.
        tracing::debug!(old_media_id, "Replaced media left in place");
    }
}
