//! Testing utilities including mock collaborators.
//!
//! These are useful for testing applications that use the publisher without
//! a real backend: canned failures, captured notices, and a shared call log
//! that pins cross-collaborator ordering (upload before mutation).

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::error::{MediaError, MediaResult, StoreError, StoreResult};
use crate::traits::media::{MediaCleanup, MediaStore, StoredMedia};
use crate::traits::notify::Notifier;
use crate::traits::store::PostStore;
use crate::types::draft::MediaFile;
use crate::types::outcome::SubmissionFailure;
use crate::types::post::{PostFields, PostRecord};

/// Record of a call made to a mock collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorCall {
    Upload { file_id: String },
    CreatePost,
    UpdatePost { post_id: String },
    MediaReplaced { old_media_id: String },
}

/// Shared call log, cloneable across mock collaborators so tests can assert
/// ordering between them.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<CollaboratorCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: CollaboratorCall) {
        self.calls.write().unwrap().push(call);
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.read().unwrap().is_empty()
    }
}

/// Mock media store with an optional canned upload failure.
pub struct MockMediaStore {
    log: CallLog,
    fail_with: Option<String>,
}

impl MockMediaStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_with: None,
        }
    }

    /// Make every upload fail with this message.
    pub fn with_upload_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn upload(&self, file_id: &str, _file: &MediaFile) -> MediaResult<StoredMedia> {
        self.log.record(CollaboratorCall::Upload {
            file_id: file_id.to_string(),
        });

        match &self.fail_with {
            Some(message) => Err(MediaError::upload(message.clone())),
            None => Ok(StoredMedia {
                id: file_id.to_string(),
            }),
        }
    }

    fn view_url(&self, stored_id: &str) -> Url {
        Url::parse(&format!("mock://media/{stored_id}")).unwrap()
    }
}

/// What a [`MockPostStore`] answers to mutations.
#[derive(Debug, Clone)]
pub enum StoreBehavior {
    /// Answer with a committed record echoing the written fields.
    Commit,

    /// Answer `Ok(None)` - refusal without an error.
    Reject,

    /// Answer with a backend error carrying this message.
    Fail(String),
}

/// Mock post store with configurable behavior.
pub struct MockPostStore {
    log: CallLog,
    behavior: StoreBehavior,
}

impl MockPostStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            behavior: StoreBehavior::Commit,
        }
    }

    pub fn with_behavior(mut self, behavior: StoreBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    fn answer(&self, id: &str, fields: &PostFields) -> StoreResult<Option<PostRecord>> {
        match &self.behavior {
            StoreBehavior::Commit => Ok(Some(committed_record(id, fields))),
            StoreBehavior::Reject => Ok(None),
            StoreBehavior::Fail(message) => Err(StoreError::backend(message.clone())),
        }
    }
}

#[async_trait]
impl PostStore for MockPostStore {
    async fn create_post(&self, fields: &PostFields) -> StoreResult<Option<PostRecord>> {
        self.log.record(CollaboratorCall::CreatePost);
        self.answer("post-1", fields)
    }

    async fn update_post(
        &self,
        post_id: &str,
        fields: &PostFields,
    ) -> StoreResult<Option<PostRecord>> {
        self.log.record(CollaboratorCall::UpdatePost {
            post_id: post_id.to_string(),
        });
        self.answer(post_id, fields)
    }
}

/// Notifier that captures every notice for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<SubmissionFailure>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured notices in order.
    pub fn notices(&self) -> Vec<SubmissionFailure> {
        self.notices.read().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, failure: &SubmissionFailure) {
        self.notices.write().unwrap().push(failure.clone());
    }
}

/// Cleanup hook that captures replaced media ids.
#[derive(Debug, Clone)]
pub struct RecordingCleanup {
    log: CallLog,
    replaced: Arc<RwLock<Vec<String>>>,
}

impl RecordingCleanup {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            replaced: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Media ids the hook saw, in order.
    pub fn replaced(&self) -> Vec<String> {
        self.replaced.read().unwrap().clone()
    }
}

#[async_trait]
impl MediaCleanup for RecordingCleanup {
    async fn media_replaced(&self, old_media_id: &str) {
        self.log.record(CollaboratorCall::MediaReplaced {
            old_media_id: old_media_id.to_string(),
        });
        self.replaced.write().unwrap().push(old_media_id.to_string());
    }
}

fn committed_record(id: &str, fields: &PostFields) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        caption: fields.caption.clone(),
        media_url: fields.media_url.clone(),
        media_id: fields.media_id.clone(),
        location: fields.location.clone(),
        tags: fields.tags.clone(),
        creator: fields.creator.clone(),
        created_at: Utc::now(),
    }
}
