//! Submission pipeline - upload media, commit the post, report failures.
//!
//! One submission runs as a single sequential task:
//!
//! ```text
//! idle → uploading (skipped without a file) → committing
//!      → committed | soft-failed | failed
//! ```
//!
//! The upload strictly precedes the mutation; a committed document can never
//! reference media that failed to upload. There are no retries and no
//! timeouts here - the transport owns those - and an in-flight submission
//! runs to completion or failure.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::traits::media::{KeepReplacedMedia, MediaCleanup, MediaStore};
use crate::traits::notify::{LogNotifier, Notifier};
use crate::traits::store::PostStore;
use crate::types::config::{FailurePolicy, PublishConfig};
use crate::types::draft::PostDraft;
use crate::types::outcome::{SubmissionFailure, SubmissionOutcome};
use crate::types::post::{PostFields, SubmitIntent, UserId};

/// Media reference a mutation will carry.
struct EffectiveMedia {
    url: String,
    id: String,

    /// Stored id the mutation displaces, when an update uploaded new media.
    replaced: Option<String>,
}

/// Orchestrates post submissions against a media store and a document store.
///
/// Holds one in-flight token: a second `submit` while one is running is
/// refused before any side effect, so a double-clicked form cannot race
/// itself. Construct per form instance.
pub struct Publisher<M, P> {
    media: M,
    posts: P,
    notifier: Arc<dyn Notifier>,
    cleanup: Arc<dyn MediaCleanup>,
    config: PublishConfig,
    flight: Semaphore,
}

impl<M: MediaStore, P: PostStore> Publisher<M, P> {
    /// Create a publisher with the default config, a log-backed notifier,
    /// and no media cleanup.
    pub fn new(media: M, posts: P) -> Self {
        Self {
            media,
            posts,
            notifier: Arc::new(LogNotifier),
            cleanup: Arc::new(KeepReplacedMedia),
            config: PublishConfig::default(),
            flight: Semaphore::new(1),
        }
    }

    /// Set the config.
    pub fn with_config(mut self, config: PublishConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the notification channel.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the hook fired when an update replaces stored media.
    pub fn with_cleanup(mut self, cleanup: Arc<dyn MediaCleanup>) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Whether a submission is currently in flight. UI affordance only -
    /// `submit` enforces the exclusion itself.
    pub fn is_busy(&self) -> bool {
        self.flight.available_permits() == 0
    }

    /// Run one submission to a terminal state.
    ///
    /// The draft has already passed validation, so every failure from here
    /// on is a network-phase failure: reported through the notifier, and
    /// terminal in the returned outcome. Only hard failures suppress the
    /// navigation directive; a store rejection under the lenient policy
    /// reports and navigates anyway.
    pub async fn submit(
        &self,
        draft: PostDraft,
        intent: SubmitIntent,
        actor: &UserId,
    ) -> SubmissionOutcome {
        let action = intent.action();

        let _permit = match self.flight.try_acquire() {
            Ok(permit) => permit,
            Err(_) => {
                warn!(%action, "Submission refused, one is already in flight");
                return SubmissionOutcome::Failed {
                    failure: SubmissionFailure::already_in_flight(action),
                };
            }
        };

        let uploaded = match draft.first_file() {
            Some(file) => {
                let file_id = Uuid::new_v4().to_string();
                info!(%action, file_name = %file.file_name, "Uploading media");

                match self.media.upload(&file_id, file).await {
                    Ok(stored) => {
                        let url = self.media.view_url(&stored.id);
                        Some((stored.id, url))
                    }
                    Err(e) => {
                        // Abort before the mutation: the document must never
                        // reference an object that failed to upload.
                        warn!(%action, error = %e, "Media upload failed, aborting");
                        let failure = SubmissionFailure::upload(action, &e);
                        self.notifier.notify(&failure);
                        return SubmissionOutcome::Failed { failure };
                    }
                }
            }
            None => None,
        };

        let media = effective_media(uploaded, &intent);
        let fields = PostFields {
            caption: draft.caption().to_string(),
            media_url: media.url,
            media_id: media.id,
            location: draft.location().to_string(),
            tags: draft.tag_list(),
            creator: actor.clone(),
        };

        let navigation = intent.navigation();

        info!(%action, "Committing post");
        let mutation = match &intent {
            SubmitIntent::Create => self.posts.create_post(&fields).await,
            SubmitIntent::Update(existing) => self.posts.update_post(&existing.id, &fields).await,
        };

        match mutation {
            Ok(Some(post)) => {
                if let Some(old_id) = media.replaced {
                    self.cleanup.media_replaced(&old_id).await;
                }
                info!(%action, post_id = %post.id, "Post committed");
                SubmissionOutcome::Committed { post, navigation }
            }
            Ok(None) => {
                let failure = SubmissionFailure::rejected(action);
                self.notifier.notify(&failure);
                match self.config.failure_policy {
                    FailurePolicy::Lenient => {
                        warn!(%action, "Store rejected the mutation, navigating anyway");
                        SubmissionOutcome::SoftFailed {
                            failure,
                            navigation,
                        }
                    }
                    FailurePolicy::Strict => {
                        warn!(%action, "Store rejected the mutation");
                        SubmissionOutcome::Failed { failure }
                    }
                }
            }
            Err(e) => {
                warn!(%action, error = %e, "Mutation failed");
                let failure = SubmissionFailure::unexpected(action, &e);
                self.notifier.notify(&failure);
                SubmissionOutcome::Failed { failure }
            }
        }
    }
}

/// Media reference rules: a fresh upload wins; an update without a new file
/// passes the existing reference through unchanged; a create without a file
/// carries an empty reference.
fn effective_media(uploaded: Option<(String, Url)>, intent: &SubmitIntent) -> EffectiveMedia {
    match (uploaded, intent) {
        (Some((id, url)), SubmitIntent::Update(existing)) => EffectiveMedia {
            url: url.into(),
            replaced: (!existing.media_id.is_empty()).then(|| existing.media_id.clone()),
            id,
        },
        (Some((id, url)), SubmitIntent::Create) => EffectiveMedia {
            url: url.into(),
            id,
            replaced: None,
        },
        (None, SubmitIntent::Update(existing)) => EffectiveMedia {
            url: existing.media_url.clone(),
            id: existing.media_id.clone(),
            replaced: None,
        },
        (None, SubmitIntent::Create) => EffectiveMedia {
            url: String::new(),
            id: String::new(),
            replaced: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::post::{PostRecord, UserId};

    fn update_intent(media_url: &str, media_id: &str) -> SubmitIntent {
        SubmitIntent::Update(
            PostRecord::new("p1", "old caption", UserId::new("u1"))
                .with_media(media_url, media_id),
        )
    }

    #[test]
    fn test_update_without_upload_preserves_reference() {
        let media = effective_media(None, &update_intent("http://x/old.png", "old-id"));
        assert_eq!(media.url, "http://x/old.png");
        assert_eq!(media.id, "old-id");
        assert!(media.replaced.is_none());
    }

    #[test]
    fn test_update_with_upload_takes_fresh_reference() {
        let fresh = Url::parse("http://x/new.png").unwrap();
        let media = effective_media(
            Some(("new-id".to_string(), fresh)),
            &update_intent("http://x/old.png", "old-id"),
        );
        assert_eq!(media.url, "http://x/new.png");
        assert_eq!(media.id, "new-id");
        assert_eq!(media.replaced.as_deref(), Some("old-id"));
    }

    #[test]
    fn test_update_with_upload_over_no_media_replaces_nothing() {
        let fresh = Url::parse("http://x/new.png").unwrap();
        let media = effective_media(
            Some(("new-id".to_string(), fresh)),
            &update_intent("", ""),
        );
        assert_eq!(media.id, "new-id");
        assert!(media.replaced.is_none());
    }

    #[test]
    fn test_create_without_upload_is_empty() {
        let media = effective_media(None, &SubmitIntent::Create);
        assert_eq!(media.url, "");
        assert_eq!(media.id, "");
        assert!(media.replaced.is_none());
    }
}
