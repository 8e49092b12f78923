//! Post Submission Library
//!
//! Validates post drafts and runs the submission pipeline against a media
//! store and a document store: conditionally upload an attachment, derive
//! its public reference, commit a create-or-update mutation, and map every
//! outcome to a navigation directive and a user-visible failure notice.
//!
//! # Design
//!
//! - Validation is pure and runs before anything touches the network, so
//!   the partial-failure surface is confined to the network phase.
//! - The upload strictly precedes the mutation: a committed document never
//!   references media that failed to upload.
//! - Collaborators (media store, document store, notifier, cleanup hook)
//!   are explicit capabilities behind traits - no ambient state, every
//!   seam swappable in tests.
//! - One in-flight token per [`Publisher`]: double submission is refused,
//!   not raced.
//!
//! # Usage
//!
//! ```rust,ignore
//! use publisher::{
//!     DraftFields, MemoryMediaStore, MemoryPostStore, PostDraft, Publisher,
//!     SubmitIntent, UserId,
//! };
//!
//! let draft = PostDraft::validate(DraftFields {
//!     caption: "golden hour".into(),
//!     files: vec![],
//!     location: "Oslo".into(),
//!     tags: "Art, Expression".into(),
//! })?;
//!
//! let publisher = Publisher::new(MemoryMediaStore::new(), MemoryPostStore::new());
//! let outcome = publisher
//!     .submit(draft, SubmitIntent::Create, &UserId::new("u1"))
//!     .await;
//!
//! if let Some(navigation) = outcome.navigation() {
//!     // hand the directive to the navigation sink
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (MediaStore, PostStore, ...)
//! - [`types`] - Drafts, records, outcomes, configuration
//! - [`submit`] - The submission pipeline
//! - [`stores`] - Store implementations (in-memory; Appwrite behind the
//!   `appwrite` feature)
//! - [`testing`] - Mock collaborators for testing

pub mod error;
pub mod stores;
pub mod submit;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{MediaError, MediaResult, StoreError, StoreResult, ValidationError};
pub use traits::{
    media::{KeepReplacedMedia, MediaCleanup, MediaStore, StoredMedia},
    notify::{LogNotifier, Notifier},
    store::PostStore,
};
pub use types::{
    config::{FailurePolicy, PublishConfig},
    draft::{DraftFields, MediaFile, PostDraft, MAX_CAPTION_CHARS},
    outcome::{FailureKind, Navigation, SubmissionFailure, SubmissionOutcome, SubmitAction},
    post::{PostFields, PostRecord, SubmitIntent, UserId},
};

// Re-export the pipeline entry point
pub use submit::Publisher;

// Re-export stores
pub use stores::{MemoryMediaStore, MemoryPostStore};

#[cfg(feature = "appwrite")]
pub use stores::{AppwriteMediaCleanup, AppwriteMediaStore, AppwritePostStore};
