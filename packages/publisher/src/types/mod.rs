//! Data types for the post submission pipeline.

pub mod config;
pub mod draft;
pub mod outcome;
pub mod post;

pub use config::{FailurePolicy, PublishConfig};
pub use draft::{DraftFields, MediaFile, PostDraft};
pub use outcome::{
    FailureKind, Navigation, SubmissionFailure, SubmissionOutcome, SubmitAction,
};
pub use post::{PostFields, PostRecord, SubmitIntent, UserId};
