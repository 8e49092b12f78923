//! Collaborator trait abstractions.
//!
//! The pipeline touches the outside world only through these seams: media
//! storage, the document store, the notification channel, and the cleanup
//! hook. Everything is an explicit capability handed to the
//! [`Publisher`](crate::Publisher) - no ambient process-wide state.

pub mod media;
pub mod notify;
pub mod store;

pub use media::{KeepReplacedMedia, MediaCleanup, MediaStore, StoredMedia};
pub use notify::{LogNotifier, Notifier};
pub use store::PostStore;
