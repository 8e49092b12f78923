//! Store implementations.
//!
//! - [`memory`] - in-memory media and post stores for tests and development.
//! - [`appwrite`] - Appwrite-backed adapters (requires the `appwrite`
//!   feature).

pub mod memory;

#[cfg(feature = "appwrite")]
pub mod appwrite;

pub use memory::{MemoryMediaStore, MemoryPostStore};

#[cfg(feature = "appwrite")]
pub use appwrite::{AppwriteMediaCleanup, AppwriteMediaStore, AppwritePostStore};
