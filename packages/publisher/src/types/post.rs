//! Post records, mutation fields, and submission intent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::outcome::{Navigation, SubmitAction};

/// Identifier of the acting user, supplied by the identity provider.
///
/// Always passed explicitly into the pipeline; the library never reads
/// ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed post as read back from the document store.
///
/// Owned by the store; the client only ever replaces it wholesale through a
/// submission. `media_url` and `media_id` are empty strings when the post
/// carries no media, mirroring the stored document shape.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: String,
    pub caption: String,
    pub media_url: String,
    pub media_id: String,
    pub location: String,
    pub tags: Vec<String>,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
}

impl PostRecord {
    /// Build a record with empty media, location and tags.
    pub fn new(id: impl Into<String>, caption: impl Into<String>, creator: UserId) -> Self {
        Self {
            id: id.into(),
            caption: caption.into(),
            media_url: String::new(),
            media_id: String::new(),
            location: String::new(),
            tags: Vec::new(),
            creator,
            created_at: Utc::now(),
        }
    }

    /// Set the media reference (view URL and stored id).
    pub fn with_media(mut self, url: impl Into<String>, id: impl Into<String>) -> Self {
        self.media_url = url.into();
        self.media_id = id.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The exact field set written by a create or update mutation.
///
/// Serializes with the document store's wire field names.
#[derive(Debug, Clone, Serialize)]
pub struct PostFields {
    pub caption: String,

    #[serde(rename = "imageUrl")]
    pub media_url: String,

    #[serde(rename = "imageId")]
    pub media_id: String,

    pub location: String,

    pub tags: Vec<String>,

    pub creator: UserId,
}

/// What a submission intends to do.
///
/// Update always carries the target record - and with it the id and the
/// current media reference - so there is no "update without a target" state
/// to defend against.
#[derive(Debug, Clone)]
pub enum SubmitIntent {
    /// Insert a new post; no existing identifier is involved.
    Create,

    /// Replace the given post wholesale.
    Update(PostRecord),
}

impl SubmitIntent {
    /// The action label used in user-visible messages.
    pub fn action(&self) -> SubmitAction {
        match self {
            Self::Create => SubmitAction::Create,
            Self::Update(_) => SubmitAction::Update,
        }
    }

    /// Where the caller navigates once the submission resolves.
    pub fn navigation(&self) -> Navigation {
        match self {
            Self::Create => Navigation::ToHome,
            Self::Update(existing) => Navigation::ToDetail(existing.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_navigation_targets() {
        assert_eq!(SubmitIntent::Create.navigation(), Navigation::ToHome);

        let existing = PostRecord::new("p1", "caption", UserId::new("u1"));
        assert_eq!(
            SubmitIntent::Update(existing).navigation(),
            Navigation::ToDetail("p1".to_string())
        );
    }

    #[test]
    fn test_post_fields_wire_names() {
        let fields = PostFields {
            caption: "hello".to_string(),
            media_url: "https://files.example/v".to_string(),
            media_id: "m1".to_string(),
            location: String::new(),
            tags: vec!["Art".to_string()],
            creator: UserId::new("u1"),
        };

        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["imageUrl"], "https://files.example/v");
        assert_eq!(value["imageId"], "m1");
        assert_eq!(value["creator"], "u1");
        assert!(value.get("media_url").is_none());
    }
}
