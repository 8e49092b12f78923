//! Draft input and validation.
//!
//! A [`PostDraft`] can only be obtained through [`PostDraft::validate`], so
//! anything the submission pipeline receives has already passed the local
//! checks and the remaining failure surface is the network phase.

use crate::error::ValidationError;
use crate::types::post::PostRecord;

/// Maximum caption length accepted by the post form.
pub const MAX_CAPTION_CHARS: usize = 2200;

/// One binary attachment picked in the form.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Original file name, used as the stored object's display name.
    pub file_name: String,

    /// MIME type when the picker reported one.
    pub mime_type: Option<String>,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Create a file from a name and its content.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Raw form fields as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    pub caption: String,

    /// Attachments in selection order; only the first is ever uploaded.
    pub files: Vec<MediaFile>,

    pub location: String,

    /// Comma-separated tag text.
    pub tags: String,
}

impl DraftFields {
    /// Prefill fields from an existing post, the way an edit form opens.
    pub fn prefill(post: &PostRecord) -> Self {
        Self {
            caption: post.caption.clone(),
            files: Vec::new(),
            location: post.location.clone(),
            tags: post.tags.join(","),
        }
    }
}

/// A validated, not-yet-submitted post.
#[derive(Debug, Clone)]
pub struct PostDraft {
    caption: String,
    files: Vec<MediaFile>,
    location: String,
    tags: String,
}

impl PostDraft {
    /// Validate raw fields into a draft.
    ///
    /// Pure check, no side effects: an empty caption fails with
    /// [`ValidationError::CaptionTooShort`] before any network call can
    /// happen. Files, location and tags carry no constraint here - an empty
    /// file list simply means no attachment.
    pub fn validate(fields: DraftFields) -> Result<Self, ValidationError> {
        if fields.caption.is_empty() {
            return Err(ValidationError::CaptionTooShort);
        }
        let len = fields.caption.chars().count();
        if len > MAX_CAPTION_CHARS {
            return Err(ValidationError::CaptionTooLong {
                len,
                limit: MAX_CAPTION_CHARS,
            });
        }

        Ok(Self {
            caption: fields.caption,
            files: fields.files,
            location: fields.location,
            tags: fields.tags,
        })
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The attachment that would be uploaded, if any.
    pub fn first_file(&self) -> Option<&MediaFile> {
        self.files.first()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Raw comma-separated tag text.
    pub fn tags_raw(&self) -> &str {
        &self.tags
    }

    /// Tags split strictly on `','`.
    ///
    /// Surrounding whitespace is preserved - `"Art, Expression"` yields
    /// `["Art", " Expression"]` - matching what the form has always
    /// submitted. An empty input yields no tags.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::post::UserId;

    fn fields(caption: &str) -> DraftFields {
        DraftFields {
            caption: caption.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_caption_rejected() {
        let err = PostDraft::validate(fields("")).unwrap_err();
        assert_eq!(err, ValidationError::CaptionTooShort);
    }

    #[test]
    fn test_overlong_caption_rejected() {
        let err = PostDraft::validate(fields(&"x".repeat(MAX_CAPTION_CHARS + 1))).unwrap_err();
        assert!(matches!(err, ValidationError::CaptionTooLong { .. }));
    }

    #[test]
    fn test_empty_file_list_is_valid() {
        let draft = PostDraft::validate(fields("hello")).unwrap();
        assert!(draft.first_file().is_none());
    }

    #[test]
    fn test_tags_split_on_comma_without_trimming() {
        let mut f = fields("hello");
        f.tags = "Art, Expression, Learn".to_string();
        let draft = PostDraft::validate(f).unwrap();
        assert_eq!(draft.tag_list(), vec!["Art", " Expression", " Learn"]);
    }

    #[test]
    fn test_empty_tags_yield_empty_list() {
        let draft = PostDraft::validate(fields("hello")).unwrap();
        assert!(draft.tag_list().is_empty());
    }

    #[test]
    fn test_prefill_joins_tags() {
        let post = PostRecord::new("p1", "caption", UserId::new("u1"))
            .with_tags(["Art", "Learn"])
            .with_location("Oslo");
        let f = DraftFields::prefill(&post);
        assert_eq!(f.caption, "caption");
        assert_eq!(f.tags, "Art,Learn");
        assert_eq!(f.location, "Oslo");
        assert!(f.files.is_empty());
    }
}
