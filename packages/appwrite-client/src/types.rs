//! Wire types for the Appwrite REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document in an Appwrite database collection.
///
/// Appwrite flattens user fields into the same object as the `$`-prefixed
/// system fields, so user data is captured through `#[serde(flatten)]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "$id")]
    pub id: String,

    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,

    #[serde(rename = "$databaseId", default)]
    pub database_id: String,

    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// User-defined fields of the document.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Document {
    /// Get a user field as a string, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }
}

/// A file stored in an Appwrite storage bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageFile {
    #[serde(rename = "$id")]
    pub id: String,

    #[serde(rename = "bucketId", default)]
    pub bucket_id: String,

    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,

    pub name: String,

    #[serde(rename = "mimeType", default)]
    pub mime_type: String,

    #[serde(rename = "sizeOriginal", default)]
    pub size_original: u64,
}

/// Body sent when creating a document.
#[derive(Debug, Serialize)]
pub struct CreateDocumentBody {
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub data: Value,
}

/// Body sent when updating a document.
#[derive(Debug, Serialize)]
pub struct UpdateDocumentBody {
    pub data: Value,
}

/// Error body returned by the Appwrite API on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(default)]
    pub code: u16,

    #[serde(rename = "type", default)]
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_flattens_user_fields() {
        let json = r#"{
            "$id": "doc1",
            "$collectionId": "posts",
            "$databaseId": "main",
            "$createdAt": "2024-01-15T09:00:00.000+00:00",
            "$updatedAt": "2024-01-15T09:00:00.000+00:00",
            "caption": "hello",
            "imageUrl": "https://files.example/view"
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc1");
        assert_eq!(doc.collection_id, "posts");
        assert_eq!(doc.str_field("caption"), Some("hello"));
        assert_eq!(doc.str_field("imageUrl"), Some("https://files.example/view"));
        assert_eq!(doc.str_field("missing"), None);
    }

    #[test]
    fn test_error_body_parses_partial() {
        let json = r#"{"message": "Document with the requested ID could not be found.", "code": 404, "type": "document_not_found"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, 404);
        assert_eq!(body.error_type, "document_not_found");

        // Older server versions omit `type`
        let json = r#"{"message": "nope"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error_type, "");
    }
}
