//! Pure Appwrite REST API client.
//!
//! A minimal client for the Appwrite platform API. Supports uploading files
//! to storage buckets, deriving public view URLs, and creating/updating
//! documents in database collections.
//!
//! # Example
//!
//! ```rust,ignore
//! use appwrite_client::{AppwriteClient, AppwriteConfig};
//!
//! let client = AppwriteClient::new(AppwriteConfig::from_env()?)?;
//!
//! let file = client
//!     .create_file("media", "b1c2d3", "sunset.png", Some("image/png"), bytes)
//!     .await?;
//! println!("{}", client.file_view_url("media", &file.id));
//! ```

pub mod error;
pub mod types;

pub use error::{AppwriteError, Result};
pub use types::{Document, ErrorBody, StorageFile};

use serde_json::Value;
use url::Url;

use types::{CreateDocumentBody, UpdateDocumentBody};

/// Configuration for [`AppwriteClient`].
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// API endpoint, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,

    /// Project identifier, sent as `X-Appwrite-Project`.
    pub project_id: String,

    /// API key, sent as `X-Appwrite-Key`.
    pub api_key: String,
}

impl AppwriteConfig {
    /// Read configuration from `APPWRITE_ENDPOINT`, `APPWRITE_PROJECT_ID`
    /// and `APPWRITE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint: std::env::var("APPWRITE_ENDPOINT")
                .map_err(|_| AppwriteError::MissingEnv("APPWRITE_ENDPOINT"))?,
            project_id: std::env::var("APPWRITE_PROJECT_ID")
                .map_err(|_| AppwriteError::MissingEnv("APPWRITE_PROJECT_ID"))?,
            api_key: std::env::var("APPWRITE_API_KEY")
                .map_err(|_| AppwriteError::MissingEnv("APPWRITE_API_KEY"))?,
        })
    }
}

pub struct AppwriteClient {
    client: reqwest::Client,
    endpoint: Url,
    project_id: String,
    api_key: String,
}

impl AppwriteClient {
    /// Build a client from configuration. Fails if the endpoint is not a
    /// usable base URL.
    pub fn new(config: AppwriteConfig) -> Result<Self> {
        let endpoint = Url::parse(config.endpoint.trim_end_matches('/'))?;
        if endpoint.cannot_be_a_base() {
            return Err(AppwriteError::InvalidEndpoint(
                url::ParseError::RelativeUrlWithoutBase,
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            project_id: config.project_id,
            api_key: config.api_key,
        })
    }

    /// Upload a file to a storage bucket under a caller-chosen file id.
    ///
    /// Appwrite treats the upload as committed once this call returns, so a
    /// successful return means the file is immediately readable through
    /// [`file_view_url`](Self::file_view_url).
    pub async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        file_name: &str,
        mime_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<StorageFile> {
        let url = format!("{}/storage/buckets/{}/files", self.endpoint, bucket_id);

        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = mime_type {
            part = part.mime_str(mime)?;
        }
        let form = reqwest::multipart::Form::new()
            .text("fileId", file_id.to_string())
            .part("file", part);

        let resp = self
            .client
            .post(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), resp).await);
        }

        let file: StorageFile = resp.json().await?;
        tracing::debug!(file_id = %file.id, bucket_id, "File uploaded");
        Ok(file)
    }

    /// Public view URL for a stored file.
    ///
    /// Pure derivation; does not check that the file exists.
    pub fn file_view_url(&self, bucket_id: &str, file_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            // `new` rejects cannot-be-a-base endpoints, so this cannot fail.
            let mut segments = url
                .path_segments_mut()
                .expect("endpoint is a base URL");
            segments.extend(["storage", "buckets", bucket_id, "files", file_id, "view"]);
        }
        url.query_pairs_mut().append_pair("project", &self.project_id);
        url
    }

    /// Delete a file from a storage bucket.
    pub async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<()> {
        let url = format!(
            "{}/storage/buckets/{}/files/{}",
            self.endpoint, bucket_id, file_id
        );

        let resp = self
            .client
            .delete(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), resp).await);
        }

        tracing::debug!(file_id, bucket_id, "File deleted");
        Ok(())
    }

    /// Create a document in a collection under a caller-chosen document id.
    pub async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, database_id, collection_id
        );

        let body = CreateDocumentBody {
            document_id: document_id.to_string(),
            data,
        };

        let resp = self
            .client
            .post(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), resp).await);
        }

        let doc: Document = resp.json().await?;
        tracing::debug!(document_id = %doc.id, collection_id, "Document created");
        Ok(doc)
    }

    /// Replace the data of an existing document.
    ///
    /// Returns `Ok(None)` when the document no longer exists (HTTP 404);
    /// other non-success statuses are errors.
    pub async fn update_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Option<Document>> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents/{}",
            self.endpoint, database_id, collection_id, document_id
        );

        let resp = self
            .client
            .patch(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .json(&UpdateDocumentBody { data })
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 404 {
            tracing::debug!(document_id, collection_id, "Document not found on update");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), resp).await);
        }

        let doc: Document = resp.json().await?;
        tracing::debug!(document_id = %doc.id, collection_id, "Document updated");
        Ok(Some(doc))
    }

    /// Turn a non-success response into an [`AppwriteError::Api`], parsing
    /// the structured error body when the server sent one.
    async fn api_error(status: u16, resp: reqwest::Response) -> AppwriteError {
        let body = resp.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => AppwriteError::Api {
                status,
                kind: parsed.error_type,
                message: parsed.message,
            },
            Err(_) => AppwriteError::Api {
                status,
                kind: String::new(),
                message: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AppwriteClient {
        AppwriteClient::new(AppwriteConfig {
            endpoint: "https://cloud.appwrite.io/v1/".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_file_view_url_shape() {
        let client = test_client();
        let url = client.file_view_url("media", "abc-123");
        assert_eq!(
            url.as_str(),
            "https://cloud.appwrite.io/v1/storage/buckets/media/files/abc-123/view?project=proj"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_normalized() {
        let client = test_client();
        // Trailing slash must not produce double slashes in derived paths.
        assert_eq!(client.endpoint.as_str(), "https://cloud.appwrite.io/v1");
    }

    #[test]
    fn test_rejects_non_base_endpoint() {
        let result = AppwriteClient::new(AppwriteConfig {
            endpoint: "mailto:admin@example.com".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
        });
        assert!(result.is_err());
    }
}
