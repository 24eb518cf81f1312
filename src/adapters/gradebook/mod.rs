//! Remote gradebook client
//!
//! Grade posting submits the assignment datatable, serialized to CSV, to a
//! remote gradebook service. The service either accepts the file or
//! returns an error message; the job driver surfaces that message as the
//! terminal step label of a FAILED report.

use crate::config::GradebookConfig;
use crate::domain::result::Result;
use crate::domain::{CourseId, RegistrarError};
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::Duration;

/// Response returned by the remote gradebook
///
/// `error_message` carries the server-side rejection reason when the
/// submission was not accepted; `None` means success. `message` is the
/// human-readable response body either way.
#[derive(Debug, Clone, Deserialize)]
pub struct GradebookResponse {
    /// Rejection reason, if any
    #[serde(default, rename = "error")]
    pub error_message: Option<String>,

    /// Response body message
    #[serde(default, rename = "msg")]
    pub message: String,
}

impl GradebookResponse {
    /// True when the server accepted the submission
    pub fn is_accepted(&self) -> bool {
        self.error_message.is_none()
    }
}

/// Remote gradebook interface
#[async_trait]
pub trait GradebookClient: Send + Sync {
    /// Posts a CSV datafile to the named gradebook endpoint.
    ///
    /// `action` selects the server-side operation (e.g. `post-grades`);
    /// `file_name` is the name the file part is submitted under.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Gradebook`] for transport-level failures
    /// (connection refused, timeout, non-2xx status, unparseable body).
    /// A well-formed rejection is NOT an error here; it arrives as a
    /// populated `error_message` in the response.
    async fn post_datafile(
        &self,
        endpoint_id: &str,
        course_id: &CourseId,
        action: &str,
        file_name: &str,
        csv_bytes: Vec<u8>,
    ) -> Result<GradebookResponse>;
}

/// HTTP implementation of [`GradebookClient`] backed by reqwest
pub struct HttpGradebookClient {
    base_url: String,
    client: Client,
    config: GradebookConfig,
}

impl HttpGradebookClient {
    /// Creates a client from gradebook configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URL is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: GradebookConfig) -> Result<Self> {
        let base_url = url::Url::parse(&config.base_url)
            .map_err(|e| {
                RegistrarError::Configuration(format!(
                    "Invalid gradebook base URL '{}': {}",
                    config.base_url, e
                ))
            })?
            .to_string();

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                RegistrarError::Gradebook(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GradebookClient for HttpGradebookClient {
    async fn post_datafile(
        &self,
        endpoint_id: &str,
        course_id: &CourseId,
        action: &str,
        file_name: &str,
        csv_bytes: Vec<u8>,
    ) -> Result<GradebookResponse> {
        let file_part = multipart::Part::bytes(csv_bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| RegistrarError::Gradebook(format!("Invalid file part: {e}")))?;

        let form = multipart::Form::new()
            .text("submit", action.to_string())
            .text("endpoint", endpoint_id.to_string())
            .text("course_id", course_id.as_str().to_string())
            .part("datafile", file_part);

        tracing::info!(
            endpoint = endpoint_id,
            course_id = %course_id,
            action = action,
            "Posting datafile to remote gradebook"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(self.config.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                RegistrarError::Gradebook(format!("Gradebook request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrarError::Gradebook(format!(
                "Gradebook returned {status}: {body}"
            )));
        }

        response.json::<GradebookResponse>().await.map_err(|e| {
            RegistrarError::Gradebook(format!("Unparseable gradebook response: {e}"))
        })
    }
}
