//! Blocking HTTP implementation of the backend contract.

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{IndexingBackend, UploadReceipt};
use crate::constants::{
    API_ASK_PATH, API_UPLOAD_PATH, ASK_FIELD_FILENAME, ASK_FIELD_QUERY, UPLOAD_FIELD_FILE,
};
use crate::error::{Result, SceneseekError};
use crate::types::{QueryAnswer, VideoIdentifier};

/// Wire shape of the upload response. Anything but `status == "success"`
/// is a failure, even on HTTP 200.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    status: String,
    #[serde(default)]
    filename: String,
}

/// Backend client speaking multipart HTTP, one request per call.
///
/// No timeouts are configured: failure signaling is the transport's own
/// (connection refused, reset, malformed body), which maps directly onto the
/// recoverable error paths of the calling flows.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    /// Client for a backend at `base_url`, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> HttpBackendBuilder {
        HttpBackendBuilder {
            base_url: base_url.into(),
            user_agent: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpBackendBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl HttpBackendBuilder {
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.user_agent = Some(value.into());
        self
    }

    pub fn build(self) -> HttpBackend {
        let mut builder = Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder.build().unwrap_or_else(|_| Client::new());
        HttpBackend {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http,
        }
    }
}

impl IndexingBackend for HttpBackend {
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<UploadReceipt> {
        let part = Part::bytes(bytes.to_vec()).file_name(filename.to_string());
        let form = Form::new().part(UPLOAD_FIELD_FILE, part);

        tracing::debug!(filename, size = bytes.len(), "submitting video for indexing");
        let response = self
            .http
            .post(self.endpoint(API_UPLOAD_PATH))
            .multipart(form)
            .send()
            .map_err(|err| SceneseekError::UploadFailed {
                reason: format!("transport error: {err}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SceneseekError::UploadFailed {
                reason: format!("backend returned {status}"),
            });
        }

        let body: UploadResponse =
            response.json().map_err(|err| SceneseekError::UploadFailed {
                reason: format!("unparseable upload response: {err}"),
            })?;
        if body.status != "success" {
            return Err(SceneseekError::UploadFailed {
                reason: format!("backend status {:?}", body.status),
            });
        }

        let identifier =
            VideoIdentifier::new(body.filename).map_err(|_| SceneseekError::UploadFailed {
                reason: "backend returned an empty filename".to_string(),
            })?;
        tracing::debug!(identifier = %identifier, "indexing accepted");
        Ok(UploadReceipt { identifier })
    }

    fn ask(&self, query: &str, identifier: &VideoIdentifier) -> Result<QueryAnswer> {
        let form = Form::new()
            .text(ASK_FIELD_QUERY, query.to_string())
            .text(ASK_FIELD_FILENAME, identifier.to_string());

        tracing::debug!(identifier = %identifier, "resolving query");
        let response = self
            .http
            .post(self.endpoint(API_ASK_PATH))
            .multipart(form)
            .send()
            .map_err(|err| SceneseekError::QueryFailed {
                reason: format!("transport error: {err}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SceneseekError::QueryFailed {
                reason: format!("backend returned {status}"),
            });
        }

        response.json().map_err(|err| SceneseekError::QueryFailed {
            reason: format!("unparseable answer: {err}"),
        })
    }
}
