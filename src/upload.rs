use std::path::Path;

use tracing::warn;

use crate::error::Error;

/// Public fallback used when no `-s` server was given.
pub const DEFAULT_ENDPOINT: &str = "https://0x0.st";

/// Pushes a finished log file to a paste endpoint and returns the share
/// URL from the response body. No retries; pacing between attempts is the
/// caller's concern.
pub trait Uploader {
    /// Endpoint the uploads target, for display next to the URL.
    fn endpoint(&self) -> &str;

    /// `warned` is the run-wide flag for the one-time public-endpoint
    /// warning; it is owned by the orchestrator and shared across pods.
    async fn upload(&self, path: &Path, expires: u32, warned: &mut bool) -> Result<String, Error>;
}

/// HTTP multipart implementation speaking the 0x0.st-style protocol:
/// a `file` part with the raw bytes and an `expires` text field.
pub struct HttpUploader {
    http: reqwest::Client,
    endpoint: String,
    default_endpoint: bool,
}

impl HttpUploader {
    pub fn new(endpoint: Option<String>) -> Self {
        let default_endpoint = endpoint.is_none();
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            default_endpoint,
        }
    }

    fn failed(&self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::Upload {
            endpoint: self.endpoint.clone(),
            source: source.into(),
        }
    }
}

impl Uploader for HttpUploader {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn upload(&self, path: &Path, expires: u32, warned: &mut bool) -> Result<String, Error> {
        if self.default_endpoint && !*warned {
            warn!(
                "no upload server configured, using the public default {DEFAULT_ENDPOINT} \
                 (everything uploaded there is publicly reachable)"
            );
            *warned = true;
        }

        let bytes = tokio::fs::read(path).await.map_err(|err| self.failed(err))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("logs")
            .to_string();
        let form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name))
            .text("expires", expires.to_string());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| self.failed(err))?;
        let body = response.text().await.map_err(|err| self.failed(err))?;
        Ok(body.trim().to_string())
    }
}
