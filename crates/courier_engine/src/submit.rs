use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{SubmissionRequest, SubmitError, SubmitFailureKind, SubmitReceipt};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/submit";

/// Connection settings for the submission endpoint.
#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &SubmissionRequest) -> Result<SubmitReceipt, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(SubmitFailureKind::Network, err.to_string()))
    }
}

/// Shape of the endpoint's success reply; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ServerReply {
    message: String,
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, submission: &SubmissionRequest) -> Result<SubmitReceipt, SubmitError> {
        let endpoint = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| SubmitError::new(SubmitFailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        // Part order is fixed so the encoded body is reproducible. No other
        // headers are set; the multipart encoder picks the boundary.
        let mut form = Form::new()
            .text("title", submission.title.clone())
            .text("author", submission.author.clone());
        if let Some(file) = &submission.file {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)
                .map_err(map_reqwest_error)?;
            form = form.part("file", part);
        }

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // Rejected replies end here; their body is never consumed.
            return Err(SubmitError::new(
                SubmitFailureKind::Rejected {
                    status: status.as_u16(),
                },
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let reply: ServerReply = serde_json::from_slice(&body)
            .map_err(|err| SubmitError::new(SubmitFailureKind::MalformedReply, err.to_string()))?;

        Ok(SubmitReceipt {
            message: reply.message,
            status: status.as_u16(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(SubmitFailureKind::Timeout, err.to_string());
    }
    SubmitError::new(SubmitFailureKind::Network, err.to_string())
}
