use crate::api::types::{Job, UploadBody, UploadFile, UploadResponse};
use crate::config::ClipperConfig;
use crate::{ClipperError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Url};
use std::time::Duration;
use tokio_util::io::ReaderStream;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The two calls the dashboard makes against the job backend.
///
/// Neither call retries; the poller decides what to do with a failure.
#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    /// Upload an episode and get the new project id back.
    ///
    /// Resolves to [`ClipperError::Cancelled`] as soon as `cancel` fires.
    async fn create_job(
        &self,
        file: UploadFile,
        cancel: &CancellationToken,
    ) -> Result<UploadResponse>;

    /// Fetch the current state of a project.
    async fn get_job(&self, job_id: &str) -> Result<Job>;
}

#[derive(Debug, Clone)]
pub struct HttpJobApi {
    client: reqwest::Client,
    base_url: Url,
    upload_timeout: Duration,
}

impl HttpJobApi {
    pub fn new(config: &ClipperConfig) -> Result<Self> {
        let base_url = Url::parse(config.api_base_url.trim())
            .map_err(|e| ClipperError::Config(format!("invalid API base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClipperError::Config(format!(
                "API base URL cannot carry paths: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClipperError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            upload_timeout: config.upload_timeout(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait::async_trait]
impl JobApi for HttpJobApi {
    async fn create_job(
        &self,
        file: UploadFile,
        cancel: &CancellationToken,
    ) -> Result<UploadResponse> {
        let url = self.endpoint(&["jobs"]);
        debug!("Uploading {} ({} bytes) to {}", file.file_name, file.len(), url);

        let UploadFile {
            file_name,
            mime_type,
            size,
            body,
        } = file;
        let part = match body {
            UploadBody::Bytes(bytes) => Part::bytes(bytes),
            UploadBody::File(file) => {
                Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), size)
            }
        };
        let part = part.file_name(file_name).mime_str(&mime_type)?;
        let form = Form::new().part("file", part);

        let request = async {
            let response = self
                .client
                .post(url)
                .timeout(self.upload_timeout)
                .multipart(form)
                .send()
                .await?;
            let response = ensure_success(response).await?;
            Ok::<_, ClipperError>(response.json::<UploadResponse>().await?)
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(ClipperError::Cancelled),
            result = request => result,
        }
    }

    async fn get_job(&self, job_id: &str) -> Result<Job> {
        let url = self.endpoint(&["jobs", job_id]);
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Job>().await?)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(ClipperError::Http {
        status: status.as_u16(),
        message: text,
    })
}
