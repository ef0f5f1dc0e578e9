//! Essay API client: submission and image transcription.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::problem::ApiResult;

#[derive(Debug, Clone, Serialize)]
pub struct EssaySubmission {
    pub essay_text: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssaySubmissionResponse {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    pub essay_id: String,
    #[serde(default)]
    pub correction_status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageTranscription {
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTranscriptionResponse {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub extracted_text: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Typed wrapper for the essay feature area.
///
/// Pure request/response shaping; no business logic, no retries.
#[async_trait]
pub trait EssayApi: Send + Sync {
    async fn submit_essay(&self, submission: EssaySubmission)
    -> ApiResult<EssaySubmissionResponse>;

    async fn transcribe_image(
        &self,
        request: ImageTranscription,
    ) -> ApiResult<ImageTranscriptionResponse>;
}

/// HTTP implementation over the shared [`ApiClient`].
pub struct HttpEssayApi {
    api: Arc<ApiClient>,
}

impl HttpEssayApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EssayApi for HttpEssayApi {
    async fn submit_essay(
        &self,
        submission: EssaySubmission,
    ) -> ApiResult<EssaySubmissionResponse> {
        self.api.post("/dev/submit-text", &submission).await
    }

    async fn transcribe_image(
        &self,
        request: ImageTranscription,
    ) -> ApiResult<ImageTranscriptionResponse> {
        self.api.post("/dev/image-transcription", &request).await
    }
}
