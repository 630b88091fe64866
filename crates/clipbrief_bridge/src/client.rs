use async_trait::async_trait;

use crate::{BridgeError, PipelineCall, PipelineResponse};

/// The aggregate backend call: one request covering download, transcription
/// and summarization, with no intermediate progress exposed to the caller.
#[async_trait]
pub trait PipelineBackend: Send + Sync {
    /// Returns the raw JSON text payload on success.
    async fn process_video(&self, call: &PipelineCall) -> Result<String, BridgeError>;
}

/// Backend reachable over HTTP at a fixed base URL.
///
/// The client sets no request timeout; timeout policy lives in the backend
/// and the transport underneath it.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/pipeline/process", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PipelineBackend for HttpBackend {
    async fn process_video(&self, call: &PipelineCall) -> Result<String, BridgeError> {
        let response = self.client.post(self.endpoint()).json(call).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BridgeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Parse the payload text into the typed response. Callers route the error
/// into the same settle path as transport failures.
pub fn decode_response(payload: &str) -> Result<PipelineResponse, BridgeError> {
    Ok(serde_json::from_str(payload)?)
}
