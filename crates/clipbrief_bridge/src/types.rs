use serde::{Deserialize, Serialize};

/// Wire form of the aggregate request. Absent options serialize as `null`;
/// the backend substitutes its own defaults for nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineCall {
    pub url: String,
    pub base_path: Option<String>,
    pub api_key: Option<String>,
    pub api_provider: Option<String>,
}

/// Wire form of the backend's aggregate result. Optional fields default to
/// `None` when the payload omits them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineResponse {
    pub id: String,
    pub title: Option<String>,
    pub transcript_content: Option<String>,
    pub summary_content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("pipeline request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend reported failure (status {status}): {body}")]
    Backend { status: u16, body: String },
    #[error("malformed pipeline response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Events delivered from the bridge thread back to the shell.
#[derive(Debug)]
pub enum BridgeEvent {
    /// The aggregate call settled. Transport, backend and decode failures all
    /// arrive through the same arm.
    PipelineSettled {
        result: Result<PipelineResponse, BridgeError>,
    },
    /// The path gateway resolved; `None` means the user cancelled.
    PathPicked { path: Option<String> },
}
