use crate::{LogEntry, RunState, StepId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub theme: Theme,
    pub url_input: String,
    pub download_path: String,
    pub api_key: String,
    pub api_provider: String,
    pub run: RunState,
    pub is_processing: bool,
    /// URL non-blank and no run outstanding.
    pub can_submit: bool,
    pub steps: Vec<StepView>,
    pub transcript: String,
    pub summary: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub id: StepId,
    pub name: &'static str,
    pub completed: bool,
    pub in_progress: bool,
    pub progress: u8,
    pub output: Vec<LogEntry>,
}
