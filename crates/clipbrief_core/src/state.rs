use crate::view_model::{AppViewModel, StepView};

/// Provider the backend falls back to when the request carries no override.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Providers offered by the shell's combo box, default first.
pub const PROVIDER_CHOICES: &[&str] = &["openai", "grok", "gemini"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Storage form of the preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Submitting,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Download,
    Transcribe,
    Summarize,
}

impl StepId {
    pub const ALL: [StepId; 3] = [StepId::Download, StepId::Transcribe, StepId::Summarize];

    pub fn display_name(self) -> &'static str {
        match self {
            StepId::Download => "Download video",
            StepId::Transcribe => "Transcribe audio",
            StepId::Summarize => "Generate summary",
        }
    }
}

/// One line in a step's append-only log. `at` is a preformatted wall-clock
/// stamp supplied by the shell; the core never reads a clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStep {
    pub id: StepId,
    pub completed: bool,
    pub in_progress: bool,
    pub progress: u8,
    pub output: Vec<LogEntry>,
}

impl ProcessStep {
    fn new(id: StepId) -> Self {
        Self {
            id,
            completed: false,
            in_progress: false,
            progress: 0,
            output: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    fn reset(&mut self) {
        self.completed = false;
        self.in_progress = false;
        self.progress = 0;
        self.output.clear();
    }

    fn log(&mut self, at: &str, text: impl Into<String>) {
        self.output.push(LogEntry {
            at: at.to_owned(),
            text: text.into(),
        });
    }
}

/// Aggregate request issued for one submission. Built fresh inside `update`;
/// never persisted. The API key lives only for the duration of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub url: String,
    pub base_path: Option<String>,
    pub api_key: Option<String>,
    pub api_provider: Option<String>,
}

/// Decoded result of the aggregate backend call, already mapped to plain
/// core types by the shell's effect runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub id: String,
    pub title: Option<String>,
    pub transcript_content: Option<String>,
    pub summary_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    theme: Theme,
    url_input: String,
    download_path: String,
    api_key: String,
    api_provider: String,
    run: RunState,
    steps: [ProcessStep; 3],
    transcript: String,
    summary: String,
    status: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            url_input: String::new(),
            download_path: String::new(),
            api_key: String::new(),
            api_provider: DEFAULT_PROVIDER.to_owned(),
            run: RunState::default(),
            steps: StepId::ALL.map(ProcessStep::new),
            transcript: String::new(),
            summary: String::new(),
            status: String::new(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let is_processing = self.run == RunState::Submitting;
        AppViewModel {
            theme: self.theme,
            url_input: self.url_input.clone(),
            download_path: self.download_path.clone(),
            api_key: self.api_key.clone(),
            api_provider: self.api_provider.clone(),
            run: self.run,
            is_processing,
            can_submit: !is_processing && !self.url_input.trim().is_empty(),
            steps: self
                .steps
                .iter()
                .map(|step| StepView {
                    id: step.id,
                    name: step.name(),
                    completed: step.completed,
                    in_progress: step.in_progress,
                    progress: step.progress,
                    output: step.output.clone(),
                })
                .collect(),
            transcript: self.transcript.clone(),
            summary: self.summary.clone(),
            status: self.status.clone(),
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to coalesce
    /// repaint requests.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn run(&self) -> RunState {
        self.run
    }

    pub fn is_processing(&self) -> bool {
        self.run == RunState::Submitting
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn download_path(&self) -> &str {
        &self.download_path
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_provider(&self) -> &str {
        &self.api_provider
    }

    pub fn steps(&self) -> &[ProcessStep; 3] {
        &self.steps
    }

    pub fn step(&self, id: StepId) -> &ProcessStep {
        self.steps
            .iter()
            .find(|step| step.id == id)
            .expect("all three steps exist for the lifetime of the state")
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        self.url_input = text;
        self.dirty = true;
    }

    pub(crate) fn set_download_path(&mut self, path: String) {
        self.download_path = path;
        self.dirty = true;
    }

    pub(crate) fn set_api_key(&mut self, key: String) {
        self.api_key = key;
        self.dirty = true;
    }

    pub(crate) fn set_api_provider(&mut self, provider: String) {
        self.api_provider = provider;
        self.dirty = true;
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    /// Enter `Submitting`: clear the previous run's output, reset every step,
    /// and give the download step its cosmetic kick. The 10% is an indicator
    /// for the user, not a backend-reported milestone.
    pub(crate) fn begin_run(&mut self, at: &str) {
        self.run = RunState::Submitting;
        self.transcript.clear();
        self.summary.clear();
        for step in &mut self.steps {
            step.reset();
        }
        self.status = "Processing video...".to_owned();
        let download = self.step_mut(StepId::Download);
        download.in_progress = true;
        download.progress = 10;
        download.log(at, "Requesting video download...");
        self.dirty = true;
    }

    /// Enter `Completed`. Every step is force-set to done with one log line
    /// each: the backend reports no per-stage milestones, only the aggregate
    /// result.
    pub(crate) fn apply_success(&mut self, outcome: PipelineOutcome, at: &str) {
        self.run = RunState::Completed;
        for step in &mut self.steps {
            let name = step.id.display_name();
            step.progress = 100;
            step.in_progress = false;
            step.completed = true;
            step.log(at, format!("{name} complete."));
        }
        if let Some(transcript) = outcome.transcript_content {
            self.transcript = transcript;
        }
        if let Some(summary) = outcome.summary_content {
            self.summary = summary;
        }
        let title = outcome.title.as_deref().unwrap_or("unknown title");
        self.status = format!("Processed \"{}\" (id {})", title, outcome.id);
        self.dirty = true;
    }

    /// Enter `Failed`. Only steps flagged in-progress receive an error line;
    /// steps that never started keep their prior fields untouched.
    pub(crate) fn apply_failure(&mut self, error: &str, at: &str) {
        self.run = RunState::Failed;
        self.status = format!("Processing failed: {error}");
        for step in &mut self.steps {
            if step.in_progress {
                step.in_progress = false;
                step.log(at, format!("Failed: {error}"));
            }
        }
        self.dirty = true;
    }

    fn step_mut(&mut self, id: StepId) -> &mut ProcessStep {
        self.steps
            .iter_mut()
            .find(|step| step.id == id)
            .expect("all three steps exist for the lifetime of the state")
    }
}
