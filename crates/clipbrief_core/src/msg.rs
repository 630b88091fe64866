use crate::{PipelineOutcome, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the video URL input box.
    UrlChanged(String),
    /// User edited the download path field by hand.
    DownloadPathChanged(String),
    /// User edited the API key field.
    ApiKeyChanged(String),
    /// User picked a provider from the combo box.
    ApiProviderChanged(String),
    /// User clicked the theme toggle.
    ThemeToggled,
    /// Startup restore of the persisted (or system-resolved) preference.
    ThemeRestored(Theme),
    /// User clicked the browse button next to the download path.
    PickDownloadPathClicked,
    /// Gateway resolution; `None` means the user cancelled and the stored
    /// path stays as it was.
    DownloadPathPicked(Option<String>),
    /// User clicked the process button. `at` stamps the first log line.
    ProcessClicked { at: String },
    /// The aggregate backend call settled, one way or the other. Failures
    /// arrive already stringified; the kind of failure is not recoverable
    /// from here.
    PipelineSettled {
        outcome: Result<PipelineOutcome, String>,
        at: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
