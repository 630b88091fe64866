use crate::{PipelineRequest, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the aggregate request to the backend bridge.
    SubmitPipeline(PipelineRequest),
    /// Ask the environment for a download directory.
    PickDownloadPath,
    /// Apply the theme's visual style to the running shell.
    ApplyTheme(Theme),
    /// Write the theme preference to the state file.
    PersistTheme(Theme),
}
