//! Clipbrief core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, LogEntry, PipelineOutcome, PipelineRequest, ProcessStep, RunState, StepId, Theme,
    DEFAULT_PROVIDER, PROVIDER_CHOICES,
};
pub use update::update;
pub use view_model::{AppViewModel, StepView};
