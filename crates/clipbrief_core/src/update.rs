use crate::{AppState, Effect, Msg, PipelineRequest, RunState, DEFAULT_PROVIDER};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::DownloadPathChanged(text) => {
            state.set_download_path(text);
            Vec::new()
        }
        Msg::ApiKeyChanged(text) => {
            state.set_api_key(text);
            Vec::new()
        }
        Msg::ApiProviderChanged(name) => {
            state.set_api_provider(name);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let next = state.theme().flipped();
            state.set_theme(next);
            vec![Effect::ApplyTheme(next), Effect::PersistTheme(next)]
        }
        Msg::ThemeRestored(theme) => {
            // Restores come from storage or the system signal; re-persisting
            // them would turn every launch into a write.
            state.set_theme(theme);
            vec![Effect::ApplyTheme(theme)]
        }
        Msg::PickDownloadPathClicked => vec![Effect::PickDownloadPath],
        Msg::DownloadPathPicked(Some(path)) => {
            // Last-write-wins; a repeated pick simply replaces the path.
            state.set_download_path(path);
            Vec::new()
        }
        Msg::DownloadPathPicked(None) => Vec::new(),
        Msg::ProcessClicked { at } => {
            let url = state.url_input().trim().to_owned();
            if url.is_empty() {
                // Blank URL: silent no-op, matching the widget-level guard.
                return (state, Vec::new());
            }
            if state.run() == RunState::Submitting {
                // Single-flight: one aggregate request outstanding at most.
                return (state, Vec::new());
            }
            let request = PipelineRequest {
                url,
                base_path: blank_to_none(state.download_path()),
                api_key: blank_to_none(state.api_key()),
                api_provider: provider_override(state.api_provider()),
            };
            state.begin_run(&at);
            vec![Effect::SubmitPipeline(request)]
        }
        Msg::PipelineSettled { outcome, at } => {
            if state.run() != RunState::Submitting {
                // Stale settle for a run this state no longer tracks.
                return (state, Vec::new());
            }
            match outcome {
                Ok(result) => state.apply_success(result, &at),
                Err(error) => state.apply_failure(&error, &at),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn blank_to_none(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// The backend applies its own default provider; only a deviation from the
/// sentinel travels with the request.
fn provider_override(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == DEFAULT_PROVIDER {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
