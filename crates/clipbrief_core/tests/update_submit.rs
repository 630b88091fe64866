use std::sync::Once;

use clipbrief_core::{
    update, AppState, Effect, Msg, PipelineOutcome, PipelineRequest, RunState, StepId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bridge_logging::initialize_for_tests);
}

fn submit(state: AppState, at: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::ProcessClicked { at: at.to_owned() })
}

#[test]
fn submit_enters_submitting_and_kicks_download_step() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UrlChanged("https://youtu.be/v1".to_owned()),
    );

    let (next, effects) = submit(state, "10:00:00");
    let view = next.view();

    assert_eq!(view.run, RunState::Submitting);
    assert!(view.is_processing);
    assert!(!view.can_submit);
    assert_eq!(view.status, "Processing video...");
    assert_eq!(
        effects,
        vec![Effect::SubmitPipeline(PipelineRequest {
            url: "https://youtu.be/v1".to_owned(),
            base_path: None,
            api_key: None,
            api_provider: None,
        })]
    );

    let download = next.step(StepId::Download);
    assert!(download.in_progress);
    assert_eq!(download.progress, 10);
    assert_eq!(download.output.len(), 1);
    assert_eq!(download.output[0].at, "10:00:00");
    for id in [StepId::Transcribe, StepId::Summarize] {
        let step = next.step(id);
        assert!(!step.in_progress);
        assert_eq!(step.progress, 0);
        assert!(step.output.is_empty());
    }
}

#[test]
fn submit_clears_previous_run_output() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UrlChanged("https://youtu.be/v1".to_owned()),
    );
    let (state, _) = submit(state, "10:00:00");
    let (state, _) = update(
        state,
        Msg::PipelineSettled {
            outcome: Ok(PipelineOutcome {
                id: "v1".to_owned(),
                title: Some("T".to_owned()),
                transcript_content: Some("hello".to_owned()),
                summary_content: Some("world".to_owned()),
            }),
            at: "10:01:00".to_owned(),
        },
    );
    assert_eq!(state.transcript(), "hello");

    let (next, _) = submit(state, "10:02:00");

    assert_eq!(next.run(), RunState::Submitting);
    assert_eq!(next.transcript(), "");
    assert_eq!(next.summary(), "");
    assert_eq!(next.status(), "Processing video...");
    for step in next.steps() {
        assert!(!step.completed);
    }
    // The fresh download kick is the only log line anywhere.
    let total_lines: usize = next.steps().iter().map(|s| s.output.len()).sum();
    assert_eq!(total_lines, 1);
}

#[test]
fn blank_url_submit_is_silent_noop() {
    init_logging();
    for input in ["", "   ", "\t\n"] {
        let (state, _) = update(AppState::new(), Msg::UrlChanged(input.to_owned()));
        let before = state.clone();

        let (next, effects) = submit(state, "10:00:00");

        assert_eq!(next, before);
        assert!(effects.is_empty());
        assert_eq!(next.run(), RunState::Idle);
    }
}

#[test]
fn resubmit_while_submitting_is_noop() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UrlChanged("https://youtu.be/v1".to_owned()),
    );
    let (state, first) = submit(state, "10:00:00");
    assert_eq!(first.len(), 1);

    let before = state.clone();
    let (next, effects) = submit(state, "10:00:05");

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn request_url_is_trimmed() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UrlChanged("  https://youtu.be/v1  ".to_owned()),
    );

    let (_, effects) = submit(state, "10:00:00");

    match &effects[0] {
        Effect::SubmitPipeline(request) => assert_eq!(request.url, "https://youtu.be/v1"),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn blank_optionals_and_default_provider_are_elided() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::UrlChanged("https://youtu.be/v1".to_owned()));
    let (state, _) = update(state, Msg::DownloadPathChanged("   ".to_owned()));
    let (state, _) = update(state, Msg::ApiKeyChanged(String::new()));
    let (state, _) = update(state, Msg::ApiProviderChanged("openai".to_owned()));

    let (_, effects) = submit(state, "10:00:00");

    match &effects[0] {
        Effect::SubmitPipeline(request) => {
            assert_eq!(request.base_path, None);
            assert_eq!(request.api_key, None);
            assert_eq!(request.api_provider, None);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn non_default_fields_travel_trimmed() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::UrlChanged("https://youtu.be/v1".to_owned()));
    let (state, _) = update(state, Msg::DownloadPathChanged(" /tmp/videos ".to_owned()));
    let (state, _) = update(state, Msg::ApiKeyChanged("sk-test".to_owned()));
    let (state, _) = update(state, Msg::ApiProviderChanged("grok".to_owned()));

    let (_, effects) = submit(state, "10:00:00");

    match &effects[0] {
        Effect::SubmitPipeline(request) => {
            assert_eq!(request.base_path.as_deref(), Some("/tmp/videos"));
            assert_eq!(request.api_key.as_deref(), Some("sk-test"));
            assert_eq!(request.api_provider.as_deref(), Some("grok"));
        }
        other => panic!("unexpected effect {other:?}"),
    }
}
