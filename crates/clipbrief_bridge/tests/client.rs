use clipbrief_bridge::{decode_response, BridgeError, HttpBackend, PipelineBackend, PipelineCall};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bare_call() -> PipelineCall {
    PipelineCall {
        url: "https://youtu.be/v1".to_owned(),
        base_path: None,
        api_key: None,
        api_provider: None,
    }
}

#[tokio::test]
async fn posts_nulls_for_absent_options_and_returns_payload_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pipeline/process"))
        .and(body_json(serde_json::json!({
            "url": "https://youtu.be/v1",
            "base_path": null,
            "api_key": null,
            "api_provider": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"v1","title":"T"}"#))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let payload = backend.process_video(&bare_call()).await.unwrap();

    // The payload comes back as text; decoding is the caller's separate step.
    assert_eq!(payload, r#"{"id":"v1","title":"T"}"#);
}

#[tokio::test]
async fn posts_populated_options_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pipeline/process"))
        .and(body_json(serde_json::json!({
            "url": "https://youtu.be/v1",
            "base_path": "/tmp/videos",
            "api_key": "sk-test",
            "api_provider": "grok",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"v1"}"#))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let call = PipelineCall {
        url: "https://youtu.be/v1".to_owned(),
        base_path: Some("/tmp/videos".to_owned()),
        api_key: Some("sk-test".to_owned()),
        api_provider: Some("grok".to_owned()),
    };
    backend.process_video(&call).await.unwrap();
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pipeline/process"))
        .respond_with(ResponseTemplate::new(500).set_body_string("yt-dlp exploded"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let err = backend.process_video(&bare_call()).await.unwrap_err();

    match err {
        BridgeError::Backend { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "yt-dlp exploded");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let backend = HttpBackend::new(uri);
    let err = backend.process_video(&bare_call()).await.unwrap_err();

    assert!(matches!(err, BridgeError::Transport(_)));
}

#[test]
fn decode_reads_full_payload() {
    let payload = r#"{
        "id": "v1",
        "title": "T",
        "transcript_content": "hello",
        "summary_content": "world"
    }"#;

    let response = decode_response(payload).unwrap();
    assert_eq!(response.id, "v1");
    assert_eq!(response.title.as_deref(), Some("T"));
    assert_eq!(response.transcript_content.as_deref(), Some("hello"));
    assert_eq!(response.summary_content.as_deref(), Some("world"));
}

#[test]
fn decode_defaults_missing_optionals_to_none() {
    let response = decode_response(r#"{"id":"v1"}"#).unwrap();
    assert_eq!(response.id, "v1");
    assert_eq!(response.title, None);
    assert_eq!(response.transcript_content, None);
    assert_eq!(response.summary_content, None);
}

#[test]
fn decode_rejects_malformed_payloads() {
    assert!(matches!(
        decode_response("not json at all"),
        Err(BridgeError::Decode(_))
    ));
    // A payload of the wrong shape fails the same way.
    assert!(matches!(
        decode_response(r#"{"title":"no id"}"#),
        Err(BridgeError::Decode(_))
    ));
}
