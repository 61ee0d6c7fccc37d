//! Every public operation fails with the single uniform error kind.

mod common;

use common::{unreachable_client, MockApi};
use elevenlabs_rust::types::{EditVoiceSettings, TextToSpeechRequest, VoiceSettings};
use elevenlabs_rust::{ElevenLabsClient, Error};
use std::error::Error as _;
use tokio_test::assert_err;

fn tts() -> TextToSpeechRequest {
    TextToSpeechRequest::new("v1", "hi", VoiceSettings::new(0.5, 0.5))
}

/// Call every operation and collect the errors they return.
async fn all_errors(client: &ElevenLabsClient) -> Vec<(&'static str, Error)> {
    let settings = VoiceSettings::new(0.5, 0.5);
    let edit = EditVoiceSettings::new(0.5, 0.5);
    vec![
        ("list_voices", assert_err!(client.list_voices().await)),
        ("get_voice", assert_err!(client.get_voice("v1").await)),
        ("create_voice", assert_err!(client.create_voice("n", &[]).await)),
        ("update_voice", assert_err!(client.update_voice("v1", "n", &[]).await)),
        ("delete_voice", assert_err!(client.delete_voice("v1").await)),
        ("get_voice_settings", assert_err!(client.get_voice_settings("v1").await)),
        (
            "update_voice_settings",
            assert_err!(client.update_voice_settings("v1", &settings).await),
        ),
        (
            "edit_voice_settings",
            assert_err!(client.edit_voice_settings("v1", &edit).await),
        ),
        ("synthesize_speech", assert_err!(client.synthesize_speech(&tts()).await)),
        (
            "synthesize_speech_stream",
            assert_err!(client.synthesize_speech_stream("v1", &tts()).await),
        ),
        ("get_history", assert_err!(client.get_history().await)),
        ("get_user", assert_err!(client.get_user().await)),
        ("get_subscription", assert_err!(client.get_subscription().await)),
    ]
}

#[tokio::test]
async fn non_success_status_is_request_failed_everywhere() {
    let mut api = MockApi::new().await;
    let body = r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#;
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "DELETE"] {
        mocks.push(api.mock_error_any(method, 401, body).await);
    }

    let errors = all_errors(&api.client).await;
    assert_eq!(errors.len(), 13);
    for (operation, err) in errors {
        match &err {
            Error::RequestFailed { context, .. } => {
                assert_eq!(context.source.as_deref(), Some(operation));
                assert_eq!(context.status, Some(401), "{}", operation);
                assert!(context.details.as_deref().unwrap_or("").contains("invalid_api_key"));
            }
            other => panic!("{}: unexpected error {:?}", operation, other),
        }
        assert!(err.source().is_some(), "{} should keep its cause", operation);
    }
}

#[tokio::test]
async fn server_errors_keep_their_status() {
    let mut api = MockApi::new().await;
    let _m = api.mock_error_any("GET", 503, r#"{"detail":"overloaded"}"#).await;

    let err = assert_err!(api.client.get_user().await);
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("get_user"));
}

#[tokio::test]
async fn network_failure_is_request_failed_everywhere() {
    let client = unreachable_client();
    for (operation, err) in all_errors(&client).await {
        assert!(
            matches!(err, Error::RequestFailed { .. }),
            "{}: {:?}",
            operation,
            err
        );
        assert_eq!(err.status(), None, "{} never got a response", operation);
    }
}

#[tokio::test]
async fn malformed_json_is_request_failed() {
    let mut api = MockApi::new().await;
    let _m = api.mock_json("GET", "/v1/voices/v1", "{not json").await;
    let _s = api.mock_json("GET", "/v1/voices/v1/settings", r#"{"stability":"high"}"#).await;

    let err = assert_err!(api.client.get_voice("v1").await);
    assert!(matches!(err, Error::RequestFailed { .. }));
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.context().unwrap().details.as_deref(), Some("{not json"));

    let err = assert_err!(api.client.get_voice_settings("v1").await);
    assert!(matches!(err, Error::RequestFailed { .. }));
}

#[tokio::test]
async fn malformed_body_fails_every_decoding_operation() {
    let mut api = MockApi::new().await;
    let _get = api.mock_error_any("GET", 200, "{not json").await;
    let _post = api.mock_error_any("POST", 200, "{not json").await;
    let settings = VoiceSettings::new(0.5, 0.5);
    let edit = EditVoiceSettings::new(0.5, 0.5);

    let errors = vec![
        ("list_voices", assert_err!(api.client.list_voices().await)),
        ("get_voice", assert_err!(api.client.get_voice("v1").await)),
        ("create_voice", assert_err!(api.client.create_voice("n", &[]).await)),
        ("update_voice", assert_err!(api.client.update_voice("v1", "n", &[]).await)),
        ("get_voice_settings", assert_err!(api.client.get_voice_settings("v1").await)),
        (
            "update_voice_settings",
            assert_err!(api.client.update_voice_settings("v1", &settings).await),
        ),
        (
            "edit_voice_settings",
            assert_err!(api.client.edit_voice_settings("v1", &edit).await),
        ),
        ("get_history", assert_err!(api.client.get_history().await)),
        ("get_user", assert_err!(api.client.get_user().await)),
        ("get_subscription", assert_err!(api.client.get_subscription().await)),
    ];
    for (operation, err) in errors {
        match &err {
            Error::RequestFailed { context, .. } => {
                assert_eq!(context.source.as_deref(), Some(operation));
                assert_eq!(context.status, Some(200), "{}", operation);
                assert_eq!(context.details.as_deref(), Some("{not json"), "{}", operation);
            }
            other => panic!("{}: unexpected error {:?}", operation, other),
        }
        assert!(err.source().is_some(), "{} should keep its cause", operation);
    }
}

#[tokio::test]
async fn malformed_lists_are_request_failed() {
    let cases = [
        ("/v1/voices", "[{\"voice_id\":[]}]"),
        ("/v1/voices", r#"{"voices":"x"}"#),
        ("/v1/voices", r#"{"count":1}"#),
        ("/v1/history", r#"{"history":[{"text":1}]}"#),
        ("/v1/history", "[{\"date_unix\":\"yesterday\"}]"),
    ];
    for (path, body) in cases {
        let mut api = MockApi::new().await;
        let _m = api.mock_json("GET", path, body).await;
        let err = if path.ends_with("voices") {
            assert_err!(api.client.list_voices().await)
        } else {
            assert_err!(api.client.get_history().await)
        };
        assert!(matches!(err, Error::RequestFailed { .. }), "{}: {:?}", body, err);
        assert_eq!(err.status(), Some(200), "{}", body);
        assert!(!err.to_string().contains("did not match any variant"), "{}", body);
    }
}
