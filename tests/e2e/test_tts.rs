use crate::e2e::helpers;

use helpers::fake_providers::{FakeReply, FAKE_MP3};
use helpers::{TestContext, TEST_ELEVENLABS_KEY};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_speech_to_a_file(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/text_to_speech",
            &json!({"text": "Welcome to today's lesson about rivers."}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "success");

    let audio_path = PathBuf::from(body["audio_file_path"].as_str().unwrap());
    assert_eq!(audio_path.extension().unwrap(), "mp3");
    assert_eq!(audio_path.parent().unwrap(), ctx.audio_dir.as_path());
    assert_eq!(std::fs::read(&audio_path).unwrap(), FAKE_MP3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_voice_defaults(ctx: &TestContext) {
    ctx.client
        .post("/api/text_to_speech", &json!({"text": "Hello there."}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let calls = ctx.providers.elevenlabs_calls();
    assert_eq!(calls.len(), 1);

    let call = &calls[0];
    assert_eq!(call.voice_id, "21m00Tcm4TlvDq8ikWAM");
    assert_eq!(call.api_key.as_deref(), Some(TEST_ELEVENLABS_KEY));
    assert_eq!(call.body["text"], "Hello there.");
    assert_eq!(call.body["model_id"], "eleven_multilingual_v2");
    assert_eq!(call.body["voice_settings"]["stability"], 0.5);
    assert_eq!(call.body["voice_settings"]["similarity_boost"], 0.5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_custom_voice_settings(ctx: &TestContext) {
    ctx.client
        .post(
            "/api/text_to_speech",
            &json!({
                "text": "Custom voice.",
                "voice_id": "custom-voice",
                "model_id": "eleven_turbo_v2",
                "stability": 0.25,
                "similarity_boost": 0.75
            }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let calls = ctx.providers.elevenlabs_calls();
    let call = &calls[0];
    assert_eq!(call.voice_id, "custom-voice");
    assert_eq!(call.body["model_id"], "eleven_turbo_v2");
    assert_eq!(call.body["voice_settings"]["stability"], 0.25);
    assert_eq!(call.body["voice_settings"]["similarity_boost"], 0.75);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_write_a_new_file_per_request(ctx: &TestContext) {
    for _ in 0..2 {
        ctx.client
            .post("/api/text_to_speech", &json!({"text": "Same text twice."}))
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    assert_eq!(TestContext::files_in(&ctx.audio_dir).len(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_out_of_range_settings_without_calling_the_provider(
    ctx: &TestContext,
) {
    let response = ctx
        .client
        .post(
            "/api/text_to_speech",
            &json!({"text": "Too stable.", "stability": 1.5}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_detail("stability");

    assert!(ctx.providers.elevenlabs_calls().is_empty());
    assert!(TestContext::files_in(&ctx.audio_dir).is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/text_to_speech", &json!({"text": "   "}))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.providers.elevenlabs_calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_provider_failures_as_bad_gateway(ctx: &TestContext) {
    ctx.providers
        .set_elevenlabs_reply(FakeReply::Status(StatusCode::UNAUTHORIZED));

    let response = ctx
        .client
        .post("/api/text_to_speech", &json!({"text": "Will fail."}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_detail("Error generating speech");

    assert!(TestContext::files_in(&ctx.audio_dir).is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_the_mp3(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/text_to_speech/download",
            &json!({"text": "Download me."}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("content-type", "audio/mpeg");
    assert_eq!(response.body_bytes, FAKE_MP3);

    let disposition = response.header("content-disposition").unwrap();
    assert!(disposition.starts_with("attachment; filename=\""));
    assert!(disposition.ends_with(".mp3\""));

    // The file is kept on disk as well
    assert_eq!(TestContext::files_in(&ctx.audio_dir).len(), 1);
}
