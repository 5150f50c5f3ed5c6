use crate::e2e::helpers;

use helpers::fake_providers::{FakeReply, CLEANED_SCRIPT};
use helpers::{TestContext, TEST_GEMINI_KEY, TEST_GEMINI_MODEL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_context::test_context;

const DOCUMENT: &str = "Photosynthesis turns light, water and carbon dioxide into sugar.";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_speaker_modes_in_catalog_order(ctx: &TestContext) {
    let response = ctx.client.get("/api/speaker_modes").await.unwrap();

    response.assert_status(StatusCode::OK);

    let modes: Vec<String> = response.json().unwrap();
    assert_eq!(
        modes,
        vec![
            "friendly-teacher",
            "enthusiastic-storyteller",
            "calm-narrator",
            "podcast-host",
            "university-professor",
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_a_cleaned_script(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "friendly-teacher"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["script"], CLEANED_SCRIPT);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_persona_and_document_in_the_prompt(ctx: &TestContext) {
    ctx.client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "friendly-teacher"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let calls = ctx.providers.gemini_calls();
    assert_eq!(calls.len(), 1);

    let call = &calls[0];
    assert_eq!(call.model_call, format!("{}:generateContent", TEST_GEMINI_MODEL));
    assert_eq!(call.api_key.as_deref(), Some(TEST_GEMINI_KEY));
    assert!(call.prompt.contains("warm, patient teacher"));
    assert!(call.prompt.contains(DOCUMENT));
    assert_eq!(call.body["generationConfig"]["topK"], 40);

    // Persona comes before the document
    let persona_at = call.prompt.find("warm, patient teacher").unwrap();
    let document_at = call.prompt.find(DOCUMENT).unwrap();
    assert!(persona_at < document_at);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_archive_scripts_from_create_script(ctx: &TestContext) {
    ctx.client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "calm-narrator"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert!(TestContext::files_in(&ctx.scripts_dir).is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_speaker_mode_without_calling_the_provider(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "energetic-coach"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_detail("Invalid speaker mode: energetic-coach")
        .assert_error_detail("friendly-teacher");

    assert!(ctx.providers.gemini_calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_match_speaker_modes_case_sensitively(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "Friendly-Teacher"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_provider_failures_as_bad_gateway(ctx: &TestContext) {
    ctx.providers
        .set_gemini_reply(FakeReply::Status(StatusCode::INTERNAL_SERVER_ERROR));

    let response = ctx
        .client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "podcast-host"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_detail("Error generating script");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_time_out_slow_providers(ctx: &TestContext) {
    ctx.providers
        .set_gemini_reply(FakeReply::Delay(Duration::from_secs(5)));

    let response = ctx
        .client
        .post(
            "/api/create_script",
            &json!({"document_content": DOCUMENT, "speaker_mode": "podcast-host"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_detail("timed out");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/create_script", &json!({"speaker_mode": "podcast-host"}))
        .await
        .unwrap();

    assert!(response.status.is_client_error());
    assert!(ctx.providers.gemini_calls().is_empty());
}
