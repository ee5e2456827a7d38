use anyhow::Result;
use httpmock::prelude::*;
use natal_profile::app::handler::{handle_event, EventRequest};
use natal_profile::{
    AnalysisRequest, Analyzer, GeminiGenerator, GeneratorSettings, LambdaConfig, ProfileError,
};
use std::collections::HashMap;

fn settings_for(server: &MockServer) -> GeneratorSettings {
    GeneratorSettings {
        api_key: Some("integration-key".to_string()),
        api_base: server.url("/v1beta"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_with_mocked_gemini() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-1.5-flash:generateContent")
            .header("x-goog-api-key", "integration-key")
            .body_contains("四緑木星")
            .body_contains("Life Path (LP): 6");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "【戦略分析書: WASSHI 様】"}]}}]
            }));
    });

    let generator = GeminiGenerator::from_config(&settings_for(&server))?;
    let analyzer = Analyzer::new(generator);

    let report = analyzer
        .analyze(&AnalysisRequest::new("WASSHI", "1960-12-23"), 2026)
        .await?;

    api_mock.assert();
    assert_eq!(report.analysis, "【戦略分析書: WASSHI 様】");
    assert_eq!(report.numerology.personal_year, 9);
    assert_eq!(report.kigaku.position_name, "艮宮（北東）");
    Ok(())
}

#[tokio::test]
async fn test_upstream_failure_still_returns_profiles() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(500).body("internal");
    });

    let analyzer = Analyzer::new(GeminiGenerator::from_config(&settings_for(&server))?);
    let event: EventRequest = serde_json::from_value(serde_json::json!({
        "name": "WASSHI",
        "birth_date": "1960-12-23"
    }))?;

    let response = handle_event(&analyzer, &event, Some(2026)).await;

    api_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["numerology"]["life_path"], 6);
    let analysis = response.body["analysis"].as_str().unwrap_or_default();
    assert!(analysis.starts_with("エラーが発生しました"));
    assert!(analysis.contains("500"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_input_never_reaches_generator() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let analyzer = Analyzer::new(GeminiGenerator::from_config(&settings_for(&server))?);
    let result = analyzer
        .analyze(&AnalysisRequest::new("WASSHI", "1960-12-32"), 2026)
        .await;

    assert!(matches!(result, Err(ProfileError::InvalidDate { .. })));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_lambda_config_drives_generator() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-1.5-pro:generateContent")
            .header("x-goog-api-key", "lambda-key");
        then.status(200).json_body(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        }));
    });

    let env: HashMap<&str, String> = HashMap::from([
        ("GEMINI_API_KEY", "lambda-key".to_string()),
        ("GEMINI_MODEL", "gemini-1.5-pro".to_string()),
        ("GEMINI_API_BASE", server.url("")),
        ("EVALUATION_YEAR", "2026".to_string()),
    ]);
    let config = LambdaConfig::from_lookup(|key| env.get(key).cloned())?;

    let analyzer = Analyzer::new(GeminiGenerator::from_config(&config.generator)?);
    let event: EventRequest = serde_json::from_value(serde_json::json!({
        "name": "WASSHI",
        "birth_date": "1960-12-23"
    }))?;
    let response = handle_event(&analyzer, &event, config.evaluation_year).await;

    api_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["analysis"], "ok");
    assert_eq!(response.body["kigaku"]["current_position"], 8);
    Ok(())
}
