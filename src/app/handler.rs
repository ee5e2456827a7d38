use crate::core::analyzer::Analyzer;
use crate::domain::model::AnalysisRequest;
use crate::domain::ports::TextGenerator;
use crate::utils::error::ProfileError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Incoming event. `action` defaults to `analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(flatten)]
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl EventResponse {
    fn ok(body: serde_json::Value) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: json!({ "error": message.into() }),
        }
    }
}

pub async fn handle_event<G: TextGenerator>(
    analyzer: &Analyzer<G>,
    event: &EventRequest,
    evaluation_year: Option<i32>,
) -> EventResponse {
    match event.action.as_deref().unwrap_or("analyze") {
        "health" => EventResponse::ok(json!({ "status": "healthy" })),
        "analyze" => {
            let year = evaluation_year.unwrap_or_else(|| Local::now().year());
            match analyzer.analyze(&event.request, year).await {
                Ok(report) => match serde_json::to_value(&report) {
                    Ok(body) => EventResponse::ok(body),
                    Err(e) => {
                        let e = ProfileError::from(e);
                        tracing::error!("❌ Failed to serialize report: {}", e);
                        EventResponse::error(e.status_code(), e.user_friendly_message())
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        "Request rejected: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                    EventResponse::error(e.status_code(), e.user_friendly_message())
                }
            }
        }
        other => EventResponse::error(400, format!("unknown action: {}", other)),
    }
}
