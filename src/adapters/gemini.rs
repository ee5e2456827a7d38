use crate::domain::ports::{ConfigProvider, TextGenerator};
use crate::utils::error::{GenerationError, ProfileError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Model names checked by `check_models`, most stable first.
pub const CANDIDATE_MODELS: [(&str, &str); 5] = [
    ("gemini-1.5-flash", "most stable (recommended)"),
    ("gemini-1.5-flash-latest", "latest 1.5-flash"),
    ("gemini-1.5-pro", "higher accuracy"),
    ("gemini-1.5-pro-latest", "latest 1.5-pro"),
    ("gemini-2.0-flash-exp", "experimental (unstable)"),
];

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiGenerator {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiGenerator {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProfileError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key().map(str::to_string),
            model: config.model().to_string(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
        })
    }

    fn api_key(&self) -> std::result::Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.api_base, model)
    }

    /// Checks whether `model` is visible to the configured key.
    pub async fn model_available(&self, model: &str) -> std::result::Result<bool, GenerationError> {
        let api_key = self.api_key()?;
        let response = self
            .client
            .get(self.model_url(model))
            .header("x-goog-api-key", api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Model lookup {} -> {}", model, status);
        match status {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            s => Err(GenerationError::Http {
                status: s.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let api_key = self.api_key()?;
        let url = format!("{}:generateContent", self.model_url(&self.model));
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("Making generation request to: {}", url);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generation response status: {}", status);
        if !status.is_success() {
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
