use crate::config::{GeneratorSettings, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use std::env;

/// Environment-driven configuration for the Lambda entry point.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub generator: GeneratorSettings,
    /// Fixed evaluation year, mainly for reproducible deployments.
    pub evaluation_year: Option<i32>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意來源讀取設定（測試時不必動到行程環境變數）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            generator: GeneratorSettings {
                api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: lookup("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout_secs: lookup("GENERATION_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
            evaluation_year: lookup("EVALUATION_YEAR").and_then(|v| v.parse().ok()),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        if let Some(year) = self.evaluation_year {
            validate_range("EVALUATION_YEAR", year, 1, 9999)?;
        }

        if !self.generator.has_api_key() {
            tracing::warn!("⚠️ GEMINI_API_KEY is not set; analysis will contain an error message");
        }
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
