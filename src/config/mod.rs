pub mod lambda;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the text-generation backend, after all layers are merged.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// api_key 不寫進日誌
impl std::fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeneratorSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl ConfigProvider for GeneratorSettings {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model", &self.model)?;
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 600)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "natal-profile")]
#[command(about = "Numerology and nine-star ki profiles with a generated strategy report")]
pub struct CliConfig {
    /// Name used for the destiny and soul numbers
    #[arg(long)]
    pub name: String,

    /// Birth date in YYYY-MM-DD format
    #[arg(long)]
    pub birth_date: String,

    /// Year to evaluate against (defaults to the current year)
    #[arg(long)]
    pub evaluation_year: Option<i32>,

    /// Skip the text-generation step
    #[arg(long)]
    pub no_analysis: bool,

    /// Optional TOML file with generator settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads and validates the `--config` file, if one was given.
    pub fn file_config(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        tracing::debug!("📄 Loading config file {}", path);
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        Ok(Some(file))
    }

    pub fn generator_settings(&self) -> Result<GeneratorSettings> {
        self.generator_settings_with(self.file_config()?.as_ref())
    }

    /// 合併順序：預設值 < TOML 檔案 < 命令列參數
    pub fn generator_settings_with(&self, file: Option<&TomlConfig>) -> Result<GeneratorSettings> {
        let mut settings = file
            .map(TomlConfig::generator_settings)
            .unwrap_or_default();

        if let Some(key) = &self.api_key {
            settings.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(base) = &self.api_base {
            settings.api_base = base.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_secs = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Evaluation year from the flag, then the TOML file, if either is set.
    pub fn evaluation_year_with(&self, file: Option<&TomlConfig>) -> Option<i32> {
        self.evaluation_year
            .or_else(|| file.and_then(TomlConfig::evaluation_year))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(year) = self.evaluation_year {
            validate_range("evaluation_year", year, 1, 9999)?;
        }
        if let Some(base) = &self.api_base {
            validate_url("api_base", base)?;
        }
        Ok(())
    }
}
