use crate::config::GeneratorSettings;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub generator: Option<GeneratorSection>,
    pub profile: Option<ProfileSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSection {
    pub evaluation_year: Option<i32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProfileError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfileError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Defaults overlaid with whatever the `[generator]` table sets.
    pub fn generator_settings(&self) -> GeneratorSettings {
        let mut settings = GeneratorSettings::default();
        if let Some(section) = &self.generator {
            // 未替換的 ${VAR} 視為沒有設定
            settings.api_key = section
                .api_key
                .clone()
                .filter(|key| !key.starts_with("${"));
            if let Some(model) = &section.model {
                settings.model = model.clone();
            }
            if let Some(base) = &section.api_base {
                settings.api_base = base.clone();
            }
            if let Some(timeout) = section.timeout_seconds {
                settings.timeout_secs = timeout;
            }
        }
        settings
    }

    pub fn evaluation_year(&self) -> Option<i32> {
        self.profile.as_ref().and_then(|p| p.evaluation_year)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(year) = self.evaluation_year() {
            validate_range("profile.evaluation_year", year, 1, 9999)?;
        }
        self.generator_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[generator]
model = "gemini-1.5-pro"
api_base = "https://example.com/v1beta"
timeout_seconds = 30

[profile]
evaluation_year = 2030
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.generator_settings();

        assert_eq!(settings.model, "gemini-1.5-pro");
        assert_eq!(settings.api_base, "https://example.com/v1beta");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(config.evaluation_year(), Some(2030));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let settings = config.generator_settings();
        assert_eq!(settings.model, crate::config::DEFAULT_MODEL);
        assert_eq!(config.evaluation_year(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NATAL_PROFILE_TEST_KEY", "key-from-env");

        let toml_content = r#"
[generator]
api_key = "${NATAL_PROFILE_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.generator_settings().api_key.as_deref(),
            Some("key-from-env")
        );

        std::env::remove_var("NATAL_PROFILE_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_leaves_key_empty() {
        let toml_content = r#"
[generator]
api_key = "${NATAL_PROFILE_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.generator_settings().api_key, None);
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[generator]
api_base = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[generator\nmodel = 1").unwrap_err();
        assert!(matches!(err, ProfileError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[generator]
model = "gemini-1.5-flash-latest"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.generator_settings().model,
            "gemini-1.5-flash-latest"
        );
    }
}
