use thiserror::Error;

/// 文字生成服務的錯誤
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY が設定されていません")]
    MissingApiKey,

    #[error("text generation is disabled")]
    Disabled,

    #[error("generation API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("generation API returned no text")]
    EmptyResponse,

    #[error("failed to decode generation response: {message}")]
    Decode { message: String },
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::Decode {
                message: e.to_string(),
            }
        } else {
            GenerationError::Network {
                message: e.to_string(),
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("名前と生年月日を入力してください")]
    MissingInput,

    #[error("日付の形式が正しくありません: {value} ({reason})")]
    InvalidDate { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Text generation failed: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    External,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::MissingInput | ProfileError::InvalidDate { .. } => ErrorCategory::Input,
            ProfileError::ConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. }
            | ProfileError::MissingConfigError { .. }
            | ProfileError::TomlError(_) => ErrorCategory::Configuration,
            ProfileError::GenerationError(_) => ErrorCategory::External,
            ProfileError::IoError(_) | ProfileError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::External => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應 HTTP 狀態碼（Lambda 回應使用）
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Input => 400,
            _ => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::MissingInput | ProfileError::InvalidDate { .. } => self.to_string(),
            other => format!("エラーが発生しました: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProfileError::MissingInput => "Provide both a name and a birth date",
            ProfileError::InvalidDate { .. } => "Use the YYYY-MM-DD format with a real calendar date",
            ProfileError::ConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. }
            | ProfileError::MissingConfigError { .. }
            | ProfileError::TomlError(_) => "Check the configuration file and command-line flags",
            ProfileError::GenerationError(GenerationError::MissingApiKey) => {
                "Set GEMINI_API_KEY or pass --no-analysis"
            }
            ProfileError::GenerationError(_) => {
                "Check network access and the GEMINI_MODEL setting, then retry"
            }
            ProfileError::IoError(_) | ProfileError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
