use crate::utils::error::GenerationError;
use async_trait::async_trait;
use std::time::Duration;

/// Prose generation capability. Implementations turn a single prompt into
/// text or report why they could not.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    fn model_name(&self) -> &str;

    /// `false` for stand-ins that never produce text; callers skip the
    /// generation step for them.
    fn enabled(&self) -> bool {
        true
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn api_base(&self) -> &str;
    fn timeout(&self) -> Duration;
}
