// Adapters layer: concrete TextGenerator implementations.

pub mod gemini;

use crate::domain::ports::TextGenerator;
use crate::utils::error::GenerationError;
use async_trait::async_trait;

pub use gemini::GeminiGenerator;

/// Generator used when analysis is switched off; every call fails with
/// [`GenerationError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }

    fn model_name(&self) -> &str {
        "offline"
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Either the real generator or the offline stand-in, picked at startup.
pub enum AnyGenerator {
    Gemini(GeminiGenerator),
    Offline(OfflineGenerator),
}

#[async_trait]
impl TextGenerator for AnyGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            AnyGenerator::Gemini(g) => g.generate(prompt).await,
            AnyGenerator::Offline(g) => g.generate(prompt).await,
        }
    }

    fn model_name(&self) -> &str {
        match self {
            AnyGenerator::Gemini(g) => g.model_name(),
            AnyGenerator::Offline(g) => g.model_name(),
        }
    }

    fn enabled(&self) -> bool {
        match self {
            AnyGenerator::Gemini(g) => g.enabled(),
            AnyGenerator::Offline(g) => g.enabled(),
        }
    }
}
