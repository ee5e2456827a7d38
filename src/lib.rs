pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AnyGenerator, GeminiGenerator, OfflineGenerator};
pub use config::{lambda::LambdaConfig, GeneratorSettings};
pub use core::{analyzer::Analyzer, compute_kigaku, compute_numerology};
pub use domain::model::{
    AnalysisReport, AnalysisRequest, BirthDate, KigakuProfile, NumerologyProfile,
};
pub use domain::ports::TextGenerator;
pub use utils::error::{GenerationError, ProfileError, Result};
