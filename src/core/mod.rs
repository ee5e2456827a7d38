pub mod analyzer;
pub mod catalog;
pub mod kigaku;
pub mod numerology;
pub mod prompt;
pub mod reduce;

pub use crate::domain::model::{
    AnalysisReport, AnalysisRequest, BirthDate, KigakuProfile, NumerologyProfile,
};
pub use crate::domain::ports::{ConfigProvider, TextGenerator};
pub use crate::utils::error::Result;

pub fn compute_numerology(
    year: i32,
    month: u32,
    day: u32,
    name: &str,
    evaluation_year: i32,
) -> NumerologyProfile {
    numerology::profile(year, month, day, name, evaluation_year)
}

pub fn compute_kigaku(year: i32, month: u32, day: u32, evaluation_year: i32) -> KigakuProfile {
    kigaku::profile(year, month, day, evaluation_year)
}
