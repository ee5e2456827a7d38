use crate::utils::error::{ProfileError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Birth date as plain calendar fields. The engines never check that the
/// fields form a real date; `parse` does, at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// 解析 `YYYY-MM-DD`，並確認是實際存在的日期
    pub fn parse(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
            ProfileError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::from(date))
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub destiny: u32,
    pub soul: u32,
    pub personal_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KigakuProfile {
    pub honmei_star: u8,
    pub honmei_name: String,
    pub current_position: u8,
    pub position_name: String,
    pub position_description: String,
}

/// Raw input as received by the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
}

impl AnalysisRequest {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub name: String,
    pub birth_date: String,
    pub numerology: NumerologyProfile,
    pub kigaku: KigakuProfile,
    pub analysis: String,
}
