use crate::core::{kigaku, numerology, prompt};
use crate::domain::model::{
    AnalysisReport, AnalysisRequest, BirthDate, KigakuProfile, NumerologyProfile,
};
use crate::domain::ports::TextGenerator;
use crate::utils::error::{ProfileError, Result};
use chrono::{Datelike, Local};

pub struct Analyzer<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Analyzer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Same as [`Analyzer::analyze`] with the current local year.
    pub async fn analyze_now(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        self.analyze(request, Local::now().year()).await
    }

    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        evaluation_year: i32,
    ) -> Result<AnalysisReport> {
        // 輸入驗證
        if request.name.trim().is_empty() || request.birth_date.trim().is_empty() {
            return Err(ProfileError::MissingInput);
        }
        let date = BirthDate::parse(&request.birth_date)?;

        tracing::info!(
            "🔮 Computing profiles for {} (evaluation year {})",
            request.birth_date,
            evaluation_year
        );

        let numerology = numerology::profile(
            date.year,
            date.month,
            date.day,
            &request.name,
            evaluation_year,
        );
        let kigaku = kigaku::profile(date.year, date.month, date.day, evaluation_year);

        let analysis = if self.generator.enabled() {
            self.generate_analysis(&request.name, &request.birth_date, &numerology, &kigaku)
                .await
        } else {
            tracing::debug!("Text generation disabled, analysis left empty");
            String::new()
        };

        Ok(AnalysisReport {
            name: request.name.clone(),
            birth_date: request.birth_date.clone(),
            numerology,
            kigaku,
            analysis,
        })
    }

    async fn generate_analysis(
        &self,
        name: &str,
        birth_date: &str,
        numerology: &NumerologyProfile,
        kigaku: &KigakuProfile,
    ) -> String {
        let prompt = prompt::analysis_prompt(name, birth_date, numerology, kigaku);
        tracing::debug!(
            "Sending {} byte prompt to {}",
            prompt.len(),
            self.generator.model_name()
        );

        // 生成失敗不影響計算結果，錯誤訊息放進 analysis 欄位
        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("⚠️ Text generation failed: {}", e);
                format!("エラーが発生しました: {}", e)
            }
        }
    }
}
