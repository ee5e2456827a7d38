use chrono::{Datelike, Local};
use clap::Parser;
use natal_profile::utils::error::{ErrorSeverity, ProfileError};
use natal_profile::utils::{logger, validation::Validate};
use natal_profile::{
    AnalysisRequest, Analyzer, AnyGenerator, CliConfig, GeminiGenerator, OfflineGenerator,
};

fn exit_with(e: &ProfileError) -> ! {
    tracing::error!(
        "❌ natal-profile failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting natal-profile CLI");

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    let file_config = config.file_config().unwrap_or_else(|e| exit_with(&e));
    let settings = config
        .generator_settings_with(file_config.as_ref())
        .unwrap_or_else(|e| exit_with(&e));
    tracing::debug!("Generator settings: {:?}", settings);

    let evaluation_year = config
        .evaluation_year_with(file_config.as_ref())
        .unwrap_or_else(|| Local::now().year());

    let generator = if config.no_analysis {
        tracing::info!("📴 Analysis disabled, profiles only");
        AnyGenerator::Offline(OfflineGenerator)
    } else {
        if !settings.has_api_key() {
            tracing::warn!("⚠️ GEMINI_API_KEY is not set; analysis will contain an error message");
        }
        let gemini = GeminiGenerator::from_config(&settings).unwrap_or_else(|e| exit_with(&e));
        AnyGenerator::Gemini(gemini)
    };

    let analyzer = Analyzer::new(generator);
    let request = AnalysisRequest::new(config.name.clone(), config.birth_date.clone());

    match analyzer.analyze(&request, evaluation_year).await {
        Ok(report) => {
            tracing::info!("✅ Profiles computed for {}", report.birth_date);
            let rendered = serde_json::to_string_pretty(&report)
                .unwrap_or_else(|e| exit_with(&ProfileError::from(e)));
            println!("{}", rendered);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
