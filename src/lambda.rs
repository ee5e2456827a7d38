#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use natal_profile::app::handler::{handle_event, EventRequest, EventResponse};
#[cfg(feature = "lambda")]
use natal_profile::utils::logger;
#[cfg(feature = "lambda")]
use natal_profile::{Analyzer, GeminiGenerator, LambdaConfig};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    analyzer: Arc<Analyzer<GeminiGenerator>>,
    evaluation_year: Option<i32>,
    event: LambdaEvent<EventRequest>,
) -> Result<EventResponse, Error> {
    tracing::info!("Handling profile request {}", event.context.request_id);
    let response = handle_event(&analyzer, &event.payload, evaluation_year).await;
    tracing::info!("Responded with status {}", response.status_code);
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後的請求共用
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let generator = GeminiGenerator::from_config(&config.generator)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let analyzer = Arc::new(Analyzer::new(generator));
    let evaluation_year = config.evaluation_year;

    run(service_fn(move |event| {
        let analyzer = Arc::clone(&analyzer);
        async move { function_handler(analyzer, evaluation_year, event).await }
    }))
    .await
}
