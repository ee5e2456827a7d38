use clap::Parser;
use natal_profile::adapters::gemini::CANDIDATE_MODELS;
use natal_profile::config::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use natal_profile::utils::logger;
use natal_profile::utils::error::ProfileError;
use natal_profile::utils::validation::{validate_required_field, Validate};
use natal_profile::{GeminiGenerator, GeneratorSettings};

#[derive(Parser)]
#[command(name = "check-models")]
#[command(about = "Check which Gemini models the configured API key can use")]
struct Args {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let api_key = args.api_key.filter(|k| !k.trim().is_empty());
    let api_key = match validate_required_field("GEMINI_API_KEY", &api_key) {
        Ok(key) => key.clone(),
        Err(e) => {
            println!("❌ {}", e);
            println!("\nAdd it to your environment:");
            println!("GEMINI_API_KEY=<your key>");
            std::process::exit(1);
        }
    };

    let settings = GeneratorSettings {
        api_key: Some(api_key),
        api_base: args.api_base,
        timeout_secs: DEFAULT_TIMEOUT_SECS,
        ..Default::default()
    };
    settings.validate()?;
    let generator = GeminiGenerator::from_config(&settings)?;

    println!("🔍 Checking Gemini model availability...\n");
    println!("{}", "=".repeat(60));

    let mut available = Vec::new();
    for (model, description) in CANDIDATE_MODELS {
        match generator.model_available(model).await {
            Ok(true) => {
                println!("✅ {}", model);
                println!("   {}", description);
                available.push(model);
            }
            Ok(false) => {
                println!("❌ {}", model);
                println!("   not found");
            }
            Err(e) => {
                let e = ProfileError::from(e);
                println!("❌ {}", model);
                println!("   error: {}", e);
                println!("   💡 {}", e.recovery_suggestion());
            }
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    println!(
        "\nAvailable models: {}/{}",
        available.len(),
        CANDIDATE_MODELS.len()
    );

    match available.first() {
        Some(model) => {
            println!("\n✅ Recommended setting:");
            println!("GEMINI_MODEL={}", model);
        }
        None => {
            println!("\n❌ No usable model found, check the API key");
        }
    }

    Ok(())
}
