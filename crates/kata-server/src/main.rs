//! kata: keyword extraction service for customer support tickets.

use std::io::Read;
use std::sync::Arc;

use kata_core::{ServiceConfig, API_PREFIX, SERVICE_VERSION};
use kata_extract::{clean_text, extract_keywords_and_phrases, validate_text_input};
use kata_server::{build_router, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = ServiceConfig::from_env()?;

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "extract" => {
                let text = if args.len() > 2 {
                    args[2..].join(" ")
                } else {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                };
                if let Err(e) = validate_text_input(Some(&text), config.max_text_length) {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
                let state = AppState::new(config);
                let keywords = extract_keywords_and_phrases(&text, &state.default_options());
                let out = serde_json::json!({
                    "cleaned_text": clean_text(&text),
                    "keywords": keywords,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }
            "config" => {
                println!("{}", config.to_pretty_json()?);
                let errors = config.validate();
                for e in &errors {
                    eprintln!("  - {}", e);
                }
                std::process::exit(if errors.is_empty() { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("kata {}, ticket keyword extraction service", SERVICE_VERSION);
                println!();
                println!("Usage: kata [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  extract [text...]        Extract keywords from text (stdin if omitted)");
                println!("  config                   Print resolved configuration and validate it");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'kata help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let errors = config.validate();
    if !errors.is_empty() {
        error!("Configuration validation failed:");
        for e in &errors {
            error!("  - {}", e);
        }
        anyhow::bail!("Invalid configuration. Cannot start service.");
    }

    let addr = config.bind_addr();
    info!("API prefix: {}", API_PREFIX);
    info!("CORS origins: {:?}", config.cors_origins);
    info!(
        "Extraction defaults: max_keywords={}, max_bigrams={}, min_length={}",
        config.extract.max_keywords, config.extract.max_bigrams, config.extract.min_length
    );

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("kata {} listening on {}", SERVICE_VERSION, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
