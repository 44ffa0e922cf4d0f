use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use isbn_ranges::infrastructure::AppState;
use isbn_ranges::{config, isbn, ranges, server};

/// Value following `flag` on the command line, if present
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|arg| arg == flag)?;
    args.get(pos + 1).cloned()
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isbn_ranges=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::from_env();

    // --range-message takes precedence over ISBN_RANGE_MESSAGE
    if let Some(path) = flag_value(&args, "--range-message") {
        config.range_message = Some(PathBuf::from(path));
    }

    let resolved = ranges::load(&config);
    let metadata = resolved.table.metadata();
    tracing::info!(
        "Range table ready: {} groups from {} (serial {}, date {})",
        resolved.table.len(),
        metadata.source,
        metadata.serial.as_deref().unwrap_or("-"),
        metadata.date.as_deref().unwrap_or("-")
    );

    // One-shot lookup, printed as JSON
    if let Some(input) = flag_value(&args, "--lookup") {
        return match isbn::split(&resolved.table, &input) {
            Ok(parts) => {
                let output = serde_json::json!({
                    "isbn13": parts.isbn13(),
                    "isbn10": parts.isbn10(),
                    "hyphenated": parts.hyphenated(),
                    "parts": parts,
                    "source": metadata.source,
                });
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}: {}", input, e);
                ExitCode::FAILURE
            }
        };
    }

    let state = AppState::new(resolved.table.clone());
    if let Err(e) = server::serve(state, &config).await {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
