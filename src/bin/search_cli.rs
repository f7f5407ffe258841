use std::io;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bing_search_service::cli;
use bing_search_service::config::Config;
use bing_search_service::services::SearchService;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so stdout only carries the listing.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let service = SearchService::bing(config.bing.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = cli::run(&service, config.bing.default_count, stdin.lock(), &mut stdout).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
