use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bing_search_service::config::Config;
use bing_search_service::handlers::health::not_found;
use bing_search_service::middleware::cors;
use bing_search_service::routes::api;
use bing_search_service::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if !config.bing.has_api_key() {
        warn!("BING_API_KEY is not set; search requests will fail until it is configured");
    }

    info!(
        "Starting Bing search service on port {}",
        config.server.port
    );

    let state = AppState::new(config.clone());
    let security = config.security.clone();
    let max_json_payload_size = config.server.max_json_payload_size;

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&security))
            .wrap(Logger::default())
            .service(api::config(max_json_payload_size))
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
