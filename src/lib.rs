pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::time::Instant;

use config::Config;
use services::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            search_service: SearchService::bing(config.bing.clone()),
            config,
            start_time: Instant::now(),
        }
    }
}
