use actix_cors::Cors;

use crate::config::SecurityConfig;

/// Builds the CORS layer. A `*` entry (the default) allows any origin;
/// methods and headers are always unrestricted.
pub fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    security
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
