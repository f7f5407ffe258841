use crate::handlers;
use crate::models::ErrorResponse;
use actix_web::{error, web, HttpResponse, Scope};

pub fn config(max_json_payload_size: usize) -> Scope {
    web::scope("")
        .app_data(json_config(max_json_payload_size))
        .route("/health", web::get().to(handlers::health_check))
        .route("/search", web::post().to(handlers::search))
}

/// JSON extractor settings: payload limit plus an `ErrorResponse` body for
/// anything that fails to deserialize.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let details = err.to_string();
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest()
                    .json(ErrorResponse::with_details("Invalid request body", details)),
            )
            .into()
        })
}
