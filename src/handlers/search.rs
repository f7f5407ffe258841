use actix_web::{web, HttpResponse, Result};
use validator::Validate;

use crate::models::{ErrorResponse, SearchRequest, SearchResponse};
use crate::AppState;

pub async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse> {
    // Validate request
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    match state.search_service.search(&req.query, req.count).await {
        Ok(results) if results.is_empty() => {
            tracing::info!(query = %req.query, "No results found");
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("No results found")))
        }
        Ok(results) => Ok(HttpResponse::Ok().json(SearchResponse { results })),
        Err(e) => {
            tracing::error!("Search error: {:?}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                    "Failed to process search request",
                    e.to_string(),
                )),
            )
        }
    }
}
