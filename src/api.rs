use actix_cors::Cors;
use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use tracing::error;

use crate::scrape::{scrape_artist, ScrapeClient};
use crate::types::{ArtistBatchRequest, ArtistRecord};

#[get("/health")]
async fn health() -> impl Responder {
    web::Json(serde_json::json!({ "status": "ok" }))
}

/* ------------------------ /api/artists ------------------------ */

#[post("/api/artists")]
async fn artists(
    payload: web::Json<ArtistBatchRequest>,
    sc: web::Data<ScrapeClient>,
) -> actix_web::Result<impl Responder> {
    let urls = payload.into_inner().urls.unwrap_or_default();
    if urls.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No URLs provided"
        })));
    }

    // One record per URL, input order, sequentially. A failed URL never
    // fails the batch.
    let mut results = Vec::with_capacity(urls.len());
    for url in &urls {
        let record = match scrape_artist(&sc, url).await {
            Ok(rec) => rec,
            Err(e) => {
                error!(error=?e, url=%url, "scrape failed");
                ArtistRecord::extraction_error(url, e.to_string())
            }
        };
        results.push(record);
    }

    Ok(HttpResponse::Ok().json(results))
}

/// Service set shared by main and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(artists);
}

/// Allow-list CORS for the API, mirroring the frontend deployment.
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .max_age(3600)
}
