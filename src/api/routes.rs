use actix_web::{error::JsonPayloadError, web, HttpRequest, Scope};
use log::info;

use super::errors::ApiError;
use super::handlers;

pub fn configure_routes() -> Scope {
    web::scope("/api/threads")
        .route("/reconcile", web::post().to(handlers::reconcile_thread))
        .route("/reply-subject", web::post().to(handlers::reply_subject))
        .route("/reply-draft", web::post().to(handlers::reply_draft))
}

// Malformed bodies get the same JSON envelope as every other error
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest { message: err.to_string() }.into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    info!("Configuring thread routes (/api/threads)");
    cfg.app_data(json_config())
        .route("/api/health", web::get().to(handlers::health))
        .service(configure_routes());
}
