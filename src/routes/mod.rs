//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use serde_json::json;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod main;
pub mod table;

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure to a JSON error response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    if err.is_client_error() {
        HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
    } else {
        log::error!("Request failed: {err}");
        HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
    }
}

/// Response for work that could not be scheduled on the blocking pool.
pub fn blocking_failed(err: actix_web::error::BlockingError) -> HttpResponse {
    log::error!("Blocking task failed: {err}");
    HttpResponse::InternalServerError().finish()
}
