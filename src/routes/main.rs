use actix_web::{Responder, get, web};
use serde_json::json;
use tera::{Context, Tera};

use crate::export::{COLUMNS, TITLES};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{blocking_failed, error_response, render_template};
use crate::services::seed::{SeedGuard, seed_if_empty};

#[get("/")]
/// Seed an empty store, then render the grid page.
pub async fn show_index(
    repo: web::Data<DieselRepository>,
    guard: web::Data<SeedGuard>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let seed_count = server_config.seed_count;
    let seeded =
        web::block(move || seed_if_empty(repo.get_ref(), guard.get_ref(), seed_count)).await;

    match seeded {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => return error_response(&err),
        Err(err) => return blocking_failed(err),
    }

    let columns: Vec<_> = COLUMNS
        .iter()
        .zip(TITLES)
        .map(|(column, title)| json!({ "data": column.name(), "title": title }))
        .collect();

    let mut context = Context::new();
    context.insert("columns", &columns);
    context.insert("formats", &["excel", "csv", "html", "json", "xml", "yaml"]);

    render_template(&tera, "records/index.html", &context)
}
