//! Grid data and export endpoints.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::datatable::DtParameters;
use crate::dto::export::ExportQuery;
use crate::forms::export::ExportForm;
use crate::repository::DieselRepository;
use crate::routes::{blocking_failed, error_response};
use crate::services::{export as export_service, table as table_service};

#[post("/records/table")]
/// Return one page of records for the grid.
pub async fn load_table(
    repo: web::Data<DieselRepository>,
    web::Json(params): web::Json<DtParameters>,
) -> impl Responder {
    let result = web::block(move || table_service::load_table(repo.get_ref(), &params)).await;

    match result {
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => error_response(&err),
        Err(err) => blocking_failed(err),
    }
}

#[post("/records/export")]
/// Download every record matching the grid state in the requested format.
pub async fn export_table(
    repo: web::Data<DieselRepository>,
    query: web::Query<ExportQuery>,
    form: Option<web::Form<ExportForm>>,
) -> impl Responder {
    let format = query.into_inner().format;
    let params = form.map(|f| f.parameters()).unwrap_or_default();

    let result = web::block(move || {
        export_service::export_table(repo.get_ref(), format.as_deref(), &params)
    })
    .await;

    match result {
        Ok(Ok(file)) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(file.filename)],
            })
            .body(file.bytes),
        Ok(Err(err)) => error_response(&err),
        Err(err) => blocking_failed(err),
    }
}
