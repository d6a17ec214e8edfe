use crate::dto::datatable::DtParameters;
use crate::dto::export::ExportFile;
use crate::export::{self, ExportFormat};
use crate::repository::RecordReader;
use crate::services::table::build_query;
use crate::services::{ServiceError, ServiceResult};

/// Exports every record matching the grid's search and order.
///
/// The format tag is checked before the store is queried; skip and take from
/// `params` are ignored.
pub fn export_table<R>(
    repo: &R,
    format: Option<&str>,
    params: &DtParameters,
) -> ServiceResult<ExportFile>
where
    R: RecordReader + ?Sized,
{
    let format: ExportFormat = format
        .ok_or_else(|| ServiceError::UnsupportedFormat(String::new()))?
        .parse()?;

    let query = build_query(params).unpaginated();
    let records = repo.list_records(&query)?;

    log::info!("Exporting {} record(s) as {format}", records.len());

    export::export(format, &records).map_err(|err| {
        log::error!("Failed to encode export: {err}");
        ServiceError::from(err)
    })
}
