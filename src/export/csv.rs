use crate::domain::record::Record;
use crate::export::{COLUMNS, Encoder, ExportError, ExportFormat, cells};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "text/csv; charset=utf-8",
    extension: "csv",
};

/// Comma separated rows headed by the logical column names.
pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    let fail = |err: ::csv::Error| ExportError::encoding(ExportFormat::Csv, err);

    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COLUMNS.iter().map(|column| column.name()))
        .map_err(fail)?;
    for record in records {
        writer.write_record(cells(record)).map_err(fail)?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::encoding(ExportFormat::Csv, err))
}
