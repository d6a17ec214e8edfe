use crate::domain::record::Record;
use crate::export::{Encoder, ExportError, ExportFormat};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "application/json",
    extension: "json",
};

pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    serde_json::to_vec_pretty(records).map_err(|err| ExportError::encoding(ExportFormat::Json, err))
}
