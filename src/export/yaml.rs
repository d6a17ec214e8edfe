use crate::domain::record::Record;
use crate::export::{Encoder, ExportError, ExportFormat};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "application/yaml",
    extension: "yaml",
};

pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    serde_yaml::to_string(records)
        .map(String::into_bytes)
        .map_err(|err| ExportError::encoding(ExportFormat::Yaml, err))
}
