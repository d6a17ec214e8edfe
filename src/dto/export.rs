//! DTOs exchanged with the export endpoint.

use serde::Deserialize;

/// Query string of the export endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// Requested format tag, e.g. `csv` or `excel`.
    pub format: Option<String>,
}

/// Encoded export ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}
