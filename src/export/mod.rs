//! File encoders for the export endpoint.
//!
//! Each [`ExportFormat`] maps to exactly one [`Encoder`]: an encoding function
//! over the ordered records plus the MIME type and file extension used for the
//! download.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::domain::query::Column;
use crate::domain::record::Record;
use crate::dto::export::ExportFile;

pub mod csv;
pub mod html;
pub mod json;
pub mod xlsx;
pub mod xml;
pub mod yaml;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to encode {format} export: {message}")]
    Encoding {
        format: ExportFormat,
        message: String,
    },
}

impl ExportError {
    fn encoding(format: ExportFormat, err: impl Display) -> Self {
        ExportError::Encoding {
            format,
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Excel,
    Csv,
    Html,
    Json,
    Xml,
    Yaml,
}

/// Accepted format tags.
const TAGS: &[(&str, ExportFormat)] = &[
    ("excel", ExportFormat::Excel),
    ("xlsx", ExportFormat::Excel),
    ("csv", ExportFormat::Csv),
    ("html", ExportFormat::Html),
    ("json", ExportFormat::Json),
    ("xml", ExportFormat::Xml),
    ("yaml", ExportFormat::Yaml),
    ("yml", ExportFormat::Yaml),
];

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        TAGS.iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(tag))
            .map(|(_, format)| *format)
            .ok_or_else(|| ExportError::UnsupportedFormat(tag.to_string()))
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoder().extension)
    }
}

pub struct Encoder {
    pub encode: fn(&[Record]) -> Result<Vec<u8>, ExportError>,
    pub content_type: &'static str,
    pub extension: &'static str,
}

impl ExportFormat {
    pub fn encoder(self) -> &'static Encoder {
        match self {
            ExportFormat::Excel => &xlsx::ENCODER,
            ExportFormat::Csv => &csv::ENCODER,
            ExportFormat::Html => &html::ENCODER,
            ExportFormat::Json => &json::ENCODER,
            ExportFormat::Xml => &xml::ENCODER,
            ExportFormat::Yaml => &yaml::ENCODER,
        }
    }
}

/// Encodes `records` in the given format.
pub fn export(format: ExportFormat, records: &[Record]) -> Result<ExportFile, ExportError> {
    let encoder = format.encoder();
    let bytes = (encoder.encode)(records)?;

    Ok(ExportFile {
        bytes,
        content_type: encoder.content_type,
        filename: format!("data.{}", encoder.extension),
    })
}

/// Column order shared by the tabular encoders.
pub(crate) const COLUMNS: [Column; 10] = [
    Column::Id,
    Column::Name,
    Column::FirstSurname,
    Column::SecondSurname,
    Column::Street,
    Column::Phone,
    Column::ZipCode,
    Column::City,
    Column::Notes,
    Column::CreationDate,
];

/// Human readable headers, aligned with [`COLUMNS`].
pub(crate) const TITLES: [&str; 10] = [
    "Id",
    "Name",
    "First Surname",
    "Second Surname",
    "Street",
    "Phone",
    "Zip Code",
    "City",
    "Notes",
    "Creation Date",
];

/// Flattens a record into display cells, aligned with [`COLUMNS`].
pub(crate) fn cells(record: &Record) -> [String; 10] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        record.id.to_string(),
        text(&record.name),
        text(&record.first_surname),
        text(&record.second_surname),
        text(&record.street),
        text(&record.phone),
        text(&record.zip_code),
        text(&record.city),
        text(&record.notes),
        record.creation_date.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}
