use serde::Serialize;

use crate::domain::record::Record;
use crate::export::{Encoder, ExportError, ExportFormat};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "application/xml",
    extension: "xml",
};

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

#[derive(Serialize)]
#[serde(rename = "records")]
struct Document<'a> {
    record: &'a [Record],
}

/// `<records>` root with one `<record>` element per record.
pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    let body = quick_xml::se::to_string(&Document { record: records })
        .map_err(|err| ExportError::encoding(ExportFormat::Xml, err))?;

    let mut xml = String::with_capacity(DECLARATION.len() + body.len());
    xml.push_str(DECLARATION);
    xml.push_str(&body);
    Ok(xml.into_bytes())
}
