use tera::{Context, Tera};

use crate::domain::record::Record;
use crate::export::{Encoder, ExportError, ExportFormat, TITLES, cells};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "text/html; charset=utf-8",
    extension: "html",
};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Records</title>
</head>
<body>
<table border="1">
<thead>
<tr>{% for title in titles %}<th>{{ title }}</th>{% endfor %}</tr>
</thead>
<tbody>
{% for row in rows %}<tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{% endfor %}</tbody>
</table>
</body>
</html>
"#;

/// Standalone HTML page with one table row per record.
pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<[String; 10]> = records.iter().map(cells).collect();

    let mut context = Context::new();
    context.insert("titles", &TITLES);
    context.insert("rows", &rows);

    Tera::one_off(TEMPLATE, &context, true)
        .map(String::into_bytes)
        .map_err(|err| ExportError::encoding(ExportFormat::Html, err))
}
