use serde::Deserialize;

use crate::dto::datatable::DtParameters;

#[derive(Debug, Default, Deserialize)]
/// Form posted by the export buttons of the grid.
pub struct ExportForm {
    /// Grid state serialized as JSON by the page.
    #[serde(rename = "dtParametersJson", default)]
    pub dt_parameters_json: Option<String>,
}

impl ExportForm {
    /// Parses the embedded grid state. Missing or malformed state yields the
    /// defaults: no search and identifier ordering.
    pub fn parameters(&self) -> DtParameters {
        match self.dt_parameters_json.as_deref().map(str::trim) {
            None | Some("") => DtParameters::default(),
            Some(json) => serde_json::from_str(json).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed export parameters: {err}");
                DtParameters::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(json: Option<&str>) -> ExportForm {
        ExportForm {
            dt_parameters_json: json.map(str::to_string),
        }
    }

    #[test]
    fn parses_embedded_parameters() {
        let params = form(Some(r#"{"search": {"value": "ankara"}, "order": []}"#)).parameters();
        assert_eq!(params.search_value(), Some("ankara"));
    }

    #[test]
    fn malformed_parameters_fall_back_to_defaults() {
        let params = form(Some("{not json")).parameters();
        assert_eq!(params.search_value(), None);
        assert!(params.order.is_empty());

        let params = form(None).parameters();
        assert_eq!(params.search_value(), None);

        let params = form(Some("   ")).parameters();
        assert!(params.columns.is_empty());
    }
}
