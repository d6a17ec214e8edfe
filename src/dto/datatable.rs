//! Wire shapes of the DataTables server-side protocol.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::query::SortDirection;

fn default_length() -> i64 {
    10
}

/// Search box state sent by the grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DtSearch {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub regex: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DtColumn {
    /// Logical column name, matched against the sortable record attributes.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub search: Option<DtSearch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DtOrder {
    /// Index into [`DtParameters::columns`].
    pub column: usize,
    #[serde(default)]
    pub dir: SortDirection,
}

/// Page request posted by the grid.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DtParameters {
    /// Correlation token echoed back unchanged.
    #[serde(default)]
    pub draw: Value,
    #[serde(default)]
    pub columns: Vec<DtColumn>,
    #[serde(default)]
    pub order: Vec<DtOrder>,
    #[serde(default)]
    #[validate(range(min = 0, message = "start must not be negative"))]
    pub start: i64,
    #[serde(default = "default_length")]
    #[validate(range(min = 0, message = "length must not be negative"))]
    pub length: i64,
    #[serde(default)]
    pub search: Option<DtSearch>,
}

impl Default for DtParameters {
    fn default() -> Self {
        Self {
            draw: Value::Null,
            columns: Vec::new(),
            order: Vec::new(),
            start: 0,
            length: default_length(),
            search: None,
        }
    }
}

impl DtParameters {
    pub fn search_value(&self) -> Option<&str> {
        self.search.as_ref().and_then(|s| s.value.as_deref())
    }
}

/// Page response consumed by the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DtResult<T> {
    pub draw: Value,
    pub records_total: usize,
    pub records_filtered: usize,
    pub data: Vec<T>,
}
