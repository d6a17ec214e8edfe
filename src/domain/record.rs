use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single row shown in the grid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i32,
    pub name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub creation_date: NaiveDateTime,
}

impl Record {
    /// Text attributes taking part in free-text search.
    pub fn text_fields(&self) -> [Option<&str>; 8] {
        [
            self.name.as_deref(),
            self.first_surname.as_deref(),
            self.second_surname.as_deref(),
            self.street.as_deref(),
            self.phone.as_deref(),
            self.zip_code.as_deref(),
            self.city.as_deref(),
            self.notes.as_deref(),
        ]
    }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct NewRecord {
    pub name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub creation_date: NaiveDateTime,
}

impl NewRecord {
    /// Builds a record payload, dropping blank text attributes.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        first_surname: Option<String>,
        second_surname: Option<String>,
        street: Option<String>,
        phone: Option<String>,
        zip_code: Option<String>,
        city: Option<String>,
        notes: Option<String>,
        creation_date: NaiveDateTime,
    ) -> Self {
        Self {
            name: normalize(name),
            first_surname: normalize(first_surname),
            second_surname: normalize(second_surname),
            street: normalize(street),
            phone: normalize(phone),
            zip_code: normalize(zip_code),
            city: normalize(city),
            notes: normalize(notes),
            creation_date,
        }
    }

    /// Materializes the payload with the identifier assigned by a store.
    pub fn into_record(self, id: i32) -> Record {
        Record {
            id,
            name: self.name,
            first_surname: self.first_surname,
            second_surname: self.second_surname,
            street: self.street,
            phone: self.phone,
            zip_code: self.zip_code,
            city: self.city,
            notes: self.notes,
            creation_date: self.creation_date,
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_drops_blank_attributes() {
        let record = NewRecord::new(
            Some("  Ahmet ".to_string()),
            Some("   ".to_string()),
            None,
            None,
            None,
            None,
            Some("İzmir".to_string()),
            None,
            NaiveDateTime::default(),
        );

        assert_eq!(record.name.as_deref(), Some("Ahmet"));
        assert_eq!(record.first_surname, None);
        assert_eq!(record.city.as_deref(), Some("İzmir"));
    }

    #[test]
    fn record_serializes_in_camel_case() {
        let record = NewRecord {
            zip_code: Some("35000".to_string()),
            ..NewRecord::default()
        }
        .into_record(7);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["zipCode"], "35000");
        assert!(value["firstSurname"].is_null());
        assert!(value.get("creationDate").is_some());
    }
}
