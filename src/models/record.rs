use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::record::{NewRecord as DomainNewRecord, Record as DomainRecord};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::record::Record`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::records)]
/// Insertable form of [`Record`].
pub struct NewRecord<'a> {
    pub name: Option<&'a str>,
    pub first_surname: Option<&'a str>,
    pub second_surname: Option<&'a str>,
    pub street: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub city: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub creation_date: NaiveDateTime,
}

impl From<Record> for DomainRecord {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            first_surname: record.first_surname,
            second_surname: record.second_surname,
            street: record.street,
            phone: record.phone,
            zip_code: record.zip_code,
            city: record.city,
            notes: record.notes,
            creation_date: record.creation_date,
        }
    }
}

impl<'a> From<&'a DomainNewRecord> for NewRecord<'a> {
    fn from(record: &'a DomainNewRecord) -> Self {
        Self {
            name: record.name.as_deref(),
            first_surname: record.first_surname.as_deref(),
            second_surname: record.second_surname.as_deref(),
            street: record.street.as_deref(),
            phone: record.phone.as_deref(),
            zip_code: record.zip_code.as_deref(),
            city: record.city.as_deref(),
            notes: record.notes.as_deref(),
            creation_date: record.creation_date,
        }
    }
}
