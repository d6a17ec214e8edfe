//! Filtering, ordering and windowing of record sequences.
//!
//! Column names coming from the grid are resolved through a closed table of
//! [`Column`] values, each carrying a typed comparator. The SQL adapter in
//! [`crate::repository`] mirrors the semantics implemented here by
//! [`select`]:
//!
//! * search folds case with Unicode lowercasing and matches substrings of any
//!   non-null text attribute;
//! * `None` sorts before any value, so nulls come first in ascending order and
//!   last in descending order;
//! * ties are broken by identifier ascending.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;

/// Sortable attributes of a [`Record`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Column {
    #[default]
    Id,
    Name,
    FirstSurname,
    SecondSurname,
    Street,
    Phone,
    ZipCode,
    City,
    Notes,
    CreationDate,
}

type Comparator = fn(&Record, &Record) -> Ordering;

/// Logical column names as sent by the grid, with their comparators.
const COLUMNS: &[(&str, Column, Comparator)] = &[
    ("id", Column::Id, |a: &Record, b: &Record| a.id.cmp(&b.id)),
    ("name", Column::Name, |a: &Record, b: &Record| a.name.cmp(&b.name)),
    ("firstSurname", Column::FirstSurname, |a: &Record, b: &Record| {
        a.first_surname.cmp(&b.first_surname)
    }),
    ("secondSurname", Column::SecondSurname, |a: &Record, b: &Record| {
        a.second_surname.cmp(&b.second_surname)
    }),
    ("street", Column::Street, |a: &Record, b: &Record| a.street.cmp(&b.street)),
    ("phone", Column::Phone, |a: &Record, b: &Record| a.phone.cmp(&b.phone)),
    ("zipCode", Column::ZipCode, |a: &Record, b: &Record| a.zip_code.cmp(&b.zip_code)),
    ("city", Column::City, |a: &Record, b: &Record| a.city.cmp(&b.city)),
    ("notes", Column::Notes, |a: &Record, b: &Record| a.notes.cmp(&b.notes)),
    ("creationDate", Column::CreationDate, |a: &Record, b: &Record| {
        a.creation_date.cmp(&b.creation_date)
    }),
];

impl Column {
    /// Resolves a logical column name, ignoring ASCII case and underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name.chars().filter(|c| *c != '_').collect();
        COLUMNS
            .iter()
            .find(|(known, _, _)| known.eq_ignore_ascii_case(&wanted))
            .map(|(_, column, _)| *column)
    }

    pub fn name(self) -> &'static str {
        self.entry().0
    }

    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        (self.entry().2)(a, b)
    }

    fn entry(self) -> &'static (&'static str, Column, Comparator) {
        COLUMNS
            .iter()
            .find(|(_, column, _)| *column == self)
            .unwrap_or(&COLUMNS[0])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ASC", alias = "Asc")]
    Asc,
    #[serde(alias = "DESC", alias = "Desc")]
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(column: Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Total order: the requested column first, identifier ascending on ties.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let primary = self.column.compare(a, b);
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Skip/take window applied after filtering and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub take: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub search: Option<String>,
    pub order: SortOrder,
    pub window: Option<PageWindow>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term verbatim; only an empty term leaves the query
    /// unfiltered.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn order_by(mut self, column: Column, direction: SortDirection) -> Self {
        self.order = SortOrder::new(column, direction);
        self
    }

    pub fn paginate(mut self, skip: usize, take: usize) -> Self {
        self.window = Some(PageWindow { skip, take });
        self
    }

    /// Drops the window, keeping search and order.
    pub fn unpaginated(mut self) -> Self {
        self.window = None;
        self
    }

    /// Case-folded search term, if any.
    pub fn folded_search(&self) -> Option<String> {
        self.search.as_deref().map(str::to_lowercase)
    }

    /// Returns a predicate that folds the search term once and tests records
    /// against it.
    pub fn matcher(&self) -> impl Fn(&Record) -> bool + use<> {
        let folded = self.folded_search();
        move |record: &Record| match &folded {
            Some(term) => matches_term(record, term),
            None => true,
        }
    }
}

fn matches_term(record: &Record, folded_term: &str) -> bool {
    record
        .text_fields()
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(folded_term))
}

/// Number of stored and matching records observed by one read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RecordCounts {
    pub total: usize,
    pub filtered: usize,
}

/// Applies the query to a record sequence, returning the counts and the
/// selected slice.
pub fn select<I>(records: I, query: &RecordQuery) -> (RecordCounts, Vec<Record>)
where
    I: IntoIterator<Item = Record>,
{
    let matches = query.matcher();
    let mut total = 0;
    let mut selected: Vec<Record> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|record| matches(record))
        .collect();

    let counts = RecordCounts {
        total,
        filtered: selected.len(),
    };

    selected.sort_by(|a, b| query.order.compare(a, b));

    let selected = match query.window {
        Some(PageWindow { skip, take }) => selected.into_iter().skip(skip).take(take).collect(),
        None => selected,
    };

    (counts, selected)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(id: i32, name: Option<&str>, city: Option<&str>) -> Record {
        Record {
            id,
            name: name.map(str::to_string),
            city: city.map(str::to_string),
            creation_date: NaiveDate::from_ymd_opt(2020, 1, id as u32 % 28 + 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, Some("Ahmet"), Some("Ankara")),
            record(2, Some("Mehmet"), None),
            record(3, Some("Ayşe"), Some("İzmir")),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.name.as_deref().unwrap_or("-"))
            .collect()
    }

    #[test]
    fn resolves_column_names_loosely() {
        assert_eq!(Column::from_name("firstSurname"), Some(Column::FirstSurname));
        assert_eq!(Column::from_name("FirstSurname"), Some(Column::FirstSurname));
        assert_eq!(Column::from_name("zip_code"), Some(Column::ZipCode));
        assert_eq!(Column::from_name("ID"), Some(Column::Id));
        assert_eq!(Column::from_name("password"), None);
        assert_eq!(Column::from_name(""), None);
    }

    #[test]
    fn every_column_round_trips_through_its_name() {
        for (name, column, _) in COLUMNS {
            assert_eq!(column.name(), *name);
            assert_eq!(Column::from_name(name), Some(*column));
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = RecordQuery::new().search("ME");
        let (counts, items) = select(sample(), &query);

        assert_eq!(counts, RecordCounts { total: 3, filtered: 2 });
        assert_eq!(names(&items), vec!["Ahmet", "Mehmet"]);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let query = RecordQuery::new().search("AYŞE");
        let (_, items) = select(sample(), &query);

        assert_eq!(names(&items), vec!["Ayşe"]);
    }

    #[test]
    fn search_skips_null_attributes() {
        let query = RecordQuery::new().search("ankara");
        let (counts, items) = select(sample(), &query);

        assert_eq!(counts.filtered, 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn only_empty_search_is_ignored() {
        let query = RecordQuery::new().search("");
        assert_eq!(query.search, None);
        let (counts, _) = select(sample(), &query);
        assert_eq!(counts.filtered, 3);

        let query = RecordQuery::new().search(" ");
        assert_eq!(query.search.as_deref(), Some(" "));
        let (counts, items) = select(sample(), &query);
        assert_eq!(counts, RecordCounts { total: 3, filtered: 0 });
        assert!(items.is_empty());
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let (_, items) = select(sample(), &RecordQuery::new().search("Ahmet "));
        assert!(items.is_empty());

        let mut records = sample();
        records[1].notes = Some("call Ahmet tomorrow".to_string());
        let (_, items) = select(records.clone(), &RecordQuery::new().search(" "));
        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);

        let query = RecordQuery::new().search("Ahmet ");
        assert!(!query.matcher()(&records[0]));
        assert!(query.matcher()(&records[1]));
    }

    #[test]
    fn nulls_sort_first_ascending_and_last_descending() {
        let asc = RecordQuery::new().order_by(Column::City, SortDirection::Asc);
        let (_, items) = select(sample(), &asc);
        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);

        let desc = RecordQuery::new().order_by(Column::City, SortDirection::Desc);
        let (_, items) = select(sample(), &desc);
        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn ties_are_broken_by_id() {
        let records = vec![
            record(3, Some("Can"), None),
            record(1, Some("Can"), None),
            record(2, Some("Can"), None),
        ];
        let query = RecordQuery::new().order_by(Column::Name, SortDirection::Desc);
        let (_, items) = select(records, &query);

        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let (counts, items) = select(sample(), &RecordQuery::new().paginate(10, 5));
        assert_eq!(counts.filtered, 3);
        assert!(items.is_empty());

        let (_, items) = select(sample(), &RecordQuery::new().paginate(0, 0));
        assert!(items.is_empty());
    }

    #[test]
    fn pages_concatenate_to_the_full_sequence() {
        let records: Vec<Record> = (1..=23)
            .map(|id| record(id, Some(&format!("N{}", 23 - id)), None))
            .collect();
        let ordered = RecordQuery::new().order_by(Column::Name, SortDirection::Asc);
        let (_, full) = select(records.clone(), &ordered);

        let take = 5;
        let mut collected = Vec::new();
        let mut skip = 0;
        loop {
            let (_, page) = select(records.clone(), &ordered.clone().paginate(skip, take));
            if page.is_empty() {
                break;
            }
            collected.extend(page);
            skip += take;
        }

        assert_eq!(collected, full);
    }
}
