use validator::Validate;

use crate::domain::query::{Column, RecordQuery, SortDirection};
use crate::domain::record::Record;
use crate::dto::datatable::{DtParameters, DtResult};
use crate::repository::RecordReader;
use crate::services::ServiceResult;

/// Translates grid parameters into a record query without a window.
///
/// Only the first order instruction is honoured. An instruction pointing at a
/// missing column or at a name that is not a record attribute degrades to
/// identifier ascending instead of failing the request.
pub fn build_query(params: &DtParameters) -> RecordQuery {
    let mut query = RecordQuery::new();

    if let Some(term) = params.search_value() {
        query = query.search(term);
    }

    if let Some(order) = params.order.first() {
        let name = params
            .columns
            .get(order.column)
            .and_then(|column| column.data.as_deref());

        match name.and_then(Column::from_name) {
            Some(column) => query = query.order_by(column, order.dir),
            None => {
                log::warn!(
                    "Unknown sort column {:?} (index {}), ordering by id",
                    name,
                    order.column
                );
                query = query.order_by(Column::Id, SortDirection::Asc);
            }
        }
    }

    query
}

/// Answers one grid page request.
pub fn load_table<R>(repo: &R, params: &DtParameters) -> ServiceResult<DtResult<Record>>
where
    R: RecordReader + ?Sized,
{
    params.validate()?;

    // Validation guarantees both are non-negative.
    let skip = params.start as usize;
    let take = params.length as usize;

    let query = build_query(params).paginate(skip, take);
    let (counts, data) = repo.read_page(&query)?;

    Ok(DtResult {
        draw: params.draw.clone(),
        records_total: counts.total,
        records_filtered: counts.filtered,
        data,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::json;

    use super::*;
    use crate::domain::record::NewRecord;
    use crate::dto::datatable::{DtColumn, DtOrder, DtSearch};
    use crate::repository::{InMemoryRepository, RecordWriter};
    use crate::services::ServiceError;

    fn person(name: &str, city: Option<&str>) -> NewRecord {
        NewRecord {
            name: Some(name.to_string()),
            city: city.map(str::to_string),
            creation_date: NaiveDateTime::default(),
            ..NewRecord::default()
        }
    }

    fn repo() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.create_records(&[
            person("Ahmet", Some("Ankara")),
            person("Mehmet", None),
            person("Ayşe", Some("İzmir")),
        ])
        .unwrap();
        repo
    }

    fn columns() -> Vec<DtColumn> {
        ["id", "name", "city"]
            .into_iter()
            .map(|data| DtColumn {
                data: Some(data.to_string()),
                orderable: true,
                searchable: true,
                ..DtColumn::default()
            })
            .collect()
    }

    fn params(search: Option<&str>, order: Option<(usize, SortDirection)>) -> DtParameters {
        DtParameters {
            draw: json!(7),
            columns: columns(),
            order: order
                .map(|(column, dir)| vec![DtOrder { column, dir }])
                .unwrap_or_default(),
            start: 0,
            length: 10,
            search: search.map(|value| DtSearch {
                value: Some(value.to_string()),
                regex: false,
            }),
        }
    }

    fn names(result: &DtResult<Record>) -> Vec<&str> {
        result
            .data
            .iter()
            .map(|r| r.name.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn search_matches_substring_in_id_order() {
        let result = load_table(&repo(), &params(Some("me"), None)).unwrap();

        assert_eq!(result.draw, json!(7));
        assert_eq!(result.records_total, 3);
        assert_eq!(result.records_filtered, 2);
        assert_eq!(names(&result), vec!["Ahmet", "Mehmet"]);
    }

    #[test]
    fn total_does_not_depend_on_search() {
        let repo = repo();
        for term in [None, Some("a"), Some("zzz"), Some("İZMİR")] {
            let result = load_table(&repo, &params(term, None)).unwrap();
            assert_eq!(result.records_total, 3);
            assert!(result.records_filtered <= result.records_total);
        }
    }

    #[test]
    fn orders_by_requested_column() {
        let result = load_table(&repo(), &params(None, Some((1, SortDirection::Desc)))).unwrap();
        assert_eq!(names(&result), vec!["Mehmet", "Ayşe", "Ahmet"]);

        let result = load_table(&repo(), &params(None, Some((2, SortDirection::Asc)))).unwrap();
        assert_eq!(names(&result), vec!["Mehmet", "Ahmet", "Ayşe"]);
    }

    #[test]
    fn unknown_column_falls_back_to_id() {
        let mut request = params(None, Some((0, SortDirection::Desc)));
        request.columns[0].data = Some("password".to_string());
        let result = load_table(&repo(), &request).unwrap();
        assert_eq!(names(&result), vec!["Ahmet", "Mehmet", "Ayşe"]);

        let request = params(None, Some((42, SortDirection::Desc)));
        let result = load_table(&repo(), &request).unwrap();
        assert_eq!(names(&result), vec!["Ahmet", "Mehmet", "Ayşe"]);
    }

    #[test]
    fn window_is_applied_after_filtering() {
        let mut request = params(None, None);
        request.start = 1;
        request.length = 1;
        let result = load_table(&repo(), &request).unwrap();
        assert_eq!(result.records_filtered, 3);
        assert_eq!(names(&result), vec!["Mehmet"]);

        request.start = 5;
        let result = load_table(&repo(), &request).unwrap();
        assert!(result.data.is_empty());

        request.start = 0;
        request.length = 0;
        let result = load_table(&repo(), &request).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.records_filtered, 3);
    }

    #[test]
    fn negative_window_is_rejected() {
        let mut request = params(None, None);
        request.start = -1;
        let result = load_table(&repo(), &request);
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let mut request = params(None, None);
        request.length = -1;
        let result = load_table(&repo(), &request);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
