use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    db::fold_case,
    domain::{
        query::{Column, PageWindow, RecordCounts, RecordQuery, SortDirection},
        record::{NewRecord, Record},
    },
    models::record::{NewRecord as DbNewRecord, Record as DbRecord},
    repository::{
        DieselRepository, RecordReader, RecordWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::records,
};

type BoxedRecords = records::BoxedQuery<'static, Sqlite>;

/// Builds a `LIKE` pattern matching `term` literally anywhere in a value.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn filtered(query: &RecordQuery) -> BoxedRecords {
    let mut boxed = records::table.into_boxed();

    if let Some(term) = query.folded_search() {
        let pattern = like_pattern(&term);
        boxed = boxed.filter(
            fold_case(records::name)
                .like(pattern.clone())
                .escape('\\')
                .or(fold_case(records::first_surname)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::second_surname)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::street)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::phone)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::zip_code)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::city)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(fold_case(records::notes).like(pattern).escape('\\')),
        );
    }

    boxed
}

/// Orders by `$column`, falling back to identifier ascending on ties.
macro_rules! order_by {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Asc => $query.order(($column.asc(), records::id.asc())),
            SortDirection::Desc => $query.order(($column.desc(), records::id.asc())),
        }
    };
}

fn ordered(query: &RecordQuery) -> BoxedRecords {
    let boxed = filtered(query);
    let direction = query.order.direction;

    let boxed = match query.order.column {
        Column::Id => match direction {
            SortDirection::Asc => boxed.order(records::id.asc()),
            SortDirection::Desc => boxed.order(records::id.desc()),
        },
        Column::Name => order_by!(boxed, records::name, direction),
        Column::FirstSurname => order_by!(boxed, records::first_surname, direction),
        Column::SecondSurname => order_by!(boxed, records::second_surname, direction),
        Column::Street => order_by!(boxed, records::street, direction),
        Column::Phone => order_by!(boxed, records::phone, direction),
        Column::ZipCode => order_by!(boxed, records::zip_code, direction),
        Column::City => order_by!(boxed, records::city, direction),
        Column::Notes => order_by!(boxed, records::notes, direction),
        Column::CreationDate => order_by!(boxed, records::creation_date, direction),
    };

    match query.window {
        Some(PageWindow { skip, take }) => boxed
            .limit(i64::try_from(take).unwrap_or(i64::MAX))
            .offset(i64::try_from(skip).unwrap_or(i64::MAX)),
        None => boxed,
    }
}

fn count_all(conn: &mut SqliteConnection) -> RepositoryResult<usize> {
    let total: i64 = records::table.count().get_result(conn)?;
    Ok(total as usize)
}

fn count_matching(conn: &mut SqliteConnection, query: &RecordQuery) -> RepositoryResult<usize> {
    let filtered: i64 = filtered(query).count().get_result(conn)?;
    Ok(filtered as usize)
}

fn load(conn: &mut SqliteConnection, query: &RecordQuery) -> RepositoryResult<Vec<Record>> {
    let items = ordered(query)
        .load::<DbRecord>(conn)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

impl RecordReader for DieselRepository {
    fn count_records(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        count_all(&mut conn)
    }

    fn count_matching_records(&self, query: &RecordQuery) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        count_matching(&mut conn, query)
    }

    fn list_records(&self, query: &RecordQuery) -> RepositoryResult<Vec<Record>> {
        let mut conn = self.conn()?;
        load(&mut conn, query)
    }

    fn read_page(&self, query: &RecordQuery) -> RepositoryResult<(RecordCounts, Vec<Record>)> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = count_all(conn)?;
            let filtered = count_matching(conn, query)?;
            let items = load(conn, query)?;
            Ok((RecordCounts { total, filtered }, items))
        })
    }
}

impl RecordWriter for DieselRepository {
    fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize> {
        if new_records.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewRecord> = new_records.iter().map(Into::into).collect();

        let affected = diesel::insert_into(records::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("me"), "%me%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
