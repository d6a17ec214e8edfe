use crate::{
    db::DbPool,
    domain::{
        query::{RecordCounts, RecordQuery},
        record::{NewRecord, Record},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod record;

pub use memory::InMemoryRepository;

/// Read capabilities the grid needs from a record store.
pub trait RecordReader {
    /// Number of stored records, ignoring any search.
    fn count_records(&self) -> RepositoryResult<usize>;
    /// Number of records matching the query's search, ignoring its window.
    fn count_matching_records(&self, query: &RecordQuery) -> RepositoryResult<usize>;
    /// Records matching the query, ordered and windowed.
    fn list_records(&self, query: &RecordQuery) -> RepositoryResult<Vec<Record>>;

    /// Counts and slice for one page. Stores able to read a consistent
    /// snapshot should override this.
    fn read_page(&self, query: &RecordQuery) -> RepositoryResult<(RecordCounts, Vec<Record>)> {
        let total = self.count_records()?;
        let filtered = self.count_matching_records(query)?;
        let items = self.list_records(query)?;
        Ok((RecordCounts { total, filtered }, items))
    }
}

pub trait RecordWriter {
    fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository over the SQLite `records` table.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}
