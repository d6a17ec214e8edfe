//! Record store held in process memory.
//!
//! Shares the query semantics of [`crate::domain::query::select`], which makes
//! it a drop-in replacement for [`crate::repository::DieselRepository`] in
//! service tests and local demos.

use std::sync::{RwLock, RwLockReadGuard};

use crate::domain::query::{RecordCounts, RecordQuery, select};
use crate::domain::record::{NewRecord, Record};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{RecordReader, RecordWriter};

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<Record>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` as-is.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Record>>> {
        self.records
            .read()
            .map_err(|e| RepositoryError::Unexpected(format!("Record store poisoned: {e}")))
    }
}

impl RecordReader for InMemoryRepository {
    fn count_records(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    fn count_matching_records(&self, query: &RecordQuery) -> RepositoryResult<usize> {
        let matches = query.matcher();
        Ok(self.read()?.iter().filter(|&r| matches(r)).count())
    }

    fn list_records(&self, query: &RecordQuery) -> RepositoryResult<Vec<Record>> {
        Ok(self.read_page(query)?.1)
    }

    fn read_page(&self, query: &RecordQuery) -> RepositoryResult<(RecordCounts, Vec<Record>)> {
        let records = self.read()?;
        Ok(select(records.iter().cloned(), query))
    }
}

impl RecordWriter for InMemoryRepository {
    fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize> {
        let mut records = self
            .records
            .write()
            .map_err(|e| RepositoryError::Unexpected(format!("Record store poisoned: {e}")))?;

        let mut next_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        for new_record in new_records {
            next_id += 1;
            records.push(new_record.clone().into_record(next_id));
        }

        Ok(new_records.len())
    }
}
