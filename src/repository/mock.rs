//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::query::{RecordCounts, RecordQuery};
use crate::domain::record::{NewRecord, Record};
use crate::repository::errors::RepositoryResult;
use crate::repository::{RecordReader, RecordWriter};

mock! {
    pub Repository {}

    impl RecordReader for Repository {
        fn count_records(&self) -> RepositoryResult<usize>;
        fn count_matching_records(&self, query: &RecordQuery) -> RepositoryResult<usize>;
        fn list_records(&self, query: &RecordQuery) -> RepositoryResult<Vec<Record>>;
        fn read_page(&self, query: &RecordQuery) -> RepositoryResult<(RecordCounts, Vec<Record>)>;
    }

    impl RecordWriter for Repository {
        fn create_records(&self, new_records: &[NewRecord]) -> RepositoryResult<usize>;
    }
}
