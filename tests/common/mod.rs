#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use datatable_server::db::{DbPool, establish_connection_pool, run_migrations};
use datatable_server::domain::record::NewRecord;
use datatable_server::repository::DieselRepository;
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("temp path is not utf-8");
        let pool = establish_connection_pool(url).expect("failed to create pool");
        run_migrations(&pool).expect("failed to run migrations");
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn person(name: &str, city: Option<&str>, created: u32) -> NewRecord {
    NewRecord {
        name: Some(name.to_string()),
        city: city.map(str::to_string),
        creation_date: day(created),
        ..NewRecord::default()
    }
}

/// The three people used across the grid examples.
pub fn people() -> Vec<NewRecord> {
    vec![
        person("Ahmet", Some("Ankara"), 3),
        person("Mehmet", None, 1),
        person("Ayşe", Some("İzmir"), 2),
    ]
}
