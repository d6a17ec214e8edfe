//! Sample data for an empty store.

use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime, Utc};

use crate::domain::record::NewRecord;
use crate::repository::{RecordReader, RecordWriter};
use crate::services::{ServiceError, ServiceResult};

const FIRST_NAMES: &[&str] = &[
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Mustafa", "Emine", "Ali", "Hatice", "Hüseyin", "Zeynep",
    "İbrahim", "Elif", "Murat", "Özlem", "Çağla", "Gökhan", "Şule", "Burak", "Ebru", "Tuğba",
];

const LAST_NAMES: &[&str] = &[
    "Yılmaz", "Kaya", "Demir", "Şahin", "Çelik", "Yıldız", "Yıldırım", "Öztürk", "Aydın",
    "Özdemir", "Arslan", "Doğan", "Kılıç", "Aslan", "Çetin", "Kara", "Koç", "Kurt", "Özkan",
    "Şimşek",
];

const STREETS: &[&str] = &[
    "Atatürk Caddesi",
    "İstiklal Caddesi",
    "Cumhuriyet Sokak",
    "Gazi Bulvarı",
    "Bağdat Caddesi",
    "Menekşe Sokak",
    "Lale Sokak",
    "Çınar Sokak",
];

const CITIES: &[(&str, &str)] = &[
    ("İstanbul", "34"),
    ("Ankara", "06"),
    ("İzmir", "35"),
    ("Bursa", "16"),
    ("Antalya", "07"),
    ("Konya", "42"),
    ("Eskişehir", "26"),
    ("Trabzon", "61"),
    ("Şanlıurfa", "63"),
    ("Çanakkale", "17"),
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Serializes seeding so concurrent first requests insert one batch.
#[derive(Debug, Default)]
pub struct SeedGuard(Mutex<()>);

impl SeedGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

fn pick<'a>(values: &[&'a str]) -> &'a str {
    values[rand::random_range(0..values.len())]
}

fn sentence() -> String {
    let words = rand::random_range(4..10);
    let mut text = (0..words).map(|_| pick(LOREM)).collect::<Vec<_>>().join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

/// Generates one fake record created at some point in the past century.
pub fn fake_record(now: NaiveDateTime) -> NewRecord {
    let (city, plate) = CITIES[rand::random_range(0..CITIES.len())];
    let age = Duration::seconds(rand::random_range(0..100 * 365 * 24 * 60 * 60_i64));

    NewRecord::new(
        Some(pick(FIRST_NAMES).to_string()),
        Some(pick(LAST_NAMES).to_string()),
        Some(pick(LAST_NAMES).to_string()),
        Some(format!(
            "{} No:{}",
            pick(STREETS),
            rand::random_range(1..200_u32)
        )),
        Some(format!(
            "0 ({}) {:03} {:02} {:02}",
            rand::random_range(500..560_u32),
            rand::random_range(0..1000_u32),
            rand::random_range(0..100_u32),
            rand::random_range(0..100_u32)
        )),
        Some(format!("{plate}{:03}", rand::random_range(0..1000_u32))),
        Some(city.to_string()),
        Some(sentence()),
        now - age,
    )
}

/// Fills an empty store with `count` fake records, returning how many were
/// inserted.
pub fn seed_if_empty<R>(repo: &R, guard: &SeedGuard, count: usize) -> ServiceResult<usize>
where
    R: RecordReader + RecordWriter + ?Sized,
{
    let _lock = guard
        .0
        .lock()
        .map_err(|e| ServiceError::Internal(format!("Seed lock poisoned: {e}")))?;

    if repo.count_records()? > 0 {
        return Ok(0);
    }

    let now = Utc::now().naive_utc();
    let records: Vec<NewRecord> = (0..count).map(|_| fake_record(now)).collect();
    let inserted = repo.create_records(&records)?;

    log::info!("Seeded {inserted} sample record(s)");
    Ok(inserted)
}
