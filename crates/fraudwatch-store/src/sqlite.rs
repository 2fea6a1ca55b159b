use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::error;

use fraudwatch_db::Database;
use fraudwatch_db::models::ReportRow;
use fraudwatch_types::models::{Report, ReportInsert};

use crate::{ReportStore, StoreError};

/// Report store backed by the embedded SQLite database.
///
/// rusqlite is blocking, so every call is moved onto the blocking pool.
#[derive(Clone)]
pub struct SqliteStore {
    db: Arc<Database>,
}

impl SqliteStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(Database::open(path)?)))
    }

    pub fn in_memory() -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(Database::open_in_memory()?)))
    }

    async fn run<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                StoreError::Backend(e.to_string())
            })?
            .map_err(StoreError::from)
    }
}

impl ReportStore for SqliteStore {
    async fn insert(&self, payload: &ReportInsert) -> Result<Report, StoreError> {
        let payload = payload.clone();
        let row = self
            .run(move |db| db.insert_report(&payload.name, &payload.mobile_number, payload.amount_bdt))
            .await?;
        into_report(row)
    }

    async fn list(&self) -> Result<Vec<Report>, StoreError> {
        let rows = self.run(|db| db.list_reports()).await?;
        rows.into_iter().map(into_report).collect()
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.run(|db| db.count_reports()).await
    }

    async fn update(&self, id: i64, payload: &ReportInsert) -> Result<Report, StoreError> {
        let payload = payload.clone();
        let row = self
            .run(move |db| {
                db.update_report(id, &payload.name, &payload.mobile_number, payload.amount_bdt)
            })
            .await?
            .ok_or(StoreError::NotFound(id))?;
        into_report(row)
    }
}

fn into_report(row: ReportRow) -> Result<Report, StoreError> {
    Ok(Report {
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
        id: row.id,
        name: row.name,
        mobile_number: row.mobile_number,
        amount_bdt: row.amount_bdt,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // Rows written by `datetime('now')` have no zone; they are UTC.
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .map_err(|e| StoreError::Decode(format!("timestamp '{}': {}", raw, e)))
}
