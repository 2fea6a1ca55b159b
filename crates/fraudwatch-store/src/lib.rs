//! Client side of the report store: one trait, two backends.
//!
//! Every operation is a single request/response. Nothing is cached and
//! nothing is retried; failures come back as [`StoreError`].

pub mod error;
pub mod rest;
pub mod sqlite;

use std::future::Future;

use fraudwatch_types::models::{Report, ReportInsert};

pub use error::StoreError;
pub use rest::RestStore;
pub use sqlite::SqliteStore;

pub trait ReportStore: Send + Sync {
    /// Create a report. The store assigns `id`, `created_at` and `updated_at`.
    fn insert(&self, payload: &ReportInsert) -> impl Future<Output = Result<Report, StoreError>> + Send;

    /// Every report, ordered by `created_at` descending.
    fn list(&self) -> impl Future<Output = Result<Vec<Report>, StoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Replace `name`, `mobile_number` and `amount_bdt` of an existing report.
    fn update(
        &self,
        id: i64,
        payload: &ReportInsert,
    ) -> impl Future<Output = Result<Report, StoreError>> + Send;
}

/// The store selected at startup.
#[derive(Clone)]
pub enum Backend {
    Sqlite(SqliteStore),
    Rest(RestStore),
}

impl Backend {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Rest(_) => "rest",
        }
    }
}

impl ReportStore for Backend {
    async fn insert(&self, payload: &ReportInsert) -> Result<Report, StoreError> {
        match self {
            Self::Sqlite(store) => store.insert(payload).await,
            Self::Rest(store) => store.insert(payload).await,
        }
    }

    async fn list(&self) -> Result<Vec<Report>, StoreError> {
        match self {
            Self::Sqlite(store) => store.list().await,
            Self::Rest(store) => store.list().await,
        }
    }

    async fn count(&self) -> Result<u64, StoreError> {
        match self {
            Self::Sqlite(store) => store.count().await,
            Self::Rest(store) => store.count().await,
        }
    }

    async fn update(&self, id: i64, payload: &ReportInsert) -> Result<Report, StoreError> {
        match self {
            Self::Sqlite(store) => store.update(id, payload).await,
            Self::Rest(store) => store.update(id, payload).await,
        }
    }
}
