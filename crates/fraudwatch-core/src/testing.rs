use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};

use fraudwatch_store::{ReportStore, StoreError};
use fraudwatch_types::models::{Report, ReportInsert};

/// In-memory store that records every call and can be told to fail.
#[derive(Default)]
pub struct FakeStore {
    pub reports: Mutex<Vec<Report>>,
    pub inserted: Mutex<Vec<ReportInsert>>,
    pub calls: AtomicUsize,
    pub fail_with: Mutex<Option<StoreError>>,
}

impl FakeStore {
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Mutex::new(reports),
            ..Self::default()
        }
    }

    pub fn failing(err: StoreError) -> Self {
        Self {
            fail_with: Mutex::new(Some(err)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn report(id: i64, name: &str, mobile: &str, amount: f64) -> Report {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap() + chrono::Duration::minutes(id);
    Report {
        id,
        name: name.to_string(),
        mobile_number: mobile.to_string(),
        amount_bdt: amount,
        created_at: at,
        updated_at: at,
    }
}

impl ReportStore for FakeStore {
    async fn insert(&self, payload: &ReportInsert) -> Result<Report, StoreError> {
        self.enter()?;
        self.inserted.lock().unwrap().push(payload.clone());

        let mut reports = self.reports.lock().unwrap();
        let id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = report(id, &payload.name, &payload.mobile_number, payload.amount_bdt);
        reports.insert(0, created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Report>, StoreError> {
        self.enter()?;
        Ok(self.reports.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.enter()?;
        Ok(self.reports.lock().unwrap().len() as u64)
    }

    async fn update(&self, id: i64, payload: &ReportInsert) -> Result<Report, StoreError> {
        self.enter()?;
        let mut reports = self.reports.lock().unwrap();
        let existing = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        existing.name = payload.name.clone();
        existing.mobile_number = payload.mobile_number.clone();
        existing.amount_bdt = payload.amount_bdt;
        existing.updated_at = existing.updated_at + chrono::Duration::seconds(1);
        Ok(existing.clone())
    }
}
