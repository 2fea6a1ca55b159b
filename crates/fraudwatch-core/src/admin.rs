use thiserror::Error;
use tracing::{error, info, warn};

use fraudwatch_store::{ReportStore, StoreError};
use fraudwatch_types::api::ReportTotals;
use fraudwatch_types::models::{Report, ReportForm};

use crate::format::format_amount;
use crate::messages;
use crate::validation::{EditRejection, validate_edit};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("edit rejected: {0}")]
    Invalid(#[from] EditRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Invalid(rejection) => rejection.message,
            Self::Store(_) => messages::EDIT_FAILED,
        }
    }
}

/// Editable copy of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: i64,
    pub form: ReportForm,
}

impl EditDraft {
    pub fn new(id: i64, form: ReportForm) -> Self {
        Self { id, form }
    }
}

impl From<&Report> for EditDraft {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            form: ReportForm::from(report),
        }
    }
}

/// Validate a draft and send it to the store as a full replace.
pub async fn apply_edit<S: ReportStore>(store: &S, draft: &EditDraft) -> Result<Report, EditError> {
    let payload = validate_edit(&draft.form)?;

    match store.update(draft.id, &payload).await {
        Ok(report) => {
            info!("Report {} updated", report.id);
            Ok(report)
        }
        Err(e) => {
            error!("Updating report {} failed: {}", draft.id, e);
            Err(e.into())
        }
    }
}

/// Search over the fetched list: name case-insensitively, mobile number as typed.
pub fn matches(report: &Report, term: &str) -> bool {
    report.name.to_lowercase().contains(&term.to_lowercase()) || report.mobile_number.contains(term)
}

/// Local view state of the admin dashboard.
#[derive(Debug, Default)]
pub struct AdminFlow {
    reports: Vec<Report>,
    search: String,
    load_error: Option<&'static str>,
}

impl AdminFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the report list once. Searching afterwards never hits the store.
    pub async fn initialize<S: ReportStore>(&mut self, store: &S) -> Result<(), StoreError> {
        match store.list().await {
            Ok(reports) => {
                info!("Loaded {} reports", reports.len());
                self.reports = reports;
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Loading reports failed: {}", e);
                self.load_error = Some(messages::LOAD_FAILED);
                Err(e)
            }
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn load_error(&self) -> Option<&'static str> {
        self.load_error
    }

    pub fn search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn visible(&self) -> Vec<&Report> {
        self.reports.iter().filter(|r| matches(r, &self.search)).collect()
    }

    /// Text for an empty result list.
    pub fn empty_message(&self) -> &'static str {
        if self.search.is_empty() {
            messages::NO_REPORTS
        } else {
            messages::NO_MATCHES
        }
    }

    /// Totals over every fetched report, ignoring the search filter.
    pub fn totals(&self) -> ReportTotals {
        let total_amount_bdt: f64 = self.reports.iter().map(|r| r.amount_bdt).sum();
        ReportTotals {
            total_reports: self.reports.len(),
            total_amount_bdt,
            total_amount_display: format_amount(total_amount_bdt),
        }
    }

    pub fn begin_edit(&self, id: i64) -> Option<EditDraft> {
        self.reports.iter().find(|r| r.id == id).map(EditDraft::from)
    }

    /// Save a draft. On success the local copy is replaced by id; on failure
    /// the local list is left as it was.
    pub async fn save_edit<S: ReportStore>(
        &mut self,
        store: &S,
        draft: &EditDraft,
    ) -> Result<Report, EditError> {
        let updated = apply_edit(store, draft).await?;
        self.replace(updated.clone());
        Ok(updated)
    }

    /// Swap in a fresh copy of a report. Returns false when the id is not in the list.
    pub fn replace(&mut self, report: Report) -> bool {
        match self.reports.iter_mut().find(|r| r.id == report.id) {
            Some(slot) => {
                *slot = report;
                true
            }
            None => false,
        }
    }
}
