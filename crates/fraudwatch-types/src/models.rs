use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted fraud report as returned by the store.
///
/// `id`, `created_at` and `updated_at` are assigned by the store and are
/// never sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub mobile_number: String,
    pub amount_bdt: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized payload for inserting or fully replacing a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInsert {
    pub name: String,
    pub mobile_number: String,
    pub amount_bdt: f64,
}

/// Raw form input exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportForm {
    pub name: String,
    pub mobile_number: String,
    pub amount_bdt: String,
}

impl ReportForm {
    pub fn new(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        amount_bdt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile_number: mobile_number.into(),
            amount_bdt: amount_bdt.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.mobile_number.is_empty() && self.amount_bdt.is_empty()
    }
}

impl From<&Report> for ReportForm {
    fn from(report: &Report) -> Self {
        Self {
            name: report.name.clone(),
            mobile_number: report.mobile_number.clone(),
            amount_bdt: report.amount_bdt.to_string(),
        }
    }
}
