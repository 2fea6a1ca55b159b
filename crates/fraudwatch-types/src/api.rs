use serde::{Deserialize, Serialize};

use crate::models::{Report, ReportForm};

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub state: SessionState,
    pub message: Option<String>,
}

// -- Reports --

#[derive(Debug, Default, Deserialize)]
pub struct ReportsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportTotals {
    pub total_reports: usize,
    pub total_amount_bdt: f64,
    pub total_amount_display: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub search: String,
    pub totals: ReportTotals,
    pub reports: Vec<Report>,
}

/// Body returned by the public submission endpoint.
///
/// `form` carries the values the client should show afterwards: empty on
/// success, the submitted values otherwise.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub report: Option<Report>,
    pub form: ReportForm,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    pub message: String,
    pub report: Report,
}
