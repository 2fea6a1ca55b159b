/// Row type for `fraud_reports`. Timestamps stay as the RFC 3339 text SQLite
/// stores; callers parse them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: i64,
    pub name: String,
    pub mobile_number: String,
    pub amount_bdt: f64,
    pub created_at: String,
    pub updated_at: String,
}
