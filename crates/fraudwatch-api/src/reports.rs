use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use fraudwatch_core::admin::{AdminFlow, EditDraft, apply_edit};
use fraudwatch_core::messages;
use fraudwatch_core::submission::{SubmissionFlow, SubmitOutcome};
use fraudwatch_types::api::{ReportListResponse, ReportResponse, ReportsQuery, SubmitResponse};
use fraudwatch_types::models::ReportForm;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/reports — public submission.
pub async fn submit_report(
    State(state): State<AppState>,
    Json(form): Json<ReportForm>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let mut flow = SubmissionFlow::with_form(form);

    match flow.submit(&state.store).await {
        SubmitOutcome::Submitted(report) => Ok((
            StatusCode::CREATED,
            Json(SubmitResponse {
                message: messages::SUBMIT_OK.to_string(),
                report: Some(report),
                form: flow.form().clone(),
            }),
        )),
        SubmitOutcome::Invalid(errors) => Err(ApiError::Validation {
            errors,
            form: flow.form().clone(),
        }),
        SubmitOutcome::Failed(source) => Err(ApiError::Submit {
            source,
            form: flow.form().clone(),
        }),
        SubmitOutcome::Busy => Err(ApiError::Busy),
    }
}

/// GET /api/admin/reports?q= — newest first, filtered by the search term.
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportsQuery>,
) -> Result<Json<ReportListResponse>, ApiError> {
    let mut flow = AdminFlow::new();
    flow.initialize(&state.store).await.map_err(ApiError::Load)?;
    flow.search(&query.q);

    Ok(Json(ReportListResponse {
        search: flow.search_term().to_string(),
        totals: flow.totals(),
        reports: flow.visible().into_iter().cloned().collect(),
    }))
}

/// PUT /api/admin/reports/{id} — full replace of the editable fields.
pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ReportForm>,
) -> Result<Json<ReportResponse>, ApiError> {
    let report = apply_edit(&state.store, &EditDraft::new(id, form)).await?;

    Ok(Json(ReportResponse {
        message: messages::EDIT_OK.to_string(),
        report,
    }))
}
