use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use fraudwatch_core::admin::EditError;
use fraudwatch_core::messages;
use fraudwatch_core::session::AuthError;
use fraudwatch_core::validation::ValidationErrors;
use fraudwatch_store::StoreError;
use fraudwatch_types::models::ReportForm;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("report form has errors: {errors}")]
    Validation {
        errors: ValidationErrors,
        form: ReportForm,
    },

    #[error("report submission failed: {source}")]
    Submit { source: StoreError, form: ReportForm },

    #[error("a submission is already in progress")]
    Busy,

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("reports could not be loaded: {0}")]
    Load(StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("admin session required")]
    Unauthorized,
}

fn store_status(e: &StoreError) -> StatusCode {
    match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { errors, form } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": messages::FORM_HAS_ERRORS, "errors": errors, "form": form }),
            ),
            ApiError::Submit { source, form } => (
                store_status(&source),
                json!({ "message": messages::SUBMIT_FAILED, "form": form }),
            ),
            ApiError::Busy => (StatusCode::CONFLICT, json!({ "message": messages::SUBMIT_BUSY })),
            ApiError::Edit(e) => {
                let status = match &e {
                    EditError::Invalid(_) => StatusCode::BAD_REQUEST,
                    EditError::Store(source) => store_status(source),
                };
                let field = match &e {
                    EditError::Invalid(rejection) => Some(rejection.field),
                    EditError::Store(_) => None,
                };
                (status, json!({ "message": e.message(), "field": field }))
            }
            ApiError::Load(_) => (StatusCode::BAD_GATEWAY, json!({ "message": messages::LOAD_FAILED })),
            ApiError::Auth(AuthError::Blank) => {
                (StatusCode::BAD_REQUEST, json!({ "message": messages::PASSWORD_BLANK }))
            }
            ApiError::Auth(AuthError::Mismatch) => {
                (StatusCode::UNAUTHORIZED, json!({ "message": messages::PASSWORD_WRONG }))
            }
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "message": messages::ADMIN_REQUIRED }))
            }
        };

        (status, Json(body)).into_response()
    }
}
