use tracing::{debug, error, info};

use fraudwatch_store::{ReportStore, StoreError};
use fraudwatch_types::models::{Report, ReportForm, ReportInsert};

use crate::format::sanitize_mobile_input;
use crate::messages;
use crate::validation::{ReportField, ValidationErrors, validate_report};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submit is already outstanding; nothing was sent.
    Busy,
    /// The form has errors; nothing was sent.
    Invalid(ValidationErrors),
    Submitted(Report),
    /// The store refused or could not be reached. The form is kept.
    Failed(StoreError),
}

impl SubmitOutcome {
    /// Notification text for the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Busy => messages::SUBMIT_BUSY,
            Self::Invalid(_) => messages::FORM_HAS_ERRORS,
            Self::Submitted(_) => messages::SUBMIT_OK,
            Self::Failed(_) => messages::SUBMIT_FAILED,
        }
    }
}

/// State of the public report form.
#[derive(Debug, Default)]
pub struct SubmissionFlow {
    form: ReportForm,
    errors: ValidationErrors,
    submitting: bool,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ReportForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update one field as the user types. Clears that field's error; the
    /// mobile number keeps digits only, at most eleven.
    pub fn set_field(&mut self, field: ReportField, value: &str) {
        match field {
            ReportField::Name => self.form.name = value.to_string(),
            ReportField::MobileNumber => self.form.mobile_number = sanitize_mobile_input(value),
            ReportField::AmountBdt => self.form.amount_bdt = value.to_string(),
        }
        self.errors.clear(field);
    }

    /// Validate and mark the form as submitting. Returns the payload to
    /// insert, or the outcome to report without touching the store.
    pub fn begin(&mut self) -> Result<ReportInsert, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }

        match validate_report(&self.form) {
            Ok(payload) => {
                self.errors = ValidationErrors::default();
                self.submitting = true;
                Ok(payload)
            }
            Err(errors) => {
                debug!("Report form rejected: {}", errors);
                self.errors = errors.clone();
                Err(SubmitOutcome::Invalid(errors))
            }
        }
    }

    /// Apply the store's answer to a submit started with [`Self::begin`].
    pub fn finish(&mut self, result: Result<Report, StoreError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(report) => {
                info!("Report {} submitted", report.id);
                self.form = ReportForm::default();
                self.errors = ValidationErrors::default();
                SubmitOutcome::Submitted(report)
            }
            Err(e) => {
                error!("Report submission failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// One full submit: validate, a single insert, then update the form.
    pub async fn submit<S: ReportStore>(&mut self, store: &S) -> SubmitOutcome {
        let payload = match self.begin() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };
        let result = store.insert(&payload).await;
        self.finish(result)
    }
}
