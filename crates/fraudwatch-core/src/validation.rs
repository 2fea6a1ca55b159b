//! Field rules for fraud reports.
//!
//! Two validators live here. [`validate_report`] guards the public form and
//! reports every failing field at once. [`validate_edit`] guards the admin
//! edit dialog; it is deliberately looser (no minimum name length, no mobile
//! pattern) so that rows stored under older rules stay editable, and it stops
//! at the first failing field.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use fraudwatch_types::models::{ReportForm, ReportInsert};

use crate::messages;

pub const NAME_MIN_CHARS: usize = 2;
pub const MOBILE_DIGITS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    Name,
    MobileNumber,
    AmountBdt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    MinLength,
    Format,
    InvalidNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// Every field that failed, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<ReportField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ReportField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind(&self, field: ReportField) -> Option<ErrorKind> {
        self.0.get(&field).map(|e| e.kind)
    }

    pub fn clear(&mut self, field: ReportField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReportField, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn insert(&mut self, field: ReportField, err: FieldError) {
        self.0.insert(field, err);
    }
}

/// Validate the public form. On success the payload is normalized: name
/// trimmed, whitespace removed from the mobile number, amount parsed.
pub fn validate_report(form: &ReportForm) -> Result<ReportInsert, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert(ReportField::Name, FieldError::new(ErrorKind::Required, messages::NAME_REQUIRED));
    } else if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(ReportField::Name, FieldError::new(ErrorKind::MinLength, messages::NAME_TOO_SHORT));
    }

    let mobile_number = strip_whitespace(&form.mobile_number);
    if form.mobile_number.trim().is_empty() {
        errors.insert(
            ReportField::MobileNumber,
            FieldError::new(ErrorKind::Required, messages::MOBILE_REQUIRED),
        );
    } else if !is_valid_mobile(&mobile_number) {
        errors.insert(
            ReportField::MobileNumber,
            FieldError::new(ErrorKind::Format, messages::MOBILE_INVALID),
        );
    }

    let amount = parse_amount(&form.amount_bdt);
    if form.amount_bdt.trim().is_empty() {
        errors.insert(
            ReportField::AmountBdt,
            FieldError::new(ErrorKind::Required, messages::AMOUNT_REQUIRED),
        );
    } else if amount.is_none() {
        errors.insert(
            ReportField::AmountBdt,
            FieldError::new(ErrorKind::InvalidNumber, messages::AMOUNT_INVALID),
        );
    }

    match amount {
        Some(amount_bdt) if errors.is_empty() => Ok(ReportInsert {
            name: name.to_string(),
            mobile_number,
            amount_bdt,
        }),
        _ => Err(errors),
    }
}

/// First problem found by the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field:?}: {message}")]
pub struct EditRejection {
    pub field: ReportField,
    pub message: &'static str,
}

/// Validate the admin edit dialog.
pub fn validate_edit(form: &ReportForm) -> Result<ReportInsert, EditRejection> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(EditRejection {
            field: ReportField::Name,
            message: messages::EDIT_NAME_REQUIRED,
        });
    }

    if form.mobile_number.trim().is_empty() {
        return Err(EditRejection {
            field: ReportField::MobileNumber,
            message: messages::EDIT_MOBILE_REQUIRED,
        });
    }

    let amount_bdt = parse_amount(&form.amount_bdt).ok_or(EditRejection {
        field: ReportField::AmountBdt,
        message: messages::EDIT_AMOUNT_INVALID,
    })?;

    Ok(ReportInsert {
        name: name.to_string(),
        // stored mobile numbers never carry whitespace
        mobile_number: strip_whitespace(&form.mobile_number),
        amount_bdt,
    })
}

/// A finite amount strictly greater than zero, or `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// `01` followed by an operator digit in `3..=9` and eight more digits.
pub fn is_valid_mobile(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() == MOBILE_DIGITS
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[0] == b'0'
        && bytes[1] == b'1'
        && (b'3'..=b'9').contains(&bytes[2])
}

pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
