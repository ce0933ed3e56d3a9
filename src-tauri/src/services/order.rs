//! Order submission: validates the order form and tracks where the current
//! submission stands. `Editing -> Validating`, then `Accepted`, or back to
//! `Editing` when the form is rejected or the accept effect fails.

use regex::Regex;
use serde::Serialize;

use crate::error::AppError;
use crate::models::order::{FieldErrors, OrderForm};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_INVALID: &str = "Valid email required.";
pub const FABRIC_REQUIRED: &str = "Fabric is required.";
pub const DETAILS_REQUIRED: &str = "Please provide order details.";

/// Toast shown when a submission is rejected.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix errors in the form.";
/// Acknowledgment shown when a submission is accepted.
pub const ORDER_ACCEPTED_MESSAGE: &str = "Thank you for your order! We will contact you soon.";

const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionPhase {
    Editing,
    Validating,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum OrderOutcome {
    Accepted { acknowledgment: &'static str },
    Rejected { errors: FieldErrors },
}

pub struct OrderSubmission {
    phase: SubmissionPhase,
    email: Regex,
}

impl OrderSubmission {
    pub fn new() -> crate::error::Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| AppError::Internal(format!("Regex compile error: {}", e)))?;
        Ok(Self {
            phase: SubmissionPhase::Editing,
            email,
        })
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_editable(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    /// Run every check, collecting one message per failing field.
    pub fn validate(&self, form: &OrderForm) -> FieldErrors {
        FieldErrors {
            name: form.name.trim().is_empty().then_some(NAME_REQUIRED),
            email: (!self.email.is_match(&form.email)).then_some(EMAIL_INVALID),
            fabric: form.fabric.trim().is_empty().then_some(FABRIC_REQUIRED),
            details: form.details.trim().is_empty().then_some(DETAILS_REQUIRED),
        }
    }

    /// Validate a submission. Each call is a fresh submission, whatever the
    /// previous outcome was.
    ///
    /// `on_accept` runs once the form passes. The phase becomes `Accepted`
    /// only if it succeeds; its error is returned with the phase back at
    /// `Editing`. A rejected form also returns to `Editing`.
    pub fn submit<F>(&mut self, form: &OrderForm, on_accept: F) -> crate::error::Result<OrderOutcome>
    where
        F: FnOnce() -> crate::error::Result<()>,
    {
        self.phase = SubmissionPhase::Validating;
        let errors = self.validate(form);
        if !errors.is_empty() {
            log::info!("Order submission rejected: {:?}", errors);
            self.phase = SubmissionPhase::Editing;
            return Ok(OrderOutcome::Rejected { errors });
        }
        if let Err(e) = on_accept() {
            log::warn!("Order accepted but could not be completed: {}", e);
            self.phase = SubmissionPhase::Editing;
            return Err(e);
        }
        self.phase = SubmissionPhase::Accepted;
        Ok(OrderOutcome::Accepted {
            acknowledgment: ORDER_ACCEPTED_MESSAGE,
        })
    }
}
