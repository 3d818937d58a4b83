//! Contact form state and submission lifecycle.

use crate::relay::{ContactMessage, RelayError};
use crate::state::navigation::FormField;
use crate::timer::Deadline;
use log::*;
use std::time::{Duration, Instant};

/// How long the success banner stays visible.
pub const DEFAULT_SUCCESS_BANNER: Duration = Duration::from_millis(3000);

/// Specifying why a submission failed.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureReason {
    Validation,
    Network,
}

/// Specifying the submission lifecycle.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

/// Reason a submit request did not produce a message to send.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SubmitRejected {
    /// A submission is already in flight.
    Busy,
    /// A required field is blank.
    Invalid,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmissionStatus,
    success_banner: Duration,
    success_deadline: Option<Deadline>,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::new(DEFAULT_SUCCESS_BANNER)
    }
}

impl ContactForm {
    pub fn new(success_banner: Duration) -> Self {
        ContactForm {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: SubmissionStatus::Idle,
            success_banner,
            success_deadline: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Return true while the success banner should be drawn.
    ///
    pub fn shows_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Append a character to a field. Ignored while submitting.
    ///
    pub fn insert_char(&mut self, field: FormField, c: char) {
        if self.is_submitting() {
            return;
        }
        self.field_mut(field).push(c);
        self.clear_failure();
    }

    /// Remove the last character of a field. Ignored while submitting.
    ///
    pub fn delete_char(&mut self, field: FormField) {
        if self.is_submitting() {
            return;
        }
        self.field_mut(field).pop();
        self.clear_failure();
    }

    fn clear_failure(&mut self) {
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Return true if every field has content after trimming.
    ///
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Validate and move to submitting. Returns the message to post, which
    /// the caller must send exactly once.
    ///
    pub fn begin_submission(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.is_submitting() {
            debug!("Ignoring submit while a submission is in flight.");
            return Err(SubmitRejected::Busy);
        }
        self.success_deadline = None;
        if !self.is_complete() {
            info!("Contact form is missing required fields.");
            self.status = SubmissionStatus::Failed(FailureReason::Validation);
            return Err(SubmitRejected::Invalid);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the relay outcome of the in-flight submission.
    ///
    pub fn finish_submission(&mut self, outcome: &Result<(), RelayError>, now: Instant) {
        if !self.is_submitting() {
            warn!("Received a submission result with nothing in flight.");
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmissionStatus::Succeeded;
                self.success_deadline = Some(Deadline::after(self.success_banner, now));
            }
            Err(e) => {
                error!("Failed to send contact message: {}", e);
                self.status = SubmissionStatus::Failed(FailureReason::Network);
            }
        }
    }

    /// Hide the success banner once its delay has passed.
    ///
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.success_deadline {
            if deadline.has_passed(now) {
                self.success_deadline = None;
                if self.status == SubmissionStatus::Succeeded {
                    self.status = SubmissionStatus::Idle;
                }
            }
        }
    }

    /// Drop the pending banner timer.
    ///
    pub fn cancel_timers(&mut self) {
        self.success_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello".to_string();
        form
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            let mut form = filled();
            form.field_mut(field).clear();
            form.field_mut(field).push_str("  \t ");
            assert_eq!(form.begin_submission(), Err(SubmitRejected::Invalid));
            assert_eq!(
                form.status(),
                SubmissionStatus::Failed(FailureReason::Validation)
            );
            // Fields are kept.
            assert_eq!(form.field(field), "  \t ");
        }
    }

    #[test]
    fn test_valid_form_moves_to_submitting() {
        let mut form = filled();
        let message = form.begin_submission().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hello");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_cannot_resubmit_while_in_flight() {
        let mut form = filled();
        assert!(form.begin_submission().is_ok());
        assert_eq!(form.begin_submission(), Err(SubmitRejected::Busy));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.insert_char(FormField::Name, 'x');
        form.delete_char(FormField::Message);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_success_clears_fields_and_hides_banner_later() {
        let now = Instant::now();
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(&Ok(()), now);
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert!(form.shows_success());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());

        form.tick(now + Duration::from_millis(2999));
        assert!(form.shows_success());
        form.tick(now + DEFAULT_SUCCESS_BANNER);
        assert!(!form.shows_success());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_network_failure_preserves_fields() {
        let now = Instant::now();
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(&Err(RelayError::Rejected { status: 500 }), now);
        assert_eq!(form.status(), SubmissionStatus::Failed(FailureReason::Network));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_editing_after_failure_returns_to_idle() {
        let mut form = ContactForm::default();
        assert!(form.begin_submission().is_err());
        form.insert_char(FormField::Name, 'A');
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.name, "A");
    }

    #[test]
    fn test_late_result_is_ignored() {
        let now = Instant::now();
        let mut form = filled();
        form.finish_submission(&Ok(()), now);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.name, "Ada");
    }
}
