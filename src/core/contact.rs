//! Contact form state and the submission boundary
//!
//! The form moves Idle -> Sending -> Sent (or Failed). Submission goes
//! through [`ContactSubmitter`], so swapping the mock for a real network
//! call leaves the state machine untouched.

use std::future::Future;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("company")]
    Company,
    #[display("email")]
    Email,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Company,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Company => "Company Name",
            ContactField::Email => "Company Email",
            ContactField::Message => "How can we help?",
        }
    }
}

/// Form validation and submission errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in your {0}")]
    MissingField(ContactField),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Your message is already being sent")]
    AlreadySending,
}

/// Failure reported by a submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Submission failed: {0}")]
pub struct SubmitError(pub String);

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Company => self.company = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Every field is required; the email needs a `local@domain.tld` shape
    pub fn validate(&self) -> Result<(), FormError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionStatus {
    /// Text shown on the submit button
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Send Message",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Sent => "Your message has been sent successfully!",
            SubmissionStatus::Failed(_) => "Sending failed. Please try again.",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

/// The contact form and its submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Update a field; editing after an outcome returns the form to Idle
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        if matches!(self.status, SubmissionStatus::Sent | SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and move to Sending, handing back the payload to submit
    pub fn begin_submit(&mut self) -> Result<ContactForm, FormError> {
        if self.status.is_sending() {
            return Err(FormError::AlreadySending);
        }
        self.form.validate()?;
        self.status = SubmissionStatus::Sending;
        Ok(self.form.clone())
    }

    /// Record the outcome of the submission started by `begin_submit`
    ///
    /// Success clears every field. Failure keeps them for a retry.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if !self.status.is_sending() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = SubmissionStatus::Sent;
            }
            Err(err) => self.status = SubmissionStatus::Failed(err.to_string()),
        }
    }
}

/// Delivers a contact form somewhere
pub trait ContactSubmitter {
    fn submit(&self, form: ContactForm) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in submitter: waits `delay_ms` in the browser, then succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSubmitter {
    pub delay_ms: u32,
}

impl MockSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmitter for MockSubmitter {
    fn submit(&self, form: ContactForm) -> impl Future<Output = Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            #[cfg(feature = "ssr")]
            let _ = delay_ms;

            let _ = form;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.edit(ContactField::Name, "Ada Lovelace");
        state.edit(ContactField::Company, "Analytical Freight");
        state.edit(ContactField::Email, "ada@freight.example");
        state.edit(ContactField::Message, "Tell me about route risk scoring.");
        state
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(FormError::MissingField(ContactField::Name)));

        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Company, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField(ContactField::Company)));
    }

    #[test]
    fn test_validate_email_shape() {
        for (email, ok) in [
            ("ada@freight.example", true),
            ("a@b.co", true),
            ("ada", false),
            ("@freight.example", false),
            ("ada@freight", false),
            ("ada@.example", false),
            ("ada@freight.", false),
            ("ada@fr@eight.example", false),
            ("ada lovelace@freight.example", false),
        ] {
            assert_eq!(looks_like_email(email), ok, "{}", email);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingField(ContactField::Email).to_string(),
            "Please fill in your email"
        );
        assert_eq!(
            SubmitError("timeout".into()).to_string(),
            "Submission failed: timeout"
        );
    }

    #[test]
    fn test_begin_submit_moves_to_sending() {
        let mut state = filled();
        let payload = state.begin_submit().unwrap();

        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(state.status(), &SubmissionStatus::Sending);
        assert_eq!(state.status().label(), "Sending...");
        assert_eq!(state.begin_submit(), Err(FormError::AlreadySending));
    }

    #[test]
    fn test_invalid_form_stays_idle() {
        let mut state = ContactFormState::new();
        assert!(state.begin_submit().is_err());
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(Ok(()));

        assert_eq!(state.status(), &SubmissionStatus::Sent);
        assert!(state.form().is_empty());
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(Err(SubmitError("offline".into())));

        assert!(matches!(state.status(), SubmissionStatus::Failed(_)));
        assert_eq!(state.form().company, "Analytical Freight");
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut state = filled();
        state.finish(Ok(()));
        assert_eq!(state.status(), &SubmissionStatus::Idle);
        assert!(!state.form().is_empty());
    }

    #[test]
    fn test_editing_after_sent_returns_to_idle() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(Ok(()));
        state.edit(ContactField::Name, "G");
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_mock_submitter_succeeds() {
        let submitter = MockSubmitter::new(2000);
        let outcome = futures::executor::block_on(submitter.submit(ContactForm::default()));
        assert_eq!(outcome, Ok(()));
    }
}
