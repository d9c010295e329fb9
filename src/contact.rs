use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the simulated transport takes to "deliver" a message.
pub const SIMULATED_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "your@email.com",
            Field::Subject => "Project Subject",
            Field::Message => "Tell me about your project...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Inline feedback shown under the form.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Message sent successfully! I'll get back to you soon."),
            Self::Error => Some("Failed to send message. Please try again."),
            Self::Idle | Self::Pending => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out the {} field", .0.name())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Message could not be delivered: {0}")]
    Delivery(String),
}

/// Field values plus submission status for the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.get_mut(field) = value;
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    /// Validates the fields and moves to `Pending`, handing back the message to send.
    ///
    /// Rejected submissions leave the status untouched.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.is_pending() {
            return Err(FormError::InFlight);
        }
        self.fields.validate()?;
        self.status = SubmitStatus::Pending;
        Ok(self.fields.clone())
    }

    /// Applies the transport's result. Returns `false` if nothing was in flight.
    pub fn complete(&mut self, result: Result<(), SubmitError>) -> bool {
        if !self.is_pending() {
            return false;
        }
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.status = SubmitStatus::Error;
            }
        }
        true
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Delivers a contact message somewhere.
pub trait ContactTransport: Send + Sync {
    fn send(&self, message: ContactMessage) -> SubmitFuture;
}

/// Stand-in transport: waits, then reports a fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay_ms: u32,
    outcome: Result<(), SubmitError>,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY_MS)
    }
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            outcome: Ok(()),
        }
    }

    pub fn failing(delay_ms: u32, reason: impl Into<String>) -> Self {
        Self {
            delay_ms,
            outcome: Err(SubmitError::Delivery(reason.into())),
        }
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: ContactMessage) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        let outcome = self.outcome.clone();
        Box::pin(async move {
            log::debug!("simulating delivery of message from {}", message.email);
            sleep(delay_ms).await;
            outcome
        })
    }
}

#[cfg(feature = "hydrate")]
async fn sleep(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Only the browser ever submits; elsewhere the delay is skipped.
#[cfg(not(feature = "hydrate"))]
async fn sleep(_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Subject, "Hello".to_string());
        form.set_field(Field::Message, "Let's build something".to_string());
        form
    }

    #[test]
    fn test_empty_name_stays_idle() {
        let mut form = filled();
        form.set_field(Field::Name, String::new());
        assert_eq!(
            form.begin_submit(),
            Err(FormError::MissingField(Field::Name))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_any_missing_field_blocks_submit() {
        for field in Field::ALL {
            let mut form = filled();
            form.set_field(field, "   ".to_string());
            assert_eq!(form.begin_submit(), Err(FormError::MissingField(field)));
            assert_eq!(form.status(), SubmitStatus::Idle);
        }
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut form = filled();
        form.set_field(Field::Email, "not-an-email".to_string());
        assert_eq!(form.begin_submit(), Err(FormError::InvalidEmail));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let msg = form.begin_submit().expect("form should be valid");
        assert_eq!(msg.name, "Ada");
        assert_eq!(form.status(), SubmitStatus::Pending);
        assert!(form.complete(Ok(())));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(form.fields(), &ContactMessage::default());
    }

    #[test]
    fn test_error_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit().unwrap();
        assert!(form.complete(Err(SubmitError::Delivery("offline".to_string()))));
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.fields(), &before);
        assert!(form.status().message().unwrap().contains("Failed"));
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::InFlight));
        assert_eq!(form.status(), SubmitStatus::Pending);
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut form = filled();
        assert!(!form.complete(Ok(())));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.field(Field::Name), "Ada");
    }

    #[test]
    fn test_retry_after_error() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err(SubmitError::Delivery("timeout".to_string())));
        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmitStatus::Pending);
        form.complete(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
    }

    #[test]
    fn test_simulated_transport_outcomes() {
        let msg = filled().fields().clone();
        let ok = futures::executor::block_on(SimulatedTransport::new(0).send(msg.clone()));
        assert_eq!(ok, Ok(()));
        let err =
            futures::executor::block_on(SimulatedTransport::failing(0, "down").send(msg));
        assert_eq!(err, Err(SubmitError::Delivery("down".to_string())));
    }

    #[test]
    fn test_end_to_end_with_transport() {
        let mut form = filled();
        let msg = form.begin_submit().unwrap();
        let res = futures::executor::block_on(SimulatedTransport::default().send(msg));
        form.complete(res);
        assert!(matches!(
            form.status(),
            SubmitStatus::Success | SubmitStatus::Error
        ));
        assert_eq!(form.field(Field::Message), "");
    }
}
