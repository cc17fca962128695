use std::cell::Cell;
use std::rc::Rc;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::schedule::Scheduler;

const SEND_DELAY: Duration = Duration::from_millis(2000);
const STATUS_VISIBLE_FOR: Duration = Duration::from_millis(5000);

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your message is already on its way.")]
    AlreadySending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactEvent {
    Sending,
    /// The form should be cleared and the success status shown.
    Sent,
    StatusHidden,
}

/// Simulated contact submission: nothing leaves the page, the message
/// "arrives" after a fixed delay.
pub struct ContactForm {
    sending: Rc<Cell<bool>>,
    scheduler: Rc<dyn Scheduler>,
    listener: Rc<dyn Fn(ContactEvent)>,
}

impl ContactForm {
    pub fn new<F>(scheduler: Rc<dyn Scheduler>, listener: F) -> Self
    where
        F: Fn(ContactEvent) + 'static,
    {
        Self {
            sending: Rc::new(Cell::new(false)),
            scheduler,
            listener: Rc::new(listener),
        }
    }

    pub fn submit(&self, fields: &ContactFields) -> Result<(), ContactError> {
        if self.sending.get() {
            return Err(ContactError::AlreadySending);
        }
        fields.validate()?;
        log::debug!("simulating contact submission from {}", fields.email.trim());

        self.sending.set(true);
        (self.listener)(ContactEvent::Sending);

        let sending = self.sending.clone();
        let listener = self.listener.clone();
        let scheduler = self.scheduler.clone();
        self.scheduler.schedule(
            SEND_DELAY,
            Box::new(move || {
                sending.set(false);
                listener(ContactEvent::Sent);
                scheduler.schedule(
                    STATUS_VISIBLE_FOR,
                    Box::new(move || listener(ContactEvent::StatusHidden)),
                );
            }),
        );
        Ok(())
    }
}
