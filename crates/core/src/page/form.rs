//! Contact form validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// The first rule a submission breaks. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name (at least 2 characters)")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

/// A submitted contact form. Fields are trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    /// Check name, then email, then message; stop at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_name(&self.name) {
            return Err(ValidationError::Name);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::Email);
        }
        if !is_valid_message(&self.message) {
            return Err(ValidationError::Message);
        }
        Ok(())
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn is_valid_message(message: &str) -> bool {
    message.chars().count() >= MIN_MESSAGE_CHARS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

/// Text and class list for the feedback element under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Error => "form-feedback error",
            FeedbackKind::Success => "form-feedback success",
        }
    }
}

impl From<Result<(), ValidationError>> for Feedback {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Feedback {
                kind: FeedbackKind::Success,
                message: SUCCESS_MESSAGE.to_owned(),
            },
            Err(e) => Feedback {
                kind: FeedbackKind::Error,
                message: e.to_string(),
            },
        }
    }
}
