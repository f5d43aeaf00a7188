//! The contact form: three required fields, local validation, simulated
//! delivery. Nothing is sent anywhere and nothing persists.

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    /// All fields present; the form was "sent" and cleared.
    Sent,
    /// At least one required field was empty after trimming.
    MissingFields,
}

impl ContactStatus {
    /// User-facing status line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sent => "Message sent! (Demo)",
            Self::MissingFields => "Please fill out all fields.",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Form state: the three field buffers plus the last submit status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: Option<ContactStatus>,
}

impl ContactForm {
    /// Build a form with the three field buffers filled in.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Attempt a submit.
    ///
    /// Fields are trimmed before the presence check. On failure the field
    /// buffers are left exactly as they were; on success all three are
    /// cleared. Either way the status is recorded and returned.
    pub fn submit(&mut self) -> ContactStatus {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let status = if name.is_empty() || email.is_empty() || message.is_empty() {
            ContactStatus::MissingFields
        } else {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            ContactStatus::Sent
        };
        self.status = Some(status);
        status
    }

    /// Status of the most recent submit, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ContactStatus> {
        self.status
    }
}
