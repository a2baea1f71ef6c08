//! Client contact details.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};

/// Client a project is carried out for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl Client {
    /// Creates a client with only a name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyClientName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyClientName);
        }
        Ok(Self {
            name: normalized.to_owned(),
            email: None,
            phone: None,
        })
    }

    /// Sets the contact email. Blank values are ignored.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Sets the contact phone. Blank values are ignored.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    /// Returns the client name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the contact phone, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
