//! Contact value object - the 8-digit login identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user's contact number: exactly 8 ASCII digits.
///
/// Doubles as the login identifier, so construction always validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Contact(String);

/// Error returned when a contact string fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Contact must be an 8-digit number")]
pub struct ContactParseError;

impl Contact {
    /// Validate and wrap a contact string
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactParseError> {
        let raw = raw.into();
        if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw))
        } else {
            Err(ContactParseError)
        }
    }

    /// Borrow the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Contact {
    type Err = ContactParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Contact {
    type Error = ContactParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Contact> for String {
    fn from(contact: Contact) -> Self {
        contact.0
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
