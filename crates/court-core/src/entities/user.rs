//! User entity - a registered account

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Contact;

/// A registered user account.
///
/// The password hash deliberately lives outside the entity; repositories
/// hand it out separately so it never leaks through response mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Login identifier, unique across accounts
    pub contact: Contact,
    pub birthday: NaiveDate,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields a user may change; `None` leaves the current value.
/// Changing the contact re-keys the login identifier, so it must stay
/// unique across accounts.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub contact: Option<Contact>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
}
