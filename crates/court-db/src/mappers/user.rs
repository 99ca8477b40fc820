//! User model <-> entity mapper

use court_core::entities::User;
use court_core::error::DomainError;
use court_core::value_objects::Contact;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        // The application only writes parsed contacts, so failure here
        // means a row written outside the application.
        let contact = Contact::new(model.contact)
            .map_err(|_| DomainError::InternalError("Corrupt contact column".to_string()))?;

        Ok(User {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            contact,
            birthday: model.birthday,
            gender: model.gender,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
