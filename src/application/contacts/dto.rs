use crate::domain::shared::validation::validate_not_blank;
use crate::domain::{
    contact::entity::Contact,
    user::value_objects::{PHONE_REGEX, POSTCODE_REGEX},
};
use crate::infrastructure::storage::traits::StorageService;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/v1/contacts` and `PUT /api/v1/contacts/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Must be between 1 and 100 characters."),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Must be between 1 and 100 characters."),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub street_address: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub state: Option<String>,
    #[validate(regex(path = *POSTCODE_REGEX, message = "Enter a valid postcode."))]
    pub postcode: Option<String>,
    #[serde(default)]
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Enter a valid phone number."))]
    pub phone: Option<String>,
    /// Base64 string or `data:` URI; omitted keeps the current picture.
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub is_user: Option<Uuid>,
    pub belong_to_user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactResponse {
    pub fn from_contact(contact: Contact, storage: &dyn StorageService) -> Self {
        Self {
            id: contact.id,
            profile_picture: contact
                .profile_picture
                .as_deref()
                .map(|key| storage.get_url(key)),
            first_name: contact.first_name,
            last_name: contact.last_name,
            date_of_birth: contact.date_of_birth,
            street_address: contact.street_address,
            city: contact.city,
            state: contact.state,
            postcode: contact.postcode,
            email: contact.email,
            phone: contact.phone,
            is_user: contact.is_user,
            belong_to_user: contact.belong_to_user,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
