use crate::domain::shared::validation::validate_not_blank;
use crate::domain::user::{
    entity::User,
    value_objects::{PHONE_REGEX, POSTCODE_REGEX},
};
use crate::infrastructure::storage::traits::StorageService;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/v1/users`.
///
/// `profile_picture` is a base64 string or `data:` URI.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateUserRequest {
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
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    pub profile_picture: Option<String>,
}

/// Body of `PATCH /api/v1/users/me`. Absent fields are left unchanged; an
/// empty string clears an optional field.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct UpdateProfileRequest {
    #[validate(
        length(min = 1, max = 100, message = "Must be between 1 and 100 characters."),
        custom(function = "validate_not_blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "Must be between 1 and 100 characters."),
        custom(function = "validate_not_blank")
    )]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub street_address: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub state: Option<String>,
    #[validate(regex(path = *POSTCODE_REGEX, message = "Enter a valid postcode."))]
    pub postcode: Option<String>,
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Enter a valid phone number."))]
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

/// A user profile as returned by the API, with the picture as a URL.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserResponse {
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
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: User, storage: &dyn StorageService) -> Self {
        Self {
            id: user.id,
            profile_picture: user.profile_picture.as_deref().map(|key| storage.get_url(key)),
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            street_address: user.street_address,
            city: user.city,
            state: user.state,
            postcode: user.postcode,
            email: user.email,
            phone: user.phone,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
