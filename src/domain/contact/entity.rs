use crate::domain::user::entity::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An address-book entry owned by one user.
///
/// When the contact's email belongs to a registered user, `is_user` links to
/// that user and the profile fields are copied from them at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Contact {
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

impl Contact {
    /// Links this contact to `user` and overwrites the profile fields with theirs.
    pub fn sync_from_user(&mut self, user: &User) {
        self.is_user = Some(user.id);
        self.first_name = user.first_name.clone();
        self.last_name = user.last_name.clone();
        self.date_of_birth = user.date_of_birth;
        self.street_address = user.street_address.clone();
        self.city = user.city.clone();
        self.state = user.state.clone();
        self.postcode = user.postcode.clone();
        self.phone = user.phone.clone();
        self.profile_picture = user.profile_picture.clone();
    }
}
