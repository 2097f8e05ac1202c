use super::dto::ContactRequest;
use crate::application::profile_pictures::{PictureStore, validate_with_picture};
use crate::domain::{
    contact::{entity::Contact, repository::ContactRepository},
    profile_picture::ImageUploadValue,
    shared::errors::DomainError,
    user::{
        repository::UserRepository,
        value_objects::{normalize_email, normalize_optional},
    },
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ContactUseCase {
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
    pictures: PictureStore,
}

impl ContactUseCase {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        users: Arc<dyn UserRepository>,
        pictures: PictureStore,
    ) -> Self {
        Self {
            contacts,
            users,
            pictures,
        }
    }

    pub async fn list(&self, owner: Uuid) -> Result<Vec<Contact>, DomainError> {
        self.contacts.find_by_owner(owner).await
    }

    /// Creates a contact for `owner`.
    ///
    /// If the email belongs to a registered user, the contact is linked to
    /// them and their profile replaces the submitted details, picture included.
    pub async fn create(&self, owner: Uuid, request: ContactRequest) -> Result<Contact, DomainError> {
        let picture = request.profile_picture.clone().map(ImageUploadValue::from);
        let artifact = validate_with_picture(&request, picture)?;

        let now = Utc::now();
        let email = normalize_email(&request.email);
        let mut contact = Contact {
            id: Uuid::now_v7(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            date_of_birth: request.date_of_birth,
            street_address: normalize_optional(request.street_address),
            city: normalize_optional(request.city),
            state: normalize_optional(request.state),
            postcode: normalize_optional(request.postcode),
            email,
            phone: normalize_optional(request.phone),
            profile_picture: None,
            is_user: None,
            belong_to_user: owner,
            created_at: now,
            updated_at: now,
        };

        let mut uploaded = None;
        match self.users.find_by_email(&contact.email).await? {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "contact matches a registered user");
                contact.sync_from_user(&user);
            }
            None => {
                if let Some(artifact) = artifact {
                    let key = self.pictures.store(artifact).await?;
                    contact.profile_picture = Some(key.clone());
                    uploaded = Some(key);
                }
            }
        }

        self.contacts
            .create(&contact)
            .await
            .inspect_err(|e| self.pictures.warn_orphaned(uploaded.as_deref(), e))
    }

    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Contact, DomainError> {
        self.contacts
            .find_for_owner(id, owner)
            .await?
            .ok_or_else(|| DomainError::NotFound("Contact not found".to_string()))
    }

    /// Replaces the contact's details. An omitted picture keeps the current one.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        request: ContactRequest,
    ) -> Result<Contact, DomainError> {
        let mut contact = self.get(owner, id).await?;
        let picture = request.profile_picture.clone().map(ImageUploadValue::from);
        let artifact = validate_with_picture(&request, picture)?;

        contact.first_name = request.first_name.trim().to_string();
        contact.last_name = request.last_name.trim().to_string();
        contact.date_of_birth = request.date_of_birth;
        contact.street_address = normalize_optional(request.street_address);
        contact.city = normalize_optional(request.city);
        contact.state = normalize_optional(request.state);
        contact.postcode = normalize_optional(request.postcode);
        contact.email = normalize_email(&request.email);
        contact.phone = normalize_optional(request.phone);

        let uploaded = match artifact {
            Some(artifact) => Some(self.pictures.store(artifact).await?),
            None => None,
        };
        if let Some(key) = &uploaded {
            contact.profile_picture = Some(key.clone());
        }

        self.contacts
            .update(&contact)
            .await
            .inspect_err(|e| self.pictures.warn_orphaned(uploaded.as_deref(), e))
    }

    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), DomainError> {
        if self.contacts.delete(id, owner).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound("Contact not found".to_string()))
        }
    }
}
