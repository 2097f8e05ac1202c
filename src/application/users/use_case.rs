use super::dto::{CreateUserRequest, UpdateProfileRequest};
use crate::application::profile_pictures::{PictureStore, validate_with_picture};
use crate::domain::{
    profile_picture::{ImageUploadValue, PROFILE_PICTURE_FIELD, decode_optional},
    shared::errors::{DomainError, FieldErrors},
    user::{
        entity::User,
        repository::UserRepository,
        value_objects::{normalize_email, normalize_optional},
    },
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const EMAIL_TAKEN: &str = "A user with this email already exists.";

pub struct UserUseCase {
    repository: Arc<dyn UserRepository>,
    pictures: PictureStore,
    password_cost: u32,
}

impl UserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, pictures: PictureStore, password_cost: u32) -> Self {
        Self {
            repository,
            pictures,
            password_cost,
        }
    }

    /// Creates a user profile. The picture is only uploaded once every field
    /// has validated and the email is known to be free.
    pub async fn register(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let picture = request.profile_picture.clone().map(ImageUploadValue::from);
        let artifact = validate_with_picture(&request, picture)?;

        let email = normalize_email(&request.email);
        if self.repository.find_by_email(&email).await?.is_some() {
            let mut errors = FieldErrors::new();
            errors.add("email", EMAIL_TAKEN);
            return Err(DomainError::InvalidFields(errors));
        }

        let password_hash = bcrypt::hash(&request.password, self.password_cost)
            .map_err(|e| DomainError::InfrastructureError(format!("Password hashing failed: {}", e)))?;

        let profile_picture = match artifact {
            Some(artifact) => Some(self.pictures.store(artifact).await?),
            None => None,
        };

        let now = Utc::now();
        let user = User {
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
            profile_picture,
            password_hash,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .repository
            .create(&user)
            .await
            .inspect_err(|e| self.pictures.warn_orphaned(user.profile_picture.as_deref(), e))?;
        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    pub async fn get_profile(&self, id: Uuid) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        let picture = request.profile_picture.clone().map(ImageUploadValue::from);
        let artifact = validate_with_picture(&request, picture)?;
        let mut user = self.get_profile(id).await?;

        if let Some(email) = request.email.as_deref().map(normalize_email) {
            if email != user.email {
                if self.repository.find_by_email(&email).await?.is_some() {
                    let mut errors = FieldErrors::new();
                    errors.add("email", EMAIL_TAKEN);
                    return Err(DomainError::InvalidFields(errors));
                }
                user.email = email;
            }
        }

        if let Some(first_name) = request.first_name {
            user.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name.trim().to_string();
        }
        if let Some(date_of_birth) = request.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        apply_optional(&mut user.street_address, request.street_address);
        apply_optional(&mut user.city, request.city);
        apply_optional(&mut user.state, request.state);
        apply_optional(&mut user.postcode, request.postcode);
        apply_optional(&mut user.phone, request.phone);

        let uploaded = match artifact {
            Some(artifact) => Some(self.pictures.store(artifact).await?),
            None => None,
        };
        if let Some(key) = &uploaded {
            user.profile_picture = Some(key.clone());
        }

        self.repository
            .update(&user)
            .await
            .inspect_err(|e| self.pictures.warn_orphaned(uploaded.as_deref(), e))
    }

    /// Replaces the picture from a multipart upload or an encoded string.
    pub async fn replace_picture(
        &self,
        id: Uuid,
        value: ImageUploadValue,
    ) -> Result<User, DomainError> {
        let artifact = match decode_optional(Some(value)) {
            Ok(Some(artifact)) => artifact,
            Ok(None) => return Err(DomainError::ValidationError("No picture supplied".into())),
            Err(err) => {
                let mut errors = FieldErrors::new();
                errors.add(PROFILE_PICTURE_FIELD, err.to_string());
                return Err(DomainError::InvalidFields(errors));
            }
        };
        let mut user = self.get_profile(id).await?;
        let key = self.pictures.store(artifact).await?;
        user.profile_picture = Some(key.clone());
        self.repository
            .update(&user)
            .await
            .inspect_err(|e| self.pictures.warn_orphaned(Some(&key), e))
    }

    pub async fn delete_account(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}

/// `Some("")` clears the field, `Some(v)` sets it, `None` leaves it alone.
fn apply_optional(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *target = normalize_optional(Some(value));
    }
}
