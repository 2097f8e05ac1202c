use crate::domain::{
    profile_picture::{
        self, DecodedImageArtifact, ImageUploadValue, PROFILE_PICTURE_FIELD,
    },
    shared::errors::{DomainError, FieldErrors},
};
use crate::infrastructure::storage::traits::StorageService;
use std::sync::Arc;
use validator::Validate;

/// Validates `request` and decodes its picture field, collecting every field
/// error into one set so a bad picture is reported alongside the rest.
pub fn validate_with_picture<R: Validate>(
    request: &R,
    picture: Option<ImageUploadValue>,
) -> Result<Option<DecodedImageArtifact>, DomainError> {
    let mut errors = match request.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => FieldErrors::from(e),
    };
    let artifact = match profile_picture::decode_optional(picture) {
        Ok(artifact) => artifact,
        Err(err) => {
            errors.add(PROFILE_PICTURE_FIELD, err.to_string());
            None
        }
    };
    errors.into_result()?;
    Ok(artifact)
}

/// Writes decoded pictures to object storage under a fixed prefix.
#[derive(Clone)]
pub struct PictureStore {
    storage: Arc<dyn StorageService>,
    prefix: String,
}

impl PictureStore {
    pub fn new(storage: Arc<dyn StorageService>, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    /// Uploads the artifact and returns the storage key to record.
    pub async fn store(&self, artifact: DecodedImageArtifact) -> Result<String, DomainError> {
        let key = profile_picture::storage_key(&self.prefix, &artifact);
        let content_type = artifact.content_type();
        let url = self
            .storage
            .upload(&key, artifact.content, content_type)
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "profile picture upload failed");
                DomainError::InfrastructureError(format!("Picture upload failed: {}", e))
            })?;
        tracing::info!(
            key = %key,
            url = %url,
            declared_name = %artifact.file_name,
            "profile picture stored"
        );
        Ok(key)
    }

    /// Warns about a picture that was uploaded but will not be referenced
    /// because the row that should point at it failed to save.
    pub fn warn_orphaned(&self, key: Option<&str>, err: &DomainError) {
        if let Some(key) = key {
            tracing::warn!(key = %key, error = %err, "stored profile picture left unreferenced");
        }
    }
}
