use crate::{
    application::users::dto::{CreateUserRequest, UpdateProfileRequest, UserResponse},
    domain::profile_picture::{ImageUploadValue, PROFILE_PICTURE_FIELD},
    presentation::http::{errors::AppError, middleware::user::UserClaims, state::AppState},
};
use axum::{
    Extension, Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use tracing::instrument;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.users().register(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_user(user, state.storage.as_ref())),
    ))
}

pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users().get_profile(claims.user_id()?).await?;
    Ok(Json(UserResponse::from_user(user, state.storage.as_ref())))
}

pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users()
        .update_profile(claims.user_id()?, body)
        .await?;
    Ok(Json(UserResponse::from_user(user, state.storage.as_ref())))
}

/// `PUT /api/v1/users/me/profile-picture`
///
/// Reads the `profile_picture` part of a multipart body. A file part is taken
/// as raw bytes with its file name; a plain text part is treated as base64 or
/// a data URI.
#[instrument(skip(state, claims, multipart), fields(user = %claims.sub))]
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = claims.user_id()?;
    let mut value = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some(PROFILE_PICTURE_FIELD) {
            continue;
        }
        value = Some(match field.file_name().map(str::to_string) {
            Some(declared_name) => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
                ImageUploadValue::Raw {
                    bytes: bytes.to_vec(),
                    declared_name,
                }
            }
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
                ImageUploadValue::EncodedString(text)
            }
        });
        break;
    }

    let value = value.ok_or_else(|| {
        AppError::BadRequest(format!("Missing '{}' part", PROFILE_PICTURE_FIELD))
    })?;
    let user = state.users().replace_picture(user_id, value).await?;
    Ok(Json(UserResponse::from_user(user, state.storage.as_ref())))
}

pub async fn delete_me(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
) -> Result<StatusCode, AppError> {
    state.users().delete_account(claims.user_id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}
