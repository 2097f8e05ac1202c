use crate::{
    application::contacts::dto::{ContactRequest, ContactResponse},
    presentation::http::{errors::AppError, middleware::user::UserClaims, state::AppState},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let contacts = state.contacts().list(claims.user_id()?).await?;
    Ok(Json(
        contacts
            .into_iter()
            .map(|c| ContactResponse::from_contact(c, state.storage.as_ref()))
            .collect(),
    ))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Json(body): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let contact = state.contacts().create(claims.user_id()?, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse::from_contact(contact, state.storage.as_ref())),
    ))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contacts().get(claims.user_id()?, id).await?;
    Ok(Json(ContactResponse::from_contact(contact, state.storage.as_ref())))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contacts().update(claims.user_id()?, id, body).await?;
    Ok(Json(ContactResponse::from_contact(contact, state.storage.as_ref())))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.contacts().delete(claims.user_id()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
