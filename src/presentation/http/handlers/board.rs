use crate::{
    application::board::dto::{ColumnRequest, CreateCardRequest, UpdateCardRequest},
    domain::board::entity::{Card, Column, ColumnWithCards},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

pub async fn list_columns(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColumnWithCards>>, AppError> {
    Ok(Json(state.board().list_columns().await?))
}

pub async fn create_column(
    State(state): State<AppState>,
    Json(body): Json<ColumnRequest>,
) -> Result<(StatusCode, Json<Column>), AppError> {
    let column = state.board().create_column(body).await?;
    Ok((StatusCode::CREATED, Json(column)))
}

pub async fn get_column(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ColumnWithCards>, AppError> {
    Ok(Json(state.board().get_column(id).await?))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ColumnRequest>,
) -> Result<Json<Column>, AppError> {
    Ok(Json(state.board().update_column(id, body).await?))
}

pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.board().delete_column(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_card(
    State(state): State<AppState>,
    Json(body): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let card = state.board().create_card(body).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Card>, AppError> {
    Ok(Json(state.board().get_card(id).await?))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCardRequest>,
) -> Result<Json<Card>, AppError> {
    Ok(Json(state.board().update_card(id, body).await?))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.board().delete_card(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
