use super::dto::{ColumnRequest, CreateCardRequest, UpdateCardRequest};
use crate::domain::{
    board::{
        entity::{Card, Column, ColumnWithCards},
        repository::BoardRepository,
    },
    shared::errors::{DomainError, FieldErrors},
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

fn column_not_found() -> DomainError {
    DomainError::NotFound("Column not found".to_string())
}

fn card_not_found() -> DomainError {
    DomainError::NotFound("Card not found".to_string())
}

fn validate<R: Validate>(request: &R) -> Result<(), DomainError> {
    request
        .validate()
        .map_err(|e| DomainError::InvalidFields(FieldErrors::from(e)))
}

pub struct BoardUseCase {
    repository: Arc<dyn BoardRepository>,
}

impl BoardUseCase {
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_columns(&self) -> Result<Vec<ColumnWithCards>, DomainError> {
        self.repository.list_columns().await
    }

    pub async fn get_column(&self, id: Uuid) -> Result<ColumnWithCards, DomainError> {
        self.repository
            .find_column(id)
            .await?
            .ok_or_else(column_not_found)
    }

    pub async fn create_column(&self, request: ColumnRequest) -> Result<Column, DomainError> {
        validate(&request)?;
        let column = Column {
            id: Uuid::now_v7(),
            name: request.name.trim().to_string(),
            position: request.position.unwrap_or(0),
        };
        self.repository.create_column(&column).await
    }

    /// Renames a column; `position` is kept unless given.
    pub async fn update_column(
        &self,
        id: Uuid,
        request: ColumnRequest,
    ) -> Result<Column, DomainError> {
        validate(&request)?;
        let current = self.get_column(id).await?;
        let column = Column {
            id,
            name: request.name.trim().to_string(),
            position: request.position.unwrap_or(current.position),
        };
        self.repository
            .update_column(&column)
            .await?
            .ok_or_else(column_not_found)
    }

    pub async fn delete_column(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repository.delete_column(id).await? {
            tracing::info!(column_id = %id, "board column deleted with its cards");
            Ok(())
        } else {
            Err(column_not_found())
        }
    }

    pub async fn get_card(&self, id: Uuid) -> Result<Card, DomainError> {
        self.repository.find_card(id).await?.ok_or_else(card_not_found)
    }

    pub async fn create_card(&self, request: CreateCardRequest) -> Result<Card, DomainError> {
        validate(&request)?;
        let card = Card {
            id: Uuid::now_v7(),
            content: request.content.trim().to_string(),
            priority: request.priority.trim().to_string(),
            column_id: request.column_id,
        };
        self.repository.create_card(&card).await
    }

    pub async fn update_card(
        &self,
        id: Uuid,
        request: UpdateCardRequest,
    ) -> Result<Card, DomainError> {
        validate(&request)?;
        let mut card = self.get_card(id).await?;
        if let Some(content) = request.content {
            card.content = content.trim().to_string();
        }
        if let Some(priority) = request.priority {
            card.priority = priority.trim().to_string();
        }
        if let Some(column_id) = request.column_id {
            card.column_id = column_id;
        }
        self.repository
            .update_card(&card)
            .await?
            .ok_or_else(card_not_found)
    }

    pub async fn delete_card(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repository.delete_card(id).await? {
            Ok(())
        } else {
            Err(card_not_found())
        }
    }
}
