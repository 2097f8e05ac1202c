use super::entity::{Card, Column, ColumnWithCards};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn list_columns(&self) -> Result<Vec<ColumnWithCards>, DomainError>;
    async fn find_column(&self, id: Uuid) -> Result<Option<ColumnWithCards>, DomainError>;
    async fn create_column(&self, column: &Column) -> Result<Column, DomainError>;
    async fn update_column(&self, column: &Column) -> Result<Option<Column>, DomainError>;
    /// Deletes the column and every card in it.
    async fn delete_column(&self, id: Uuid) -> Result<bool, DomainError>;
    async fn find_card(&self, id: Uuid) -> Result<Option<Card>, DomainError>;
    /// Fails with `NotFound` when `card.column_id` does not exist.
    async fn create_card(&self, card: &Card) -> Result<Card, DomainError>;
    async fn update_card(&self, card: &Card) -> Result<Option<Card>, DomainError>;
    async fn delete_card(&self, id: Uuid) -> Result<bool, DomainError>;
}
