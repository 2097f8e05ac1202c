use super::{infra, map_db_error};
use crate::domain::{
    board::{
        entity::{Card, Column, ColumnWithCards},
        repository::BoardRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::instrument;
use uuid::Uuid;

pub struct SqlxBoardRepository {
    pub pool: PgPool,
}

impl SqlxBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn cards_for(&self, column_ids: &[Uuid]) -> Result<Vec<Card>, DomainError> {
        sqlx::query_as::<_, Card>(
            "SELECT id, content, priority, column_id FROM board_cards
             WHERE column_id = ANY($1)
             ORDER BY created_at, id",
        )
        .bind(column_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)
    }
}

#[async_trait]
impl BoardRepository for SqlxBoardRepository {
    async fn list_columns(&self) -> Result<Vec<ColumnWithCards>, DomainError> {
        let columns = sqlx::query_as::<_, Column>(
            "SELECT id, name, position FROM board_columns ORDER BY position, created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        let ids: Vec<Uuid> = columns.iter().map(|c| c.id).collect();
        let mut by_column: HashMap<Uuid, Vec<Card>> = HashMap::new();
        for card in self.cards_for(&ids).await? {
            by_column.entry(card.column_id).or_default().push(card);
        }

        Ok(columns
            .into_iter()
            .map(|column| {
                let cards = by_column.remove(&column.id).unwrap_or_default();
                ColumnWithCards::new(column, cards)
            })
            .collect())
    }

    async fn find_column(&self, id: Uuid) -> Result<Option<ColumnWithCards>, DomainError> {
        let column = sqlx::query_as::<_, Column>(
            "SELECT id, name, position FROM board_columns WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?;

        match column {
            Some(column) => {
                let cards = self.cards_for(&[column.id]).await?;
                Ok(Some(ColumnWithCards::new(column, cards)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, column), fields(column_id = %column.id))]
    async fn create_column(&self, column: &Column) -> Result<Column, DomainError> {
        sqlx::query_as::<_, Column>(
            "INSERT INTO board_columns (id, name, position) VALUES ($1, $2, $3)
             RETURNING id, name, position",
        )
        .bind(column.id)
        .bind(&column.name)
        .bind(column.position)
        .fetch_one(&self.pool)
        .await
        .map_err(infra)
    }

    async fn update_column(&self, column: &Column) -> Result<Option<Column>, DomainError> {
        sqlx::query_as::<_, Column>(
            "UPDATE board_columns SET name = $2, position = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING id, name, position",
        )
        .bind(column.id)
        .bind(&column.name)
        .bind(column.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    #[instrument(skip(self))]
    async fn delete_column(&self, id: Uuid) -> Result<bool, DomainError> {
        // board_cards.column_id cascades
        let result = sqlx::query("DELETE FROM board_columns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_card(&self, id: Uuid) -> Result<Option<Card>, DomainError> {
        sqlx::query_as::<_, Card>(
            "SELECT id, content, priority, column_id FROM board_cards WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    #[instrument(skip(self, card), fields(card_id = %card.id, column_id = %card.column_id))]
    async fn create_card(&self, card: &Card) -> Result<Card, DomainError> {
        sqlx::query_as::<_, Card>(
            "INSERT INTO board_cards (id, content, priority, column_id) VALUES ($1, $2, $3, $4)
             RETURNING id, content, priority, column_id",
        )
        .bind(card.id)
        .bind(&card.content)
        .bind(&card.priority)
        .bind(card.column_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Card already exists", "Column not found"))
    }

    async fn update_card(&self, card: &Card) -> Result<Option<Card>, DomainError> {
        sqlx::query_as::<_, Card>(
            "UPDATE board_cards SET content = $2, priority = $3, column_id = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING id, content, priority, column_id",
        )
        .bind(card.id)
        .bind(&card.content)
        .bind(&card.priority)
        .bind(card.column_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Card already exists", "Column not found"))
    }

    async fn delete_card(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM board_cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(result.rows_affected() > 0)
    }
}
