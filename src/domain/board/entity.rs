use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Column {
    pub id: Uuid,
    pub name: String,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Card {
    pub id: Uuid,
    pub content: String,
    pub priority: String,
    pub column_id: Uuid,
}

/// A column as shown on the board, with its cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColumnWithCards {
    pub id: Uuid,
    pub name: String,
    pub position: i32,
    pub cards: Vec<Card>,
}

impl ColumnWithCards {
    pub fn new(column: Column, cards: Vec<Card>) -> Self {
        Self {
            id: column.id,
            name: column.name,
            position: column.position,
            cards,
        }
    }
}
