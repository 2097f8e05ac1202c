use crate::domain::shared::validation::validate_not_blank;
use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ColumnRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Must be between 1 and 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateCardRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Must be between 1 and 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub content: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Must be between 1 and 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub priority: String,
    pub column_id: Uuid,
}

/// Partial card update; `column_id` moves the card to another column.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct UpdateCardRequest {
    #[validate(
        length(min = 1, max = 255, message = "Must be between 1 and 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub content: Option<String>,
    #[validate(
        length(min = 1, max = 255, message = "Must be between 1 and 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub priority: Option<String>,
    pub column_id: Option<Uuid>,
}
