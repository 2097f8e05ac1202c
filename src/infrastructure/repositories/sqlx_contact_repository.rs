use super::{infra, map_db_error};
use crate::domain::{
    contact::{entity::Contact, repository::ContactRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const CONTACT_COLUMNS: &str = "id, first_name, last_name, date_of_birth, street_address, city, \
     state, postcode, email, phone, profile_picture, is_user, belong_to_user, created_at, \
     updated_at";

pub struct SqlxContactRepository {
    pub pool: PgPool,
}

impl SqlxContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepository {
    #[instrument(skip(self, contact), fields(contact_id = %contact.id, owner = %contact.belong_to_user))]
    async fn create(&self, contact: &Contact) -> Result<Contact, DomainError> {
        sqlx::query_as::<_, Contact>(&format!(
            "INSERT INTO contacts (
                id, first_name, last_name, date_of_birth, street_address, city, state,
                postcode, email, phone, profile_picture, is_user, belong_to_user
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(contact.date_of_birth)
        .bind(&contact.street_address)
        .bind(&contact.city)
        .bind(&contact.state)
        .bind(&contact.postcode)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.profile_picture)
        .bind(contact.is_user)
        .bind(contact.belong_to_user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Contact already exists", "Owner not found"))
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Contact>, DomainError> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts
             WHERE belong_to_user = $1
             ORDER BY last_name, first_name, created_at"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)
    }

    async fn find_for_owner(&self, id: Uuid, owner: Uuid) -> Result<Option<Contact>, DomainError> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1 AND belong_to_user = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    #[instrument(skip(self, contact), fields(contact_id = %contact.id))]
    async fn update(&self, contact: &Contact) -> Result<Contact, DomainError> {
        sqlx::query_as::<_, Contact>(&format!(
            "UPDATE contacts SET
                first_name = $3, last_name = $4, date_of_birth = $5, street_address = $6,
                city = $7, state = $8, postcode = $9, email = $10, phone = $11,
                profile_picture = $12, is_user = $13, updated_at = NOW()
             WHERE id = $1 AND belong_to_user = $2
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(contact.id)
        .bind(contact.belong_to_user)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(contact.date_of_birth)
        .bind(&contact.street_address)
        .bind(&contact.city)
        .bind(&contact.state)
        .bind(&contact.postcode)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.profile_picture)
        .bind(contact.is_user)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Contact already exists", "Linked user not found"))?
        .ok_or_else(|| DomainError::NotFound("Contact not found".to_string()))
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND belong_to_user = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(result.rows_affected() > 0)
    }
}
