use super::{infra, map_db_error};
use crate::domain::{
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, first_name, last_name, date_of_birth, street_address, city, \
     state, postcode, email, phone, profile_picture, password_hash, is_active, last_login, \
     created_at, updated_at";

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (
                id, first_name, last_name, date_of_birth, street_address, city, state,
                postcode, email, phone, profile_picture, password_hash, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_of_birth)
        .bind(&user.street_address)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.postcode)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.profile_picture)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Email already registered", "User not found"))?;
        debug!("user created");
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infra)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> Result<User, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                first_name = $2, last_name = $3, date_of_birth = $4, street_address = $5,
                city = $6, state = $7, postcode = $8, email = $9, phone = $10,
                profile_picture = $11, is_active = $12, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_of_birth)
        .bind(&user.street_address)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.postcode)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.profile_picture)
        .bind(user.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Email already registered", "User not found"))?
        .ok_or_else(|| DomainError::NotFound("User not found".to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
