use super::entity::Contact;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Contact storage. Lookups are always scoped to the owning user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<Contact, DomainError>;
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Contact>, DomainError>;
    async fn find_for_owner(&self, id: Uuid, owner: Uuid) -> Result<Option<Contact>, DomainError>;
    async fn update(&self, contact: &Contact) -> Result<Contact, DomainError>;
    /// Returns `false` when no contact with that id belongs to `owner`.
    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, DomainError>;
}
