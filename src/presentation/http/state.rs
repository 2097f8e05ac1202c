use crate::{
    application::{
        board::use_case::BoardUseCase, contacts::use_case::ContactUseCase,
        profile_pictures::PictureStore, users::use_case::UserUseCase,
    },
    config::Config,
    domain::{
        board::repository::BoardRepository, contact::repository::ContactRepository,
        user::repository::UserRepository,
    },
    infrastructure::storage::traits::StorageService,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub storage: Arc<dyn StorageService>,
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub board_repo: Arc<dyn BoardRepository>,
}

impl AppState {
    pub fn picture_store(&self) -> PictureStore {
        PictureStore::new(self.storage.clone(), self.config.profile_picture_prefix.clone())
    }

    pub fn users(&self) -> UserUseCase {
        UserUseCase::new(
            self.user_repo.clone(),
            self.picture_store(),
            self.config.bcrypt_cost,
        )
    }

    pub fn contacts(&self) -> ContactUseCase {
        ContactUseCase::new(
            self.contact_repo.clone(),
            self.user_repo.clone(),
            self.picture_store(),
        )
    }

    pub fn board(&self) -> BoardUseCase {
        BoardUseCase::new(self.board_repo.clone())
    }
}
