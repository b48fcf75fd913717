//! User CRUD operations.

pub mod error;
pub mod user;

use async_trait::async_trait;

use crate::domain::{GenericResponse, UserEntity};

pub use error::*;
pub use user::*;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn add(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError>;

    async fn remove(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError>;

    async fn update(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError>;

    async fn query_user_info_by_id(
        &self,
        user_id: &str,
    ) -> Result<GenericResponse<UserEntity>, UserServiceError>;
}
