use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{UserService, UserServiceError};
use crate::domain::{GenericResponse, UserEntity};
use crate::message::MessageSender;

/// Stateless user service. Only `add` forwards to the message sender, and
/// `query_user_info_by_id` drains the queue instead of looking anything up.
pub struct UserServiceImpl<S> {
    message_sender: Arc<S>,
}

impl<S> UserServiceImpl<S> {
    pub fn new(message_sender: Arc<S>) -> Self {
        Self { message_sender }
    }
}

impl<S> Clone for UserServiceImpl<S> {
    fn clone(&self) -> Self {
        Self {
            message_sender: Arc::clone(&self.message_sender),
        }
    }
}

#[async_trait]
impl<S: MessageSender> UserService for UserServiceImpl<S> {
    async fn add(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError> {
        info!(value = %entity, "created value");
        self.message_sender.add(entity.to_string()).await?;
        Ok(GenericResponse::new())
    }

    async fn remove(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError> {
        info!(value = %entity, "deleted value");
        Ok(GenericResponse::new())
    }

    async fn update(&self, entity: &UserEntity) -> Result<GenericResponse, UserServiceError> {
        info!(value = %entity, "updated value");
        Ok(GenericResponse::new())
    }

    async fn query_user_info_by_id(
        &self,
        user_id: &str,
    ) -> Result<GenericResponse<UserEntity>, UserServiceError> {
        info!(user_id, "query");
        self.message_sender.print_all_queue_messages().await?;
        Ok(GenericResponse::new())
    }
}
