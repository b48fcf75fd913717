use std::sync::Arc;

use tracing::{error, info};

use super::{SystemConfig, SystemError};
use crate::message::{MessageQueueActor, MessageQueueClient};
use crate::service::UserServiceImpl;

/// Starts the message queue actor and wires the user service to it.
pub struct UserSystem {
    pub user_service: UserServiceImpl<MessageQueueClient>,
    pub queue_client: MessageQueueClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        info!(
            channel_buffer = config.channel_buffer(),
            queue_capacity = config.queue_capacity(),
            "Starting user system"
        );
        let (queue_actor, queue_client) =
            MessageQueueActor::new(config.channel_buffer(), config.queue_capacity());
        let handle = tokio::spawn(queue_actor.run());
        let user_service = UserServiceImpl::new(Arc::new(queue_client.clone()));

        Self {
            user_service,
            queue_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // The actor stops once every client handle is gone.
        drop(self.user_service);
        drop(self.queue_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
