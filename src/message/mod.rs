//! Message sending capability consumed by the user service, plus the
//! in-process queue actor that implements it.

pub mod error;
pub mod queue;

use async_trait::async_trait;

pub use error::*;
pub use queue::*;

/// Notification port the user service writes to.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Enqueue the serialized form of an entity.
    async fn add(&self, payload: String) -> Result<(), MessageError>;

    /// Drain every queued message and print it.
    async fn print_all_queue_messages(&self) -> Result<(), MessageError>;
}
