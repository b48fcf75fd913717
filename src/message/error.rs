use thiserror::Error;

/// Errors that can occur while talking to the message queue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("Message queue actor closed")]
    ActorClosed,
    #[error("Message queue actor dropped the response")]
    ActorDropped,
    #[error("Message queue full: capacity {capacity}")]
    QueueFull { capacity: usize },
}
