use thiserror::Error;

/// Errors raised while loading the system configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors raised while running or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] crate::service::UserServiceError),
    #[error(transparent)]
    Queue(#[from] crate::message::MessageError),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}
