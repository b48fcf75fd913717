use thiserror::Error;

use crate::message::MessageError;

/// Errors returned by the user service.
///
/// The service adds no failure modes of its own; message sender failures pass
/// through untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserServiceError {
    #[error(transparent)]
    Message(#[from] MessageError),
}
