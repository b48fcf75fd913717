use std::fmt;

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserEntity {
    /// Creates a new UserEntity instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the caller
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The string form forwarded to the message queue and written to the logs.
impl fmt::Display for UserEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name={}, email={})", self.id, self.name, self.email)
    }
}
