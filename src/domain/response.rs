/// Generic response envelope returned by every user service operation.
///
/// The default value is a successful response carrying no payload, which is
/// what all four service operations return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericResponse<T = ()> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

impl<T> GenericResponse<T> {
    /// Successful response with no payload.
    pub fn new() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for GenericResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}
