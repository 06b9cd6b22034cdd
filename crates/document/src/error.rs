use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

impl ContentError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ContentError::InvalidContent(message.into())
    }
}
