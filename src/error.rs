use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("normalize error: {0}")]
    Normalize(String),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("recursion depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("deserialize error: {0}")]
    Deserialize(String),
}

impl Error {
    pub fn unsupported(context: impl Into<String>) -> Self {
        Error::UnsupportedValue(context.into())
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        Error::Serialize(message.into())
    }

    pub fn normalize(message: impl Into<String>) -> Self {
        Error::Normalize(message.into())
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Error::Syntax(message.into())
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Error::Deserialize(message.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_depth(&self) -> bool {
        matches!(self, Error::DepthExceeded { .. })
    }
}
