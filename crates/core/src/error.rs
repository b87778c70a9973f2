/// All errors that can be produced while loading configuration documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is missing or has the wrong JSON type.
    #[error("malformed configuration at '{context}': {message}")]
    Malformed { context: String, message: String },

    /// The document root is not a JSON object.
    #[error("configuration document must be a JSON object")]
    NotAnObject,
}

impl ConfigError {
    pub(crate) fn malformed(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Malformed {
            context: context.into(),
            message: message.into(),
        }
    }
}
