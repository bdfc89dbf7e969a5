use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("invalid price or quantity for item: {item}")]
    InvalidItem { item: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ReportError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::InvalidItem { item } => {
                format!("Item '{}' has a non-positive price or quantity", item)
            }
            ReportError::Serialization(e) => format!("Could not read or write order JSON: {}", e),
            ReportError::Io(e) => format!("File access failed: {}", e),
            ReportError::Config { message } => format!("Invalid configuration: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
