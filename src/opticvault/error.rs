use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl VaultError {
    /// True for failures of the underlying key-value store (I/O, encoding,
    /// backend faults). These are the errors a write must never swallow.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            VaultError::Io(_) | VaultError::Serialization(_) | VaultError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
