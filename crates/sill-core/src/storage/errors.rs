use crate::errors::SillError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize state for '{key}': {message}")]
    SerializationFailed { key: String, message: String },

    #[error("IO error writing state: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl SillError for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::SerializationFailed { .. } => "STORAGE_SERIALIZATION_FAILED",
            StorageError::IoError { .. } => "STORAGE_IO_ERROR",
        }
    }
}
