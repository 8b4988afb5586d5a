use atomone_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("{collection}: not found")]
    NotFound { collection: &'static str },

    #[error("key encoding error: {0}")]
    Encoding(String),

    #[error("key decoding error for {key}: {reason}")]
    Decoding { key: String, reason: String },

    #[error("value codec error: {0}")]
    Value(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CollectionError {
    pub(crate) fn decoding(key: &[u8], reason: impl Into<String>) -> Self {
        Self::Decoding {
            key: hex::encode(key),
            reason: reason.into(),
        }
    }

    /// Whether this is a missing-entry error, as opposed to a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<bincode::Error> for CollectionError {
    fn from(e: bincode::Error) -> Self {
        Self::Value(e.to_string())
    }
}
