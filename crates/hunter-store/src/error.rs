use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error for key {key}: {message}")]
    Backend { key: String, message: String },

    #[error("malformed payload under key {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
