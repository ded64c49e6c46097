use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("failed to encode ideas")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode stored ideas")]
    Decode(#[source] serde_json::Error),

    #[error("storage backend error")]
    Backend(#[source] anyhow::Error),
}

pub(crate) type Result<T> = std::result::Result<T, StoreError>;
