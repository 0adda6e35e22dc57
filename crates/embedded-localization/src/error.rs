use thiserror::Error;

/// Failures raised by the underlying binary primitive.
///
/// Wrapped transparently: the message is whatever the primitive reported.
#[derive(Debug, Error)]
pub enum MarshalError {
    #[error(transparent)]
    CborDecode(#[from] ciborium::de::Error<std::io::Error>),
    #[error(transparent)]
    CborEncode(#[from] ciborium::ser::Error<std::io::Error>),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown attribute `{attribute}` on {model}")]
    UnknownAttribute { model: String, attribute: String },
    #[error("unknown store accessor `{accessor}` on {model}")]
    UnknownAccessor { model: String, accessor: String },
    #[error("store attribute `{attribute}` does not hold a mapping")]
    NotAMapping { attribute: String },
    #[error("marshal failed: {0}")]
    Marshal(#[from] MarshalError),
}
