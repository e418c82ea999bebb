use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyWalkError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed fingerprint: unrecognized glyph '{glyph}' at position {position}")]
    MalformedFingerprint { glyph: char, position: usize },

    #[error("Malformed back-reference: {0}")]
    MalformedBackReference(String),

    #[error("Store Error: {0}")]
    Store(String),
}

pub type KwResult<T> = Result<T, KeyWalkError>;
