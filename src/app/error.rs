use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON-RPC error: {0}")]
    Rpc(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload parsing error: {0}")]
    PayloadParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Ambiguous item id prefix: {0}")]
    AmbiguousId(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CurioError>;
