use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GeologError {
    #[error("Sample not found: {0}")]
    SampleNotFound(Uuid),

    #[error("Latitude and longitude must be provided together")]
    UnpairedCoordinates,

    #[error("Stored data is corrupt: {0}")]
    CorruptData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GeologError>;
