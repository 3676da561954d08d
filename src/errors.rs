use thiserror::Error;

pub type KarirResult<T> = Result<T, KarirError>;

#[derive(Debug, Error)]
pub enum KarirError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl KarirError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        KarirError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        KarirError::Config(msg.into())
    }

    pub fn storage_error(msg: impl Into<String>) -> Self {
        KarirError::Storage(msg.into())
    }
}
