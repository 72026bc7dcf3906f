use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistSyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("'{program}' failed: {detail}")]
    Process { program: String, detail: String },

    #[error("Can't parse url: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GistSyncError>;
