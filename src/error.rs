use thiserror::Error;

/// Error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Unknown integrator `{0}`, expected one of VV2, VV4, VV6")]
    UnknownIntegrator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
