use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Backend(String),

    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("field '{field}' not found in item '{item}'")]
    FieldNotFound { field: String, item: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LookupError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupError::Config(_) => 7,
            LookupError::Auth(_) => 2,
            LookupError::Backend(_) => 1,
            LookupError::ItemNotFound(_) => 3,
            LookupError::FieldNotFound { .. } => 3,
            LookupError::Io(_) => 1,
            LookupError::Serialization(_) => 1,
        }
    }

    /// Return a string error code identifier.
    pub fn error_code(&self) -> &'static str {
        match self {
            LookupError::Config(_) => "config_error",
            LookupError::Auth(_) => "auth_error",
            LookupError::Backend(_) => "backend_error",
            LookupError::ItemNotFound(_) => "not_found",
            LookupError::FieldNotFound { .. } => "not_found",
            LookupError::Io(_) => "io_error",
            LookupError::Serialization(_) => "serialization_error",
        }
    }
}

/// JSON error response for --json mode.
#[derive(Serialize)]
pub struct JsonError {
    pub error: JsonErrorDetail,
}

#[derive(Serialize)]
pub struct JsonErrorDetail {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
}

impl JsonError {
    pub fn from_error(e: &LookupError) -> Self {
        Self {
            error: JsonErrorDetail {
                code: e.error_code().to_string(),
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
