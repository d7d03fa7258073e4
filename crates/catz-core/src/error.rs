use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Field already registered: {0}")]
    DuplicateField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
        CoreError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
