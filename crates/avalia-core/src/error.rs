use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{field}' expects {expected}")]
    ShapeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}
