#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date for {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
