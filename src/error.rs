use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RiskError::OutOfRange { .. } | RiskError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
