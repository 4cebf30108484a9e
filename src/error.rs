use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("degenerate arithmetic in {context}")]
    ArithmeticDegenerate { context: String },
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
