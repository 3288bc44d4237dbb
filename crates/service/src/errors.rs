use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A row came back from the store in a shape that breaks the item invariants.
    #[error("malformed store response: {0}")]
    Malformed(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn required(field: &str) -> Self { Self::Validation(format!("{} is required", field)) }

    /// Caller supplied bad input; the store was not touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_))
        )
    }
}
