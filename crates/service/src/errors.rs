use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for a missing record, whether reported here or by the model layer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Model(models::errors::ModelError::NotFound(_)))
    }

    /// True for input rejected before or by the model layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn classifies_nested_model_errors() {
        assert!(ServiceError::not_found("car").is_not_found());
        assert!(ServiceError::Model(ModelError::NotFound("car 1".into())).is_not_found());
        assert!(ServiceError::Model(ModelError::Validation("bad".into())).is_validation());
        assert!(!ServiceError::Db("down".into()).is_not_found());
        assert_eq!(ServiceError::not_found("car").to_string(), "not found: car not found");
    }
}
