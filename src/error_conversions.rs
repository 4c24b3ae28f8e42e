//! Error conversion glue between the crate's layers.
//!
//! The domain layer must not depend on service or repository error types,
//! so the conversions live here instead of alongside the types themselves.

use crate::domain::types::TypeConstraintError;
use crate::generator::ConfigError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<ConfigError> for ServiceError {
    fn from(val: ConfigError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ServiceId;
    use crate::generator::GeneratorConfig;

    #[test]
    fn constraint_errors_become_invalid_arguments() {
        let err: ServiceError = ServiceId::new(-1).unwrap_err().into();
        assert_eq!(
            err,
            ServiceError::InvalidArgument("service_id must be greater than zero".into())
        );
    }

    #[test]
    fn config_errors_become_invalid_arguments() {
        let config = GeneratorConfig {
            horizon_days: 0,
            ..GeneratorConfig::default()
        };
        let err: ServiceError = config.validate().unwrap_err().into();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }
}
