use crate::domain::{entities::Bundle, error::DomainError, identifier};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_identifier(identifier: &str) -> Result<(), DomainError> {
        identifier::validate(identifier)
    }

    pub fn validate_bundle(bundle: &Bundle) -> Result<(), DomainError> {
        bundle.validate()
    }
}
