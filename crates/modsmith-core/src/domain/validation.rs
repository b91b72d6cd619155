use crate::domain::{
    entities::{EntityDefinition, ProjectStructure},
    error::DomainError,
    value_objects::EntityKind,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Every entity in `entities` must be of `expected` kind.
    pub fn validate_entity_kinds(
        entities: &[EntityDefinition],
        expected: EntityKind,
    ) -> Result<(), DomainError> {
        match entities.iter().find(|e| e.kind() != expected) {
            Some(entity) => Err(DomainError::EntityKindMismatch {
                id: entity.internal_id().to_string(),
                expected: expected.to_string(),
                found: entity.kind().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
