use consult_core_api::FieldSnapshot;

use super::identifiable::Identifiable;

/// Trait for entities whose field-level edits are written to an audit history
pub trait Auditable: Identifiable {
    /// Returns the current field values, keyed by column name
    fn snapshot(&self) -> FieldSnapshot;
}
