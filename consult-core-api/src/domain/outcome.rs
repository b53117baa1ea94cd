use serde::{Deserialize, Serialize};

use super::change_set::ChangeEntry;

/// Result of saving an edited record.
///
/// The record update and the history insert are two independent writes; this
/// type reports how far the save got instead of hiding a failed history write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Record updated and every change recorded in the history.
    Updated { changes: Vec<ChangeEntry> },
    /// Record updated but the history insert failed. The record stays as saved.
    UpdatedAuditFailed { changes: Vec<ChangeEntry>, reason: String },
    /// Record update failed. Nothing was written to the history.
    UpdateFailed { reason: String },
}

impl SaveOutcome {
    /// Whether the record itself was saved.
    pub fn is_saved(&self) -> bool {
        !matches!(self, SaveOutcome::UpdateFailed { .. })
    }

    pub fn is_fully_recorded(&self) -> bool {
        matches!(self, SaveOutcome::Updated { .. })
    }

    /// Changes detected for a saved record; empty when the update failed.
    pub fn changes(&self) -> &[ChangeEntry] {
        match self {
            SaveOutcome::Updated { changes } | SaveOutcome::UpdatedAuditFailed { changes, .. } => changes,
            SaveOutcome::UpdateFailed { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ChangeEntry {
        ChangeEntry {
            field_name: "status".to_string(),
            old_value: Some("신규".to_string()),
            new_value: Some("상담완료".to_string()),
        }
    }

    #[test]
    fn test_audit_failure_still_counts_as_saved() {
        let outcome = SaveOutcome::UpdatedAuditFailed {
            changes: vec![entry()],
            reason: "insert failed".to_string(),
        };

        assert!(outcome.is_saved());
        assert!(!outcome.is_fully_recorded());
        assert_eq!(outcome.changes().len(), 1);
    }

    #[test]
    fn test_update_failure_has_no_changes() {
        let outcome = SaveOutcome::UpdateFailed { reason: "timeout".to_string() };

        assert!(!outcome.is_saved());
        assert!(outcome.changes().is_empty());
    }

    #[test]
    fn test_serialized_tag() {
        let outcome = SaveOutcome::Updated { changes: vec![] };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "updated");
    }
}
