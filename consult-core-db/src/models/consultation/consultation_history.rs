use chrono::{DateTime, Utc};
use consult_core_api::{ChangeEntry, ABSENT_VALUE_LABEL};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One field-level change of a consultation (table `consultation_history`).
/// - Append-only: rows are inserted once per changed field per save and never
///   updated or deleted.
/// - `id` and `changed_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ConsultationHistoryModel {
    pub id: i64,
    pub consultation_id: i64,
    /// Display name of the user who made the edit
    pub changed_by: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl ConsultationHistoryModel {
    pub fn display_old(&self) -> &str {
        self.old_value.as_deref().unwrap_or(ABSENT_VALUE_LABEL)
    }

    pub fn display_new(&self) -> &str {
        self.new_value.as_deref().unwrap_or(ABSENT_VALUE_LABEL)
    }
}

impl Identifiable for ConsultationHistoryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// History row as sent to the store, before id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConsultationHistory {
    pub consultation_id: i64,
    pub changed_by: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl NewConsultationHistory {
    pub fn from_change(consultation_id: i64, changed_by: &str, change: &ChangeEntry) -> Self {
        Self {
            consultation_id,
            changed_by: changed_by.to_string(),
            field_name: change.field_name.clone(),
            old_value: change.old_value.clone(),
            new_value: change.new_value.clone(),
        }
    }

    pub fn into_model(self, id: i64, changed_at: DateTime<Utc>) -> ConsultationHistoryModel {
        ConsultationHistoryModel {
            id,
            consultation_id: self.consultation_id,
            changed_by: self.changed_by,
            field_name: self.field_name,
            old_value: self.old_value,
            new_value: self.new_value,
            changed_at,
        }
    }
}
