use serde::{Deserialize, Serialize};

use super::field_value::FieldSnapshot;

/// Label shown in place of a value that was absent.
pub const ABSENT_VALUE_LABEL: &str = "-";

/// A field observed by the audit history, with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedField {
    pub name: &'static str,
    pub label: &'static str,
}

/// # Documentation
/// - Ordered set of fields whose changes are written to the audit history.
/// - Static configuration, never persisted.
/// - The order defined here is the order in which change entries are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFieldSet {
    fields: Vec<TrackedField>,
}

impl TrackedFieldSet {
    /// Builds a set from `(name, label)` pairs. Later duplicates of a name are dropped.
    pub fn new(fields: &[(&'static str, &'static str)]) -> Self {
        let mut tracked: Vec<TrackedField> = Vec::with_capacity(fields.len());
        for &(name, label) in fields {
            if !tracked.iter().any(|f| f.name == name) {
                tracked.push(TrackedField { name, label });
            }
        }
        Self { fields: tracked }
    }

    /// Fields of a consultation record that are audited on edit.
    pub fn consultation() -> Self {
        Self::new(&[
            ("status", "상태"),
            ("customer_name", "고객명"),
            ("phone", "연락처"),
            ("carrier", "통신사"),
            ("speed", "속도"),
            ("tv_plan", "TV 요금제"),
            ("product_summary", "상품 요약"),
            ("consultant", "담당자"),
            ("consultation_note", "상담 내용"),
            ("memo", "메모"),
            ("follow_up_date", "재상담일"),
            ("moving_date", "이사일"),
            ("desired_install_date", "설치희망일"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedField> {
        self.fields.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Display label of a tracked field, or the raw name for anything else.
    pub fn label_of<'a>(&self, name: &'a str) -> &'a str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.label)
            .unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One field-level delta produced by a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl ChangeEntry {
    pub fn display_old(&self) -> &str {
        self.old_value.as_deref().unwrap_or(ABSENT_VALUE_LABEL)
    }

    pub fn display_new(&self) -> &str {
        self.new_value.as_deref().unwrap_or(ABSENT_VALUE_LABEL)
    }
}

/// Computes the tracked fields whose values differ between two snapshots.
///
/// Values are compared in their normalized form (see
/// [`FieldValue::normalized`](super::FieldValue::normalized)), so a field
/// going from absent to `false`, `0` or `""` is not reported. Entries come
/// out in the order of `tracked`; fields outside `tracked` are ignored.
pub fn detect_changes(
    original: &FieldSnapshot,
    modified: &FieldSnapshot,
    tracked: &TrackedFieldSet,
) -> Vec<ChangeEntry> {
    tracked
        .iter()
        .filter_map(|field| {
            let old = original.value_of(field.name);
            let new = modified.value_of(field.name);
            if old.normalized() == new.normalized() {
                return None;
            }
            Some(ChangeEntry {
                field_name: field.name.to_string(),
                old_value: old.to_stored(),
                new_value: new.to_stored(),
            })
        })
        .collect()
}
