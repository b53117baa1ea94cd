use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single field value as captured in a record snapshot.
///
/// Records carry text, flag and integer fields, any of which may be null.
/// A field that is missing from a snapshot altogether is treated as `Null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    #[default]
    Null,
}

impl FieldValue {
    /// Comparison form of the value.
    ///
    /// Falsy values collapse to the empty string: `Null`, `Flag(false)`,
    /// `Integer(0)` and `Text("")` all compare equal to each other and to an
    /// absent field. `Flag(true)` becomes `"true"`.
    pub fn normalized(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Flag(true) => Cow::Borrowed("true"),
            FieldValue::Flag(false) | FieldValue::Integer(0) | FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Value as written to a history row. Only `Null` is stored as absent.
    pub fn to_stored(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Flag(b) => Some(b.to_string()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Loosely typed JSON is read with truthiness rules: `0`, `-0.0` and NaN
/// are null, whole floats read as integers, and arrays flatten to their
/// comma-joined elements.
impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Flag(*b),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Number(n) => number_value(n),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => FieldValue::Text(json_text(value)),
        }
    }
}

fn number_value(n: &serde_json::Number) -> FieldValue {
    if let Some(i) = n.as_i64() {
        return FieldValue::Integer(i);
    }
    match n.as_f64() {
        Some(f) if f == 0.0 || f.is_nan() => FieldValue::Null,
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            FieldValue::Integer(f as i64)
        }
        Some(f) => FieldValue::Text(f.to_string()),
        None => FieldValue::Text(n.to_string()),
    }
}

/// Text form of a nested JSON value, as it appears inside a flattened array.
fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match number_value(n) {
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Null => "0".to_string(),
            other => other.normalized().into_owned(),
        },
        serde_json::Value::Array(items) => items.iter().map(json_text).collect::<Vec<_>>().join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Field name to value mapping for one record at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSnapshot {
    fields: HashMap<String, FieldValue>,
}

impl FieldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Value of `field`, with absence reported as `Null`.
    pub fn value_of(&self, field: &str) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Null;
        self.fields.get(field).unwrap_or(&ABSENT)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a snapshot from a JSON object; any other JSON value yields an
    /// empty snapshot.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let fields = value
            .as_object()
            .map(|obj| obj.iter().map(|(k, v)| (k.clone(), FieldValue::from(v))).collect())
            .unwrap_or_default();
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
