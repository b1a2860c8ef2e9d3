use super::Value;
use crate::schema::RecordId;

use indexmap::IndexMap;

/// A record instance with dynamically named fields.
///
/// Fields that were never assigned are absent, which is distinct from a field
/// assigned `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    ty: RecordId,
    fields: IndexMap<String, Value>,
}

impl Record {
    /// A fresh instance with no fields assigned.
    pub fn new(ty: impl Into<RecordId>) -> Self {
        Self {
            ty: ty.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn ty(&self) -> &RecordId {
        &self.ty
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The field's value, treating unassigned fields as `Null`.
    pub fn value(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
