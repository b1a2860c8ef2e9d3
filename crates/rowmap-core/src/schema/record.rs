use super::{ColumnDef, FieldDescriptor, SchemaRegistry, TableInfo};
use crate::Result;

use std::fmt;

/// Identifies a record by its fully-qualified path.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub String);

/// Resolved schema for one record type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub id: RecordId,

    /// Simple (unqualified) type name
    pub name: String,

    pub table_name: String,

    /// Persisted fields, most-derived first, in declaration order
    pub fields: Vec<FieldDescriptor>,

    /// Index of the identity field in `fields`
    pub identity: usize,
}

impl RecordSchema {
    pub fn identity(&self) -> &FieldDescriptor {
        &self.fields[self.identity]
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.field_name == name)
    }

    pub fn version_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.version)
    }

    pub fn foreign_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.foreign)
    }

    /// Fields bound by an insert, in bind order.
    pub fn insert_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| !field.generated_id)
    }

    /// Fields bound as data by an update, in bind order. The identity is bound
    /// separately, after these.
    pub fn update_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| !field.is_identity())
    }

    /// Table name and column metadata, with foreign columns typed by the
    /// identity of the record they reference.
    pub fn table_info(&self, registry: &SchemaRegistry) -> Result<TableInfo> {
        let columns = self
            .fields
            .iter()
            .map(|field| {
                let data_type = match field.data_type {
                    Some(data_type) if !field.foreign => data_type,
                    _ => registry.resolve_foreign_type(self, field)?,
                };
                Ok(ColumnDef::from_field(field, data_type))
            })
            .collect::<Result<_>>()?;

        Ok(TableInfo {
            table_name: self.table_name.clone(),
            columns,
        })
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(src: &str) -> Self {
        Self(src.to_string())
    }
}

impl From<String> for RecordId {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}
