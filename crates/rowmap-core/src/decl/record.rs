use super::FieldDecl;

use serde::{Deserialize, Serialize};

/// A type declaration known to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully-qualified path, e.g. `app::model::Person`. Doubles as the record
    /// identity.
    pub path: String,

    /// What kind of item this is
    #[serde(default)]
    pub kind: DeclKind,

    /// Path of the type this one extends, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Present when the declaration is annotated as a table record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableAttr>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    #[default]
    Struct,
    Enum,
    Trait,
}

/// Table-level attribute: `#[table]` / `#[table(name = "...")]`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAttr {
    /// Explicit table name; empty or absent means "derive from the type name"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TypeDecl {
    /// A struct annotated as a table record.
    pub fn record(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DeclKind::Struct,
            extends: None,
            table: Some(TableAttr::default()),
            fields: vec![],
        }
    }

    /// A plain struct without a table attribute, typically a supertype.
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            table: None,
            ..Self::record(path)
        }
    }

    pub fn kind(mut self, kind: DeclKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn extends(mut self, path: impl Into<String>) -> Self {
        self.extends = Some(path.into());
        self
    }

    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table = Some(TableAttr {
            name: Some(name.into()),
        });
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// The last path segment.
    pub fn simple_name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, DeclKind::Struct)
    }
}
