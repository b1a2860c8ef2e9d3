use crate::schema::DataType;

use serde::{Deserialize, Serialize};

/// A field as declared on a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name
    pub name: String,

    /// Declared type identity, e.g. `i32`, `Option<String>` or the path of
    /// another record for foreign fields
    pub ty: String,

    #[serde(default)]
    pub visibility: Visibility,

    /// Mapping attribute; fields without one are not persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<FieldAttr>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// Field-level mapping attribute: `#[field(...)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAttr {
    /// Explicit column name
    pub column_name: Option<String>,

    /// Identity supplied by the caller
    pub id: bool,

    /// Identity assigned by the store on insert
    pub generated_id: bool,

    /// The column stores another record's identity
    pub foreign: bool,

    pub can_be_null: bool,

    /// Column width hint, `0` for the store default
    pub width: u32,

    pub format: Option<String>,

    pub unique: bool,

    pub unique_combo: bool,

    pub index: bool,

    pub unique_index: bool,

    pub index_name: Option<String>,

    pub unique_index_name: Option<String>,

    /// Default value as written in the declaration
    pub default_value: Option<String>,

    pub throw_if_null: bool,

    pub version: bool,

    pub read_only: bool,

    /// `false` removes the field from the schema entirely
    pub persisted: bool,

    /// Force accessor methods even for public fields
    pub use_get_set: bool,

    /// Explicit storage type, overriding classification
    pub data_type: Option<DataType>,

    /// Name of a custom converter for this field
    pub persister: Option<String>,
}

impl Default for FieldAttr {
    fn default() -> Self {
        Self {
            column_name: None,
            id: false,
            generated_id: false,
            foreign: false,
            can_be_null: true,
            width: 0,
            format: None,
            unique: false,
            unique_combo: false,
            index: false,
            unique_index: false,
            index_name: None,
            unique_index_name: None,
            default_value: None,
            throw_if_null: false,
            version: false,
            read_only: false,
            persisted: true,
            use_get_set: false,
            data_type: None,
            persister: None,
        }
    }
}

impl FieldDecl {
    /// A public field with a default mapping attribute.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Public,
            attr: Some(FieldAttr::default()),
        }
    }

    /// A field without a mapping attribute.
    pub fn unmapped(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            attr: None,
            ..Self::new(name, ty)
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn attr(mut self, attr: FieldAttr) -> Self {
        self.attr = Some(attr);
        self
    }

    pub fn id(self) -> Self {
        self.update(|attr| attr.id = true)
    }

    pub fn generated_id(self) -> Self {
        self.update(|attr| attr.generated_id = true)
    }

    pub fn foreign(self) -> Self {
        self.update(|attr| attr.foreign = true)
    }

    pub fn not_null(self) -> Self {
        self.update(|attr| attr.can_be_null = false)
    }

    pub fn column(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|attr| attr.column_name = Some(name))
    }

    pub fn throw_if_null(self) -> Self {
        self.update(|attr| attr.throw_if_null = true)
    }

    pub fn version(self) -> Self {
        self.update(|attr| attr.version = true)
    }

    pub fn not_persisted(self) -> Self {
        self.update(|attr| attr.persisted = false)
    }

    pub fn use_get_set(self) -> Self {
        self.update(|attr| attr.use_get_set = true)
    }

    pub fn persister(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|attr| attr.persister = Some(name))
    }

    pub fn data_type(self, data_type: DataType) -> Self {
        self.update(|attr| attr.data_type = Some(data_type))
    }

    pub fn default_value(self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.update(|attr| attr.default_value = Some(value))
    }

    pub fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    fn update(mut self, f: impl FnOnce(&mut FieldAttr)) -> Self {
        f(self.attr.get_or_insert_with(FieldAttr::default));
        self
    }
}
