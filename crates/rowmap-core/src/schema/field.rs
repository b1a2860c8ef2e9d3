use super::DataType;

/// Resolved metadata for one persisted field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Position in the record's flattened field list. Doubles as the row
    /// column index.
    pub index: usize,

    /// Field name on the struct
    pub field_name: String,

    /// Column name in the table
    pub column_name: String,

    /// Declared type identity, or the referenced record path for foreign fields
    pub declared_ty: String,

    /// Storage type; `None` for foreign fields until resolved through the
    /// registry
    pub data_type: Option<DataType>,

    /// Identity supplied by the caller
    pub id: bool,

    /// Identity generated by the store
    pub generated_id: bool,

    pub foreign: bool,

    pub nullable: bool,

    pub width: u32,

    pub format: Option<String>,

    pub unique: bool,

    pub unique_combo: bool,

    pub index_flag: bool,

    pub unique_index: bool,

    pub index_name: Option<String>,

    pub unique_index_name: Option<String>,

    pub default_value: Option<String>,

    pub throw_if_null: bool,

    pub version: bool,

    pub read_only: bool,

    /// How generated code reaches the field
    pub access: Access,

    /// Custom converter name, if one was declared
    pub persister: Option<String>,

    /// Path of the struct that declares the field (a supertype for inherited
    /// fields)
    pub declared_in: String,
}

/// How generated code reads and writes a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `data.field`
    Direct,
    /// `data.field()` / `data.set_field(v)`
    Accessor,
}

impl FieldDescriptor {
    /// True for `id` and `generated_id` fields.
    pub fn is_identity(&self) -> bool {
        self.id || self.generated_id
    }

    /// Statically bindable, per [`DataType::is_static`]. Foreign fields and
    /// fields with a persister are never static.
    pub fn is_static(&self) -> bool {
        !self.foreign && self.persister.is_none() && self.data_type.is_some_and(DataType::is_static)
    }

    /// Setter name used with [`Access::Accessor`].
    pub fn setter_name(&self) -> String {
        format!("set_{}", self.field_name)
    }
}
