use super::{DataType, FieldDescriptor};

/// Table name plus ordered column metadata, as exposed by a mapping unit.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
    pub table_name: String,
    pub columns: Vec<ColumnDef>,
}

/// Column metadata derived from a [`FieldDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub field_name: String,
    pub column_name: String,

    /// Storage type; for foreign columns, the referenced identity's type
    pub data_type: DataType,

    pub id: bool,
    pub generated_id: bool,
    pub foreign: bool,
    pub nullable: bool,
    pub width: u32,
    pub format: Option<String>,
    pub unique: bool,
    pub unique_combo: bool,
    pub index: bool,
    pub unique_index: bool,
    pub index_name: Option<String>,
    pub unique_index_name: Option<String>,
    pub default_value: Option<String>,
    pub throw_if_null: bool,
    pub version: bool,
    pub read_only: bool,
}

impl ColumnDef {
    pub fn from_field(field: &FieldDescriptor, data_type: DataType) -> Self {
        Self {
            field_name: field.field_name.clone(),
            column_name: field.column_name.clone(),
            data_type,
            id: field.id,
            generated_id: field.generated_id,
            foreign: field.foreign,
            nullable: field.nullable,
            width: field.width,
            format: field.format.clone(),
            unique: field.unique,
            unique_combo: field.unique_combo,
            index: field.index_flag,
            unique_index: field.unique_index,
            index_name: field.index_name.clone(),
            unique_index_name: field.unique_index_name.clone(),
            default_value: field.default_value.clone(),
            throw_if_null: field.throw_if_null,
            version: field.version,
            read_only: field.read_only,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.id || self.generated_id
    }
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.column_name == name)
    }

    pub fn identity(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.is_identity())
    }
}
