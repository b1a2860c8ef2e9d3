use rowmap_core::schema::{Access, DataType, FieldDescriptor};

use std::fmt;

/// A field on the record, as generated code reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Field name on the struct
    pub field: String,

    pub access: Access,

    /// Declared type, as written
    pub ty: String,

    /// The declared type is `Option<..>`; `None` is stored as null.
    pub optional: bool,

    /// Storage type; `None` for foreign fields
    pub data_type: Option<DataType>,
}

/// The converter a dynamic field goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterRef {
    /// The converter rowmap ships for a non-static data type
    BuiltIn(DataType),

    /// A converter named by the field's `persister` attribute
    Persister(String),
}

impl Slot {
    pub fn new(field: &FieldDescriptor) -> Self {
        Self {
            field: field.field_name.clone(),
            access: field.access,
            ty: field.declared_ty.clone(),
            optional: is_option(&field.declared_ty),
            data_type: field.data_type,
        }
    }

    /// The declared type without its `Option<..>` wrapper.
    pub fn inner_ty(&self) -> &str {
        let ty = self.ty.trim();
        match ty.strip_prefix("Option<").and_then(|ty| ty.strip_suffix('>')) {
            Some(inner) if self.optional => inner.trim(),
            _ => ty,
        }
    }

    /// True when the declared type is the data type's own Rust type, so values
    /// move between row, field and statement without conversion.
    pub fn is_native(&self) -> bool {
        match self.data_type.and_then(DataType::rust_type) {
            Some(rust_type) => same_type(self.inner_ty(), rust_type),
            None => true,
        }
    }
}

impl fmt::Display for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterRef::BuiltIn(data_type) => write!(f, "built-in {data_type} converter"),
            ConverterRef::Persister(name) => write!(f, "persister `{name}`"),
        }
    }
}

fn is_option(ty: &str) -> bool {
    let ty = ty.trim();
    ty.starts_with("Option<") && ty.ends_with('>')
}

fn same_type(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| !c.is_whitespace())
        .eq(b.chars().filter(|c| !c.is_whitespace()))
}
