mod assemble;
pub use assemble::assemble;

mod data_type;
pub use data_type::{classify, Binder, DataType, KeyBinder, RowAccessor};

mod error;
pub use error::ErrorSet;

mod field;
pub use field::{Access, FieldDescriptor};

mod record;
pub use record::{RecordId, RecordSchema};

mod registry;
pub use registry::{foreign_path, SchemaRegistry};

mod resolve;
pub use resolve::resolve_fields;

mod table;
pub use table::{ColumnDef, TableInfo};

use crate::decl::{DeclarationSource, TypeDecl};

/// Resolves and assembles one record declaration.
pub fn build(source: &dyn DeclarationSource, decl: &TypeDecl) -> Result<RecordSchema, ErrorSet> {
    let fields = resolve_fields(source, decl)?;
    Ok(assemble(decl, fields)?)
}
