use super::{DataType, FieldDescriptor, RecordId, RecordSchema};
use crate::{Error, Result, Site};

use indexmap::IndexMap;

/// Batch-scoped lookup from record identity to its resolved schema.
///
/// Every record of a batch is registered before any foreign key is resolved,
/// so records may reference records declared later in the batch.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    records: IndexMap<RecordId, RecordSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: RecordSchema) -> Result<()> {
        if self.records.contains_key(&schema.id) {
            return Err(Error::declaration_usage(
                Site::record(schema.id.as_str()),
                "record registered twice in the same batch",
            ));
        }

        self.records.insert(schema.id.clone(), schema);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&RecordSchema> {
        self.records.get(&RecordId::from(id))
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordSchema> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record a foreign field points at.
    pub fn foreign_target(
        &self,
        owner: &RecordSchema,
        field: &FieldDescriptor,
    ) -> Result<&RecordSchema> {
        self.records
            .get(&RecordId::from(foreign_path(&field.declared_ty)))
            .ok_or_else(|| {
                Error::unresolved_foreign_key(
                    Site::field(owner.id.as_str(), &field.field_name),
                    &field.declared_ty,
                )
            })
    }

    /// The storage type of a foreign column: the data type of the referenced
    /// record's identity field.
    pub fn resolve_foreign_type(
        &self,
        owner: &RecordSchema,
        field: &FieldDescriptor,
    ) -> Result<DataType> {
        let target = self.foreign_target(owner, field)?;
        target.identity().data_type.ok_or_else(|| {
            Error::schema_validation(
                Site::field(target.id.as_str(), &target.identity().field_name),
                "identity field has no data type",
            )
        })
    }

    /// Resolves every foreign field of `schema`, returning one error per
    /// unresolvable field.
    pub fn verify_foreign_keys(&self, schema: &RecordSchema) -> Vec<Error> {
        schema
            .foreign_fields()
            .filter_map(|field| self.resolve_foreign_type(schema, field).err())
            .collect()
    }
}

/// The record path named by a foreign field's declared type, with any
/// `Option<..>` and `Box<..>` wrappers removed.
pub fn foreign_path(declared: &str) -> &str {
    let mut path = declared.trim();
    loop {
        let inner = ["Option<", "Box<"]
            .iter()
            .find_map(|wrapper| path.strip_prefix(wrapper)?.strip_suffix('>'));

        match inner {
            Some(inner) => path = inner.trim(),
            None => return path,
        }
    }
}
