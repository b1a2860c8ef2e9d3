use super::{
    Bind, BindStep, ConverterRef, ForeignKey, ForeignRead, KeyBind, NullCheck, Read, ReadStep,
    Slot, ValueRead,
};
use rowmap_core::schema::{
    DataType, FieldDescriptor, KeyBinder, RecordId, RecordSchema, RowAccessor, SchemaRegistry,
    TableInfo,
};
use rowmap_core::{Error, Result, Site};

use heck::ToSnakeCase;

/// Everything needed to emit one record's mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingUnit {
    pub record: RecordId,

    /// Name of the generated mapper type, e.g. `PersonMapper`
    pub mapper: String,

    /// Name of the generated module, e.g. `person`
    pub module: String,

    pub table: TableInfo,

    /// Row reads, one per field, in field order
    pub materialize: Vec<ReadStep>,

    /// Insert parameters; generated identities are skipped
    pub insert: Vec<BindStep>,

    /// Update parameters; identities are skipped and bound last through
    /// `where_key`
    pub update: Vec<BindStep>,

    pub where_key: KeyBind,

    pub identity: IdentityPlan,

    pub version: Option<VersionPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityPlan {
    pub slot: Slot,
    pub data_type: DataType,
    pub key: KeyBinder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionPlan {
    pub slot: Slot,
    pub data_type: DataType,
}

impl MappingUnit {
    /// Plans the mapper for `schema`. Every foreign target must already be
    /// registered.
    pub fn build(schema: &RecordSchema, registry: &SchemaRegistry) -> Result<MappingUnit> {
        let identity = Self::identity_plan(schema)?;
        let table = schema.table_info(registry)?;

        let materialize = schema
            .fields
            .iter()
            .map(|field| read_step(schema, registry, field))
            .collect::<Result<Vec<_>>>()?;

        let insert = bind_steps(schema, registry, schema.insert_fields())?;
        let update = bind_steps(schema, registry, schema.update_fields())?;

        let where_key = KeyBind {
            param: update.len() + 1,
            slot: identity.slot.clone(),
            key: identity.key,
        };

        let version = schema
            .version_field()
            .map(|field| {
                Ok::<_, Error>(VersionPlan {
                    slot: Slot::new(field),
                    data_type: data_type(schema, field)?,
                })
            })
            .transpose()?;

        let unit = MappingUnit {
            record: schema.id.clone(),
            mapper: format!("{}Mapper", schema.name),
            module: schema.name.to_snake_case(),
            table,
            materialize,
            insert,
            update,
            where_key,
            identity,
            version,
        };

        tracing::debug!(
            record = %unit.record,
            insert = unit.insert.len(),
            update = unit.update.len(),
            "planned mapping unit"
        );

        Ok(unit)
    }

    fn identity_plan(schema: &RecordSchema) -> Result<IdentityPlan> {
        let field = schema.identity();
        let data_type = data_type(schema, field)?;

        Ok(IdentityPlan {
            slot: Slot::new(field),
            data_type,
            key: key_binder(schema, field)?,
        })
    }
}

fn read_step(
    schema: &RecordSchema,
    registry: &SchemaRegistry,
    field: &FieldDescriptor,
) -> Result<ReadStep> {
    let read = if field.foreign {
        let target = registry.foreign_target(schema, field)?;
        let identity = target.identity();

        Read::Foreign(ForeignRead {
            target: target.id.clone(),
            identity: Slot::new(identity),
            key: value_read(target, identity)?,
        })
    } else {
        Read::Value(value_read(schema, field)?)
    };

    let null = if field.throw_if_null {
        NullCheck::Reject
    } else if field.foreign {
        NullCheck::Guard
    } else if !field.nullable
        || matches!(read, Read::Value(ValueRead::Static(RowAccessor::String)))
    {
        // The string accessor reports null itself
        NullCheck::None
    } else {
        NullCheck::Guard
    };

    Ok(ReadStep {
        column: field.index,
        slot: Slot::new(field),
        null,
        read,
    })
}

fn bind_steps<'a>(
    schema: &RecordSchema,
    registry: &SchemaRegistry,
    fields: impl Iterator<Item = &'a FieldDescriptor>,
) -> Result<Vec<BindStep>> {
    fields
        .enumerate()
        .map(|(i, field)| {
            let bind = if field.foreign {
                let target = registry.foreign_target(schema, field)?;
                let identity = target.identity();
                let key = key_binder(target, identity).map_err(|err| {
                    err.context(Error::codegen(
                        Site::field(schema.id.as_str(), &field.field_name),
                        format!("cannot bind a reference to `{}`", target.id),
                    ))
                })?;

                Bind::Foreign(ForeignKey {
                    target: target.id.clone(),
                    identity: Slot::new(identity),
                    key,
                })
            } else if field.is_static() {
                Bind::Static(data_type(schema, field)?.binder())
            } else {
                Bind::Dynamic(converter(schema, field)?)
            };

            Ok(BindStep {
                param: i + 1,
                slot: Slot::new(field),
                bind,
            })
        })
        .collect()
}

fn value_read(schema: &RecordSchema, field: &FieldDescriptor) -> Result<ValueRead> {
    if field.is_static() {
        Ok(ValueRead::Static(data_type(schema, field)?.row_accessor()))
    } else {
        Ok(ValueRead::Dynamic(converter(schema, field)?))
    }
}

fn converter(schema: &RecordSchema, field: &FieldDescriptor) -> Result<ConverterRef> {
    if let Some(persister) = &field.persister {
        return Ok(ConverterRef::Persister(persister.clone()));
    }

    match data_type(schema, field)? {
        DataType::Custom => Err(Error::codegen(
            Site::field(schema.id.as_str(), &field.field_name),
            "no converter for CUSTOM field",
        )),
        data_type => Ok(ConverterRef::BuiltIn(data_type)),
    }
}

fn key_binder(schema: &RecordSchema, identity: &FieldDescriptor) -> Result<KeyBinder> {
    let data_type = data_type(schema, identity)?;

    data_type.key_binder().ok_or_else(|| {
        Error::codegen(
            Site::field(schema.id.as_str(), &identity.field_name),
            format!("identity of type {data_type} has no key binder"),
        )
    })
}

fn data_type(schema: &RecordSchema, field: &FieldDescriptor) -> Result<DataType> {
    field.data_type.ok_or_else(|| {
        Error::codegen(
            Site::field(schema.id.as_str(), &field.field_name),
            "field has no data type",
        )
    })
}
