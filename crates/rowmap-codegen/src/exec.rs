//! Runs a [`MappingUnit`] against [`Record`] values.
//!
//! The interpreter follows the plan step for step, exactly as the rendered
//! mapper does, with fields held as [`Value`]s instead of typed struct fields.
//! An unset field reads as null.

mod convert;
pub use convert::{Converter, Converters};

use crate::plan::{Bind, BindStep, MappingUnit, NullCheck, Read, Slot, ValueRead};
use rowmap_core::schema::{Binder, KeyBinder, RowAccessor};
use rowmap_core::stmt::{Record, Row, Statement, Value};
use rowmap_core::{bail, Error, Result};

pub struct Mapper<'a> {
    unit: &'a MappingUnit,
    converters: &'a Converters,
}

impl<'a> Mapper<'a> {
    pub fn new(unit: &'a MappingUnit, converters: &'a Converters) -> Self {
        Self { unit, converters }
    }

    pub fn unit(&self) -> &MappingUnit {
        self.unit
    }

    /// Builds a record from `row`, one column per field.
    pub fn materialize(&self, row: &dyn Row) -> Result<Record> {
        let mut data = Record::new(self.unit.record.clone());

        for step in &self.unit.materialize {
            match step.null {
                NullCheck::None => {}
                NullCheck::Guard if row.is_null(step.column)? => continue,
                NullCheck::Guard => {}
                NullCheck::Reject if row.is_null(step.column)? => bail!(
                    "column {} is null but field `{}` requires a value",
                    step.column,
                    step.slot.field
                ),
                NullCheck::Reject => {}
            }

            let value = match &step.read {
                Read::Value(read) => self.read(row, step.column, read, &step.slot)?,
                Read::Foreign(foreign) => {
                    let key = self.read(row, step.column, &foreign.key, &foreign.identity)?;
                    let foreign = Record::new(foreign.target.clone())
                        .with(foreign.identity.field.clone(), key);
                    Value::Record(Box::new(foreign))
                }
            };

            data.set(step.slot.field.clone(), value);
        }

        Ok(data)
    }

    /// Binds the insert parameters of `data`.
    pub fn bind_create_vals(&self, data: &Record, stmt: &mut dyn Statement) -> Result<()> {
        self.bind_steps(&self.unit.insert, data, stmt)
    }

    /// Binds the update parameters of `data`, with the identity last.
    pub fn bind_vals(&self, data: &Record, stmt: &mut dyn Statement) -> Result<()> {
        self.bind_steps(&self.unit.update, data, stmt)?;

        let where_key = &self.unit.where_key;
        bind_key(
            stmt,
            where_key.param,
            where_key.key,
            data.value(&where_key.slot.field),
        )
    }

    pub fn extract_id(&self, data: &Record) -> Value {
        data.value(&self.unit.identity.slot.field).clone()
    }

    pub fn assign_id(&self, data: &mut Record, value: Value) -> Result<()> {
        let identity = &self.unit.identity;
        let value = value.safe_convert(identity.data_type)?;
        data.set(identity.slot.field.clone(), value);
        Ok(())
    }

    pub fn extract_version(&self, data: &Record) -> Option<Value> {
        let version = self.unit.version.as_ref()?;
        Some(data.value(&version.slot.field).clone())
    }

    pub fn assign_version(&self, data: &mut Record, value: Value) -> Result<()> {
        let Some(version) = &self.unit.version else {
            return Ok(());
        };

        let value = value.safe_convert(version.data_type)?;
        data.set(version.slot.field.clone(), value);
        Ok(())
    }

    fn read(&self, row: &dyn Row, column: usize, read: &ValueRead, slot: &Slot) -> Result<Value> {
        Ok(match read {
            ValueRead::Static(accessor) => match accessor {
                RowAccessor::Bool => row.get_bool(column)?.into(),
                RowAccessor::Short => row.get_short(column)?.into(),
                RowAccessor::Int => row.get_int(column)?.into(),
                RowAccessor::Long => row.get_long(column)?.into(),
                RowAccessor::Float => row.get_float(column)?.into(),
                RowAccessor::Double => row.get_double(column)?.into(),
                RowAccessor::String => match row.get_string(column)? {
                    Some(value) => value.into(),
                    None if slot.optional => Value::Null,
                    None => Value::from(""),
                },
                RowAccessor::Dynamic => bail!(
                    "field `{}` planned with a static read of a dynamic type",
                    slot.field
                ),
            },
            ValueRead::Dynamic(converter) => self.converters.get(converter)?.read(row, column)?,
        })
    }

    fn bind_steps(&self, steps: &[BindStep], data: &Record, stmt: &mut dyn Statement) -> Result<()> {
        for step in steps {
            let value = data.value(&step.slot.field);

            if value.is_null() {
                stmt.bind_null(step.param)?;
                continue;
            }

            match &step.bind {
                Bind::Static(binder) => bind_static(stmt, step.param, *binder, value)?,
                Bind::Dynamic(converter) => {
                    let stored = self.converters.get(converter)?.to_stored(value)?;
                    stmt.bind_value(step.param, stored)?;
                }
                Bind::Foreign(foreign) => {
                    let Some(record) = value.as_record() else {
                        return Err(Error::type_conversion(value.clone(), "record"));
                    };
                    bind_key(
                        stmt,
                        step.param,
                        foreign.key,
                        record.value(&foreign.identity.field),
                    )?;
                }
            }
        }

        Ok(())
    }
}

fn bind_static(stmt: &mut dyn Statement, param: usize, binder: Binder, value: &Value) -> Result<()> {
    match binder {
        Binder::Bool => stmt.bind_long(param, i64::from(bool::try_from(value.clone())?)),
        Binder::Long => stmt.bind_long(param, i64::try_from(value.clone())?),
        Binder::Double => stmt.bind_double(param, f64::try_from(value.clone())?),
        Binder::String => stmt.bind_string(param, &String::try_from(value.clone())?),
        Binder::Dynamic => bail!("parameter {param} planned with a static bind of a dynamic type"),
    }
}

fn bind_key(stmt: &mut dyn Statement, param: usize, key: KeyBinder, value: &Value) -> Result<()> {
    if value.is_null() {
        return stmt.bind_null(param);
    }

    match key {
        KeyBinder::Long => stmt.bind_long(param, i64::try_from(value.clone())?),
        KeyBinder::String => stmt.bind_string(param, &String::try_from(value.clone())?),
    }
}
