use crate::plan::ConverterRef;
use rowmap_core::schema::DataType;
use rowmap_core::stmt::{Row, Value};
use rowmap_core::{bail, Error, Result};

use indexmap::IndexMap;

/// Reads and stores the values of a dynamic field.
pub trait Converter {
    /// Reads the column at `index`.
    fn read(&self, row: &dyn Row, index: usize) -> Result<Value>;

    /// The representation bound for a non-null field value.
    fn to_stored(&self, value: &Value) -> Result<Value>;
}

/// Converters by reference, with the built-in converters always available.
#[derive(Default)]
pub struct Converters {
    named: IndexMap<String, Box<dyn Converter>>,
}

/// Converter for the non-static built-in data types.
struct BuiltIn(DataType);

impl Converters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter under a persister name.
    pub fn with(mut self, name: impl Into<String>, converter: impl Converter + 'static) -> Self {
        self.register(name, converter);
        self
    }

    pub fn register(&mut self, name: impl Into<String>, converter: impl Converter + 'static) {
        self.named.insert(name.into(), Box::new(converter));
    }

    pub fn get(&self, converter: &ConverterRef) -> Result<&dyn Converter> {
        match converter {
            ConverterRef::BuiltIn(data_type) => Ok(built_in(*data_type)?),
            ConverterRef::Persister(name) => match self.named.get(name) {
                Some(converter) => Ok(converter.as_ref()),
                None => bail!("no converter registered for persister `{name}`"),
            },
        }
    }
}

fn built_in(data_type: DataType) -> Result<&'static dyn Converter> {
    static BYTE: BuiltIn = BuiltIn(DataType::Byte);
    static CHAR: BuiltIn = BuiltIn(DataType::Char);
    static BYTE_ARRAY: BuiltIn = BuiltIn(DataType::ByteArray);
    static UUID: BuiltIn = BuiltIn(DataType::Uuid);
    static TIMESTAMP: BuiltIn = BuiltIn(DataType::Timestamp);

    Ok(match data_type {
        DataType::Byte | DataType::ByteObj => &BYTE,
        DataType::Char | DataType::CharObj => &CHAR,
        DataType::ByteArray => &BYTE_ARRAY,
        DataType::Uuid => &UUID,
        DataType::Timestamp => &TIMESTAMP,
        _ => bail!("no built-in converter for {data_type}"),
    })
}

impl BuiltIn {
    fn stored_type(&self) -> &'static str {
        match self.0 {
            DataType::Byte => "i64",
            DataType::ByteArray => "Vec<u8>",
            _ => "String",
        }
    }
}

impl Converter for BuiltIn {
    fn read(&self, row: &dyn Row, index: usize) -> Result<Value> {
        let value = row.get_value(index)?;
        if value.is_null() {
            return Ok(value);
        }

        match self.0 {
            DataType::Byte => Ok(Value::I8(i8::try_from(value)?)),
            DataType::Char => Ok(Value::Char(char::try_from(value)?)),
            DataType::ByteArray => Ok(Value::Bytes(Vec::<u8>::try_from(value)?)),
            DataType::Uuid => Ok(Value::String(String::try_from(value)?)),
            _ => Ok(value),
        }
    }

    fn to_stored(&self, value: &Value) -> Result<Value> {
        match (self.0, value) {
            (DataType::Byte, Value::I8(v)) => Ok(Value::I64((*v).into())),
            (DataType::Char, Value::Char(v)) => Ok(Value::String(v.to_string())),
            (DataType::ByteArray, Value::Bytes(_)) => Ok(value.clone()),
            (DataType::Uuid, Value::String(_)) => Ok(value.clone()),
            (DataType::Timestamp, Value::I64(_) | Value::String(_)) => Ok(value.clone()),
            (_, value) => Err(Error::type_conversion(value.clone(), self.stored_type())),
        }
    }
}
