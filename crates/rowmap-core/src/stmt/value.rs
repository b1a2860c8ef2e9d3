use super::Record;
use crate::schema::DataType;
use crate::{Error, Result};

/// A single column or parameter value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    F32(f32),

    F64(f64),

    Char(char),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// A record held by a foreign field
    Record(Box<Record>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Converts to `T`, mapping `Null` to `None`.
    pub fn to_option<T>(self) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self {
            Self::Null => Ok(None),
            value => T::try_from(value).map(Some),
        }
    }

    /// Narrows or widens the value to the representation of `data_type`.
    ///
    /// Numeric values are range-checked; strings are parsed when the target is
    /// numeric and numbers are formatted when the target is a string. `Null`
    /// passes through unchanged.
    pub fn safe_convert(self, data_type: DataType) -> Result<Value> {
        use DataType::*;

        if self.is_null() {
            return Ok(self);
        }

        Ok(match data_type {
            Boolean | BooleanObj => Value::Bool(bool::try_from(self)?),
            Byte | ByteObj => Value::I8(i8::try_from(self)?),
            Short | ShortObj => Value::I16(i16::try_from(self)?),
            Integer | IntegerObj => Value::I32(i32::try_from(self)?),
            Long | LongObj => Value::I64(i64::try_from(self)?),
            Float | FloatObj => Value::F32(f32::try_from(self)?),
            Double | DoubleObj => Value::F64(f64::try_from(self)?),
            Char | CharObj => Value::Char(char::try_from(self)?),
            String | Uuid => Value::String(std::string::String::try_from(self)?),
            ByteArray | Timestamp | Custom => self,
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<char> for Value {
    fn from(src: char) -> Self {
        Self::Char(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Self {
        Self::Record(Box::new(src))
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I8(v) => Ok(v != 0),
            Value::I16(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for char {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Char(v) => Ok(v),
            Value::String(ref v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(Error::type_conversion(value, "char")),
                }
            }
            _ => Err(Error::type_conversion(value, "char")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Char(v) => Ok(v.to_string()),
            Value::I8(v) => Ok(v.to_string()),
            Value::I16(v) => Ok(v.to_string()),
            Value::I32(v) => Ok(v.to_string()),
            Value::I64(v) => Ok(v.to_string()),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}
