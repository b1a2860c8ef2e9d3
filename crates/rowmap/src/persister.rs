//! Converters for fields without a typed row accessor.
//!
//! A persister reads a column into a field value and turns a non-null field
//! value into the representation bound to a statement. Fields of type `i8`,
//! `char`, `Vec<u8>`, `Uuid` and `DateTime<Utc>` use the persisters in this
//! module; any other type can name its own through the `persister` attribute.

use crate::{Result, Row, SafeConvert, Value};

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub trait Persister {
    /// The field value this persister produces and consumes
    type Value;

    /// Reads column `index`. The caller has already handled null columns of
    /// nullable fields.
    fn read(row: &dyn Row, index: usize) -> Result<Self::Value>;

    /// The representation bound for `value`.
    fn to_stored(value: &Self::Value) -> Result<Value>;
}

/// `i8` stored as a long.
pub struct ByteType;

/// `char` stored as a one-character string.
pub struct CharType;

pub struct ByteArrayType;

/// `Uuid` stored in its hyphenated string form.
pub struct UuidType;

/// `DateTime<Utc>` stored as an RFC 3339 string.
pub struct TimestampType;

/// Reads a column, mapping null to the type's default like the typed row
/// accessors do.
fn read_value<T: SafeConvert + Default>(row: &dyn Row, index: usize) -> Result<T> {
    match row.get_value(index)? {
        Value::Null => Ok(T::default()),
        value => T::safe_convert(value),
    }
}

impl Persister for ByteType {
    type Value = i8;

    fn read(row: &dyn Row, index: usize) -> Result<i8> {
        read_value(row, index)
    }

    fn to_stored(value: &i8) -> Result<Value> {
        Ok(Value::I64(i64::from(*value)))
    }
}

impl Persister for CharType {
    type Value = char;

    fn read(row: &dyn Row, index: usize) -> Result<char> {
        read_value(row, index)
    }

    fn to_stored(value: &char) -> Result<Value> {
        Ok(Value::String(value.to_string()))
    }
}

impl Persister for ByteArrayType {
    type Value = Vec<u8>;

    fn read(row: &dyn Row, index: usize) -> Result<Vec<u8>> {
        read_value(row, index)
    }

    fn to_stored(value: &Vec<u8>) -> Result<Value> {
        Ok(Value::Bytes(value.clone()))
    }
}

impl Persister for UuidType {
    type Value = Uuid;

    fn read(row: &dyn Row, index: usize) -> Result<Uuid> {
        read_value(row, index)
    }

    fn to_stored(value: &Uuid) -> Result<Value> {
        Ok(Value::String(value.hyphenated().to_string()))
    }
}

impl Persister for TimestampType {
    type Value = DateTime<Utc>;

    fn read(row: &dyn Row, index: usize) -> Result<DateTime<Utc>> {
        read_value(row, index)
    }

    fn to_stored(value: &DateTime<Utc>) -> Result<Value> {
        Ok(Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}
