use crate::{Error, Result, Value};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Narrowing and widening conversion from a value to a field type.
///
/// Generated mappers assign identities and versions through this trait, so a
/// generated `i64` key can be stored in an `i32` identity when it fits.
pub trait SafeConvert: Sized {
    fn safe_convert(value: Value) -> Result<Self>;
}

macro_rules! impl_safe_convert {
    ( $( $ty:ty ),* ) => {
        $(
            impl SafeConvert for $ty {
                fn safe_convert(value: Value) -> Result<Self> {
                    <$ty>::try_from(value)
                }
            }
        )*
    };
}

impl_safe_convert!(i8, i16, i32, i64, f32, f64, bool, char, String, Vec<u8>);

impl SafeConvert for Uuid {
    fn safe_convert(value: Value) -> Result<Self> {
        match value {
            Value::String(ref s) => {
                Uuid::parse_str(s).map_err(|_| Error::type_conversion(value, "Uuid"))
            }
            Value::Bytes(ref bytes) => {
                Uuid::from_slice(bytes).map_err(|_| Error::type_conversion(value, "Uuid"))
            }
            _ => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl SafeConvert for DateTime<Utc> {
    fn safe_convert(value: Value) -> Result<Self> {
        match value {
            Value::String(ref s) => DateTime::parse_from_rfc3339(s)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|_| Error::type_conversion(value, "DateTime<Utc>")),
            Value::I64(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| Error::type_conversion(value, "DateTime<Utc>")),
            _ => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl<T: SafeConvert> SafeConvert for Option<T> {
    fn safe_convert(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::safe_convert(value).map(Some),
        }
    }
}
