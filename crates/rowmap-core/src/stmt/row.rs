use super::Value;
use crate::{Error, Result};

/// A positioned result row. Column indices are 0-based.
///
/// Mapping code checks [`Row::is_null`] before any typed read of a nullable
/// column. Typed reads of a null column return the type's zero value, except
/// [`Row::get_string`], which reports null as `None`.
pub trait Row {
    fn is_null(&self, index: usize) -> Result<bool>;

    fn get_bool(&self, index: usize) -> Result<bool>;

    fn get_short(&self, index: usize) -> Result<i16>;

    fn get_int(&self, index: usize) -> Result<i32>;

    fn get_long(&self, index: usize) -> Result<i64>;

    fn get_float(&self, index: usize) -> Result<f32>;

    fn get_double(&self, index: usize) -> Result<f64>;

    fn get_string(&self, index: usize) -> Result<Option<String>>;

    /// The raw column value, for converters.
    fn get_value(&self, index: usize) -> Result<Value>;
}

/// A [`Row`] backed by a list of values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRow {
    values: Vec<Value>,
}

impl ValueRow {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn column(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            Error::from_args(format_args!(
                "column index {index} out of range; row has {} columns",
                self.values.len()
            ))
        })
    }

    fn read<T>(&self, index: usize) -> Result<T>
    where
        T: TryFrom<Value, Error = Error> + Default,
    {
        match self.column(index)? {
            Value::Null => Ok(T::default()),
            value => T::try_from(value.clone()),
        }
    }
}

impl From<Vec<Value>> for ValueRow {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for ValueRow {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Row for ValueRow {
    fn is_null(&self, index: usize) -> Result<bool> {
        Ok(self.column(index)?.is_null())
    }

    fn get_bool(&self, index: usize) -> Result<bool> {
        self.read(index)
    }

    fn get_short(&self, index: usize) -> Result<i16> {
        self.read(index)
    }

    fn get_int(&self, index: usize) -> Result<i32> {
        self.read(index)
    }

    fn get_long(&self, index: usize) -> Result<i64> {
        self.read(index)
    }

    fn get_float(&self, index: usize) -> Result<f32> {
        self.read(index)
    }

    fn get_double(&self, index: usize) -> Result<f64> {
        self.read(index)
    }

    fn get_string(&self, index: usize) -> Result<Option<String>> {
        self.column(index)?.clone().to_option()
    }

    fn get_value(&self, index: usize) -> Result<Value> {
        self.column(index).cloned()
    }
}
