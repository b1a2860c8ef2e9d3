use super::{Statement, Value, ValueRow};
use crate::{bail, Result};

/// A [`Statement`] that records bound parameters in order.
///
/// Parameters must be bound with contiguous indices starting at 1.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    values: Vec<Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Turns the bound parameters into a row, column `i` holding parameter
    /// `i + 1`.
    pub fn into_row(self) -> ValueRow {
        ValueRow::new(self.values)
    }

    fn push(&mut self, index: usize, value: Value) -> Result<()> {
        let expected = self.values.len() + 1;
        if index != expected {
            bail!("parameter {index} bound out of order; expected parameter {expected}");
        }
        self.values.push(value);
        Ok(())
    }
}

impl Statement for Params {
    fn bind_null(&mut self, index: usize) -> Result<()> {
        self.push(index, Value::Null)
    }

    fn bind_long(&mut self, index: usize, value: i64) -> Result<()> {
        self.push(index, Value::I64(value))
    }

    fn bind_double(&mut self, index: usize, value: f64) -> Result<()> {
        self.push(index, Value::F64(value))
    }

    fn bind_string(&mut self, index: usize, value: &str) -> Result<()> {
        self.push(index, Value::from(value))
    }

    fn bind_value(&mut self, index: usize, value: Value) -> Result<()> {
        self.push(index, value)
    }
}
