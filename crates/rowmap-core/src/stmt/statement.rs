use super::Value;
use crate::Result;

/// A prepared statement accepting positional parameters. Parameter indices are
/// 1-based.
pub trait Statement {
    fn bind_null(&mut self, index: usize) -> Result<()>;

    fn bind_long(&mut self, index: usize, value: i64) -> Result<()>;

    fn bind_double(&mut self, index: usize, value: f64) -> Result<()>;

    fn bind_string(&mut self, index: usize, value: &str) -> Result<()>;

    /// Binds a converter-produced value the driver stores as-is.
    fn bind_value(&mut self, index: usize, value: Value) -> Result<()>;
}
