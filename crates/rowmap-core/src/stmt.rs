//! Values, rows and statements as seen by mapping code.
//!
//! Generated mappers and the plan interpreter are written against the [`Row`]
//! and [`Statement`] traits. rowmap never talks to a database itself; hosts
//! adapt their driver's result set and prepared statement to these traits.

mod num;

mod params;
pub use params::Params;

mod record;
pub use record::Record;

mod row;
pub use row::{Row, ValueRow};

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;
