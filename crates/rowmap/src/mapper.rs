use crate::{Result, Row, Statement, TableInfo, Value};

/// Moves one record type between its struct and a relational row.
///
/// Implementations are generated per record. Row columns are 0-based and
/// follow the record's field order; statement parameters are 1-based.
pub trait TableMapper {
    type Record: Default;

    /// Type of the identity field
    type Id;

    fn table_info(&self) -> TableInfo;

    /// Builds a record from a result row.
    fn materialize(&self, row: &dyn Row) -> Result<Self::Record>;

    /// Binds the parameters of an insert. Generated identities are not bound.
    fn bind_create_vals(&self, data: &Self::Record, stmt: &mut dyn Statement) -> Result<()>;

    /// Binds the parameters of an update, with the identity as the last
    /// parameter.
    fn bind_vals(&self, data: &Self::Record, stmt: &mut dyn Statement) -> Result<()>;

    fn extract_id(&self, data: &Self::Record) -> Self::Id;

    /// Stores `value`, e.g. a generated key, narrowed to the identity's type.
    fn assign_id(&self, data: &mut Self::Record, value: Value) -> Result<()>;

    /// The version field's value, for records that have one.
    fn extract_version(&self, _data: &Self::Record) -> Option<Value> {
        None
    }

    fn assign_version(&self, _data: &mut Self::Record, _value: Value) -> Result<()> {
        Ok(())
    }
}
