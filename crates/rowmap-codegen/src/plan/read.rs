use super::{ConverterRef, Slot};
use rowmap_core::schema::{RecordId, RowAccessor};

/// Reads one column into one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStep {
    /// 0-based row column; equal to the field's position
    pub column: usize,

    pub slot: Slot,

    pub null: NullCheck,

    pub read: Read,
}

/// What happens when the column is null. The check always precedes the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCheck {
    /// Read unconditionally
    None,

    /// Leave the field at its default when the column is null
    Guard,

    /// Fail materialization when the column is null
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Read {
    Value(ValueRead),

    /// Read the referenced identity and attach a fresh record carrying only
    /// that identity
    Foreign(ForeignRead),
}

/// How a single column value is read.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRead {
    /// A typed row accessor; never [`RowAccessor::Dynamic`]
    Static(RowAccessor),

    Dynamic(ConverterRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignRead {
    pub target: RecordId,

    /// The referenced record's identity field
    pub identity: Slot,

    /// Read chosen by the referenced identity's data type
    pub key: ValueRead,
}
