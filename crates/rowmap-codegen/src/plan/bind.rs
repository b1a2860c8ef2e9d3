use super::{ConverterRef, Slot};
use rowmap_core::schema::{Binder, KeyBinder, RecordId};

/// Binds one field as one statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BindStep {
    /// 1-based parameter index
    pub param: usize,

    pub slot: Slot,

    pub bind: Bind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    /// A typed binder; never [`Binder::Dynamic`]
    Static(Binder),

    /// Convert, then bind the stored representation as-is
    Dynamic(ConverterRef),

    /// Bind the identity of the referenced record
    Foreign(ForeignKey),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub target: RecordId,

    /// The referenced record's identity field
    pub identity: Slot,

    pub key: KeyBinder,
}

/// The trailing where-clause parameter of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBind {
    pub param: usize,
    pub slot: Slot,
    pub key: KeyBinder,
}
