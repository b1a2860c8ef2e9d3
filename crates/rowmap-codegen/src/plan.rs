//! Per-record mapping plans.
//!
//! A [`MappingUnit`] lists, in order, every row read and parameter bind the
//! record's mapper performs. The same plan is rendered to Rust source by
//! [`crate::expand`] and interpreted by [`crate::exec`].

mod bind;
pub use bind::{Bind, BindStep, ForeignKey, KeyBind};

mod read;
pub use read::{ForeignRead, NullCheck, Read, ReadStep, ValueRead};

mod slot;
pub use slot::{ConverterRef, Slot};

mod unit;
pub use unit::{IdentityPlan, MappingUnit, VersionPlan};
