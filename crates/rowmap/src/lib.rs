mod convert;
pub use convert::SafeConvert;

mod mapper;
pub use mapper::TableMapper;

pub mod persister;
pub use persister::Persister;

mod registry;
pub use registry::MapperRegistry;

pub use rowmap_core::schema::{ColumnDef, DataType, TableInfo};
pub use rowmap_core::stmt::{Params, Row, Statement, Value, ValueRow};
pub use rowmap_core::{Error, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        persister, ColumnDef, DataType, Error, MapperRegistry, Persister, Result, SafeConvert,
        TableInfo, TableMapper,
    };
    pub use rowmap_core::stmt::{Row, Statement, Value};
}
