use crate::{TableInfo, TableMapper};

use indexmap::IndexMap;
use std::any::{Any, TypeId};

/// Mappers by record type.
///
/// Generated code fills a registry through `register_all`. A later
/// registration for the same record replaces the earlier one.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: IndexMap<TypeId, Entry>,
}

struct Entry {
    record: &'static str,
    id: TypeId,
    table: TableInfo,

    /// `Box<dyn TableMapper<Record = R, Id = I>>`
    mapper: Box<dyn Any>,
}

type DynMapper<R, I> = dyn TableMapper<Record = R, Id = I>;

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M>(&mut self, mapper: M)
    where
        M: TableMapper + 'static,
        M::Record: 'static,
        M::Id: 'static,
    {
        let mapper: Box<DynMapper<M::Record, M::Id>> = Box::new(mapper);

        self.mappers.insert(
            TypeId::of::<M::Record>(),
            Entry {
                record: std::any::type_name::<M::Record>(),
                id: TypeId::of::<M::Id>(),
                table: mapper.table_info(),
                mapper: Box::new(mapper),
            },
        );
    }

    /// The mapper for record type `R` with identity type `I`.
    pub fn get<R: 'static, I: 'static>(&self) -> Option<&DynMapper<R, I>> {
        self.mappers
            .get(&TypeId::of::<R>())?
            .mapper
            .downcast_ref::<Box<DynMapper<R, I>>>()
            .map(|mapper| &**mapper)
    }

    pub fn table_info<R: 'static>(&self) -> Option<&TableInfo> {
        self.mappers.get(&TypeId::of::<R>()).map(|entry| &entry.table)
    }

    /// Tables of every record whose identity has type `I`, in registration
    /// order.
    pub fn by_id_type<I: 'static>(&self) -> impl Iterator<Item = &TableInfo> + '_ {
        self.mappers
            .values()
            .filter(|entry| entry.id == TypeId::of::<I>())
            .map(|entry| &entry.table)
    }

    /// Record type names, in registration order.
    pub fn records(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mappers.values().map(|entry| entry.record)
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}
