// @generated by rowmap; do not edit
use rowmap::codegen_support as _rowmap;

pub mod person;
pub mod address;
pub mod badge;

pub use person::PersonMapper;
pub use address::AddressMapper;
pub use badge::BadgeMapper;

pub(crate) fn safe_convert<T: _rowmap::SafeConvert>(
    value: _rowmap::Value,
) -> _rowmap::Result<T> {
    T::safe_convert(value)
}

pub fn register_all(registry: &mut _rowmap::MapperRegistry) {
    registry.register(PersonMapper);
    registry.register(AddressMapper);
    registry.register(BadgeMapper);
}
