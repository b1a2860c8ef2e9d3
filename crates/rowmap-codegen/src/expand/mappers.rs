use super::util;
use crate::plan::MappingUnit;
use crate::Options;
use rowmap_core::{Result, Site};

use proc_macro2::TokenStream;
use quote::quote;

/// Renders the batch module: one submodule per unit, the `safe_convert`
/// helper units assign through, and `register_all`.
pub(crate) fn mappers(units: &[MappingUnit], options: &Options) -> Result<TokenStream> {
    let support = util::support_path(&options.support_path)?;

    let mut modules = vec![];
    let mut mappers = vec![];

    for unit in units {
        let site = Site::record(unit.record.as_str());
        modules.push(util::ident(&site, &unit.module)?);
        mappers.push(util::ident(&site, &unit.mapper)?);
    }

    Ok(quote! {
        use #support as _rowmap;

        #( pub mod #modules; )*

        #( pub use #modules::#mappers; )*

        pub(crate) fn safe_convert<T: _rowmap::SafeConvert>(
            value: _rowmap::Value,
        ) -> _rowmap::Result<T> {
            T::safe_convert(value)
        }

        pub fn register_all(registry: &mut _rowmap::MapperRegistry) {
            #( registry.register(#mappers); )*
        }
    })
}
