mod bind;
mod identity;
mod mappers;
mod materialize;
mod table;
mod util;

pub(crate) use mappers::mappers;

use crate::plan::{MappingUnit, Slot};
use crate::Options;
use rowmap_core::schema::Access;
use rowmap_core::{Result, Site};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The unit being expanded
    unit: &'a MappingUnit,

    /// Path prefix for rowmap types
    rowmap: TokenStream,

    /// The mapped record type
    record_ty: syn::Type,
}

impl Expand<'_> {
    fn expand(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let mapper = util::ident(&self.record_site(), &self.unit.mapper)?;
        let record_ty = &self.record_ty;
        let id_ty = self.ty(&self.unit.identity.slot)?;

        let table_info = self.expand_table_info();
        let materialize = self.expand_materialize()?;
        let bind_create_vals = self.expand_bind_create_vals()?;
        let bind_vals = self.expand_bind_vals()?;
        let identity = self.expand_identity()?;
        let version = self.expand_version()?;

        Ok(quote! {
            pub struct #mapper;

            impl #rowmap::TableMapper for #mapper {
                type Record = #record_ty;
                type Id = #id_ty;

                #table_info
                #materialize
                #bind_create_vals
                #bind_vals
                #identity
                #version
            }
        })
    }

    fn record_site(&self) -> Site {
        Site::record(self.unit.record.as_str())
    }

    fn site(&self, slot: &Slot) -> Site {
        Site::field(self.unit.record.as_str(), &slot.field)
    }

    fn ty(&self, slot: &Slot) -> Result<syn::Type> {
        util::ty(&self.site(slot), &slot.ty)
    }

    /// A reference to the field on `base`.
    fn get(&self, base: &TokenStream, slot: &Slot) -> Result<TokenStream> {
        let field = util::ident(&self.site(slot), &slot.field)?;

        Ok(match slot.access {
            Access::Direct => quote!(&#base.#field),
            Access::Accessor => quote!(&#base.#field()),
        })
    }

    /// An owned copy of the field on `base`.
    fn get_owned(&self, base: &TokenStream, slot: &Slot) -> Result<TokenStream> {
        let field = util::ident(&self.site(slot), &slot.field)?;

        Ok(match slot.access {
            Access::Direct => quote!(#base.#field.clone()),
            Access::Accessor => quote!(#base.#field()),
        })
    }

    /// Assigns `value` to the field on `base`.
    fn set(&self, base: &TokenStream, slot: &Slot, value: TokenStream) -> Result<TokenStream> {
        Ok(match slot.access {
            Access::Direct => {
                let field = util::ident(&self.site(slot), &slot.field)?;
                quote!(#base.#field = #value;)
            }
            Access::Accessor => {
                let setter = util::setter(&self.site(slot), &slot.field)?;
                quote!(#base.#setter(#value);)
            }
        })
    }
}

/// Adapts an expression to the slot's declared type.
///
/// `yields_option` tells whether `expr` already produces an `Option`.
/// Non-native slots convert through `Into`.
fn fit(expr: TokenStream, yields_option: bool, slot: &Slot) -> TokenStream {
    let native = slot.is_native();

    match (yields_option, slot.optional, native) {
        (false, false, true) => expr,
        (false, false, false) => quote!(#expr.into()),
        (false, true, true) => quote!(Some(#expr)),
        (false, true, false) => quote!(Some(#expr.into())),
        (true, true, true) => expr,
        (true, true, false) => quote!(#expr.map(Into::into)),
        (true, false, true) => quote!(#expr.unwrap_or_default()),
        (true, false, false) => quote!(#expr.unwrap_or_default().into()),
    }
}

/// Renders the mapper module for one unit.
pub(crate) fn unit(unit: &MappingUnit, options: &Options) -> Result<TokenStream> {
    let support = util::support_path(&options.support_path)?;
    let record_ty = util::ty(&Site::record(unit.record.as_str()), unit.record.as_str())?;

    let body = Expand {
        unit,
        rowmap: quote!(_rowmap),
        record_ty,
    }
    .expand()?;

    Ok(quote! {
        use #support as _rowmap;

        #body
    })
}
