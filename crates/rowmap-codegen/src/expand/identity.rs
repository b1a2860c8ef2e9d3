use super::{fit, util, Expand};
use crate::plan::Slot;
use rowmap_core::schema::DataType;
use rowmap_core::Result;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_identity(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let identity = &self.unit.identity;
        let get = self.get_owned(&quote!(data), &identity.slot)?;
        let assign = self.expand_assign(&identity.slot, identity.data_type)?;

        Ok(quote! {
            fn extract_id(&self, data: &Self::Record) -> Self::Id {
                #get
            }

            fn assign_id(
                &self,
                data: &mut Self::Record,
                value: #rowmap::Value,
            ) -> #rowmap::Result<()> {
                #assign
                Ok(())
            }
        })
    }

    pub(super) fn expand_version(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;

        let Some(version) = &self.unit.version else {
            return Ok(quote!());
        };

        let get = self.get_owned(&quote!(data), &version.slot)?;
        let value = if version.slot.is_native() {
            get
        } else {
            let rust_type = util::rust_type(&self.site(&version.slot), version.data_type)?;
            if version.slot.optional {
                quote!(#get.map(<#rust_type>::from))
            } else {
                quote!(<#rust_type>::from(#get))
            }
        };
        let assign = self.expand_assign(&version.slot, version.data_type)?;

        Ok(quote! {
            fn extract_version(&self, data: &Self::Record) -> Option<#rowmap::Value> {
                Some(#rowmap::Value::from(#value))
            }

            fn assign_version(
                &self,
                data: &mut Self::Record,
                value: #rowmap::Value,
            ) -> #rowmap::Result<()> {
                #assign
                Ok(())
            }
        })
    }

    /// Converts `value` to the slot's type through the batch's `safe_convert`
    /// helper, then assigns it.
    fn expand_assign(&self, slot: &Slot, data_type: DataType) -> Result<TokenStream> {
        let rust_type = util::rust_type(&self.site(slot), data_type)?;
        let target = if slot.optional {
            quote!(Option<#rust_type>)
        } else {
            quote!(#rust_type)
        };

        let value = fit(
            quote!(super::safe_convert::<#target>(value)?),
            slot.optional,
            slot,
        );

        self.set(&quote!(data), slot, value)
    }
}
