use super::{util, Expand};
use crate::plan::{Bind, BindStep, Slot};
use rowmap_core::schema::{Binder, KeyBinder};
use rowmap_core::{Error, Result};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_bind_create_vals(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let steps = self.expand_bind_steps(&self.unit.insert)?;

        Ok(quote! {
            fn bind_create_vals(
                &self,
                data: &Self::Record,
                stmt: &mut dyn #rowmap::Statement,
            ) -> #rowmap::Result<()> {
                #( #steps )*
                Ok(())
            }
        })
    }

    pub(super) fn expand_bind_vals(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let steps = self.expand_bind_steps(&self.unit.update)?;

        let where_key = &self.unit.where_key;
        let param = util::int(where_key.param);
        let get = self.get(&quote!(data), &where_key.slot)?;
        let bind = self.expand_key_bind(where_key.key, &where_key.slot, &param)?;

        Ok(quote! {
            fn bind_vals(
                &self,
                data: &Self::Record,
                stmt: &mut dyn #rowmap::Statement,
            ) -> #rowmap::Result<()> {
                #( #steps )*
                {
                    let value = #get;
                    #bind
                }
                Ok(())
            }
        })
    }

    fn expand_bind_steps(&self, steps: &[BindStep]) -> Result<Vec<TokenStream>> {
        steps
            .iter()
            .map(|step| {
                let param = util::int(step.param);
                let get = self.get(&quote!(data), &step.slot)?;

                let bind = match &step.bind {
                    Bind::Static(binder) => {
                        let bind = self.expand_static_bind(*binder, &step.slot, &param)?;
                        null_or(&step.slot, &param, bind)
                    }
                    Bind::Dynamic(converter) => {
                        let rowmap = &self.rowmap;
                        let converter = self.converter(&step.slot, converter)?;
                        null_or(
                            &step.slot,
                            &param,
                            quote! {
                                let stored = <#converter as #rowmap::Persister>::to_stored(value)?;
                                stmt.bind_value(#param, stored)?;
                            },
                        )
                    }
                    Bind::Foreign(foreign) => {
                        let id = self.get(&quote!(foreign), &foreign.identity)?;
                        let key = self.expand_key_bind(foreign.key, &foreign.identity, &param)?;
                        null_or(
                            &step.slot,
                            &param,
                            quote! {
                                let foreign = value;
                                let value = #id;
                                #key
                            },
                        )
                    }
                };

                Ok(quote! {
                    {
                        let value = #get;
                        #bind
                    }
                })
            })
            .collect()
    }

    /// Binds `value`, a reference to a non-null field value.
    fn expand_static_bind(
        &self,
        binder: Binder,
        slot: &Slot,
        param: &TokenStream,
    ) -> Result<TokenStream> {
        let site = self.site(slot);

        // Non-native fields are converted to the data type's own Rust type first
        let native = if slot.is_native() {
            match binder {
                Binder::String => quote!(value),
                _ => quote!(*value),
            }
        } else {
            let data_type = slot.data_type.ok_or_else(|| {
                Error::codegen(site.clone(), "static field has no data type")
            })?;
            let rust_type = util::rust_type(&site, data_type)?;
            match binder {
                Binder::String => quote!(&<#rust_type>::from(value.clone())),
                _ => quote!(<#rust_type>::from(value.clone())),
            }
        };

        Ok(match binder {
            Binder::Bool | Binder::Long => quote!(stmt.bind_long(#param, i64::from(#native))?;),
            Binder::Double => quote!(stmt.bind_double(#param, f64::from(#native))?;),
            Binder::String => quote!(stmt.bind_string(#param, #native)?;),
            Binder::Dynamic => {
                return Err(Error::codegen(
                    site,
                    "dynamic field planned with a static binder",
                ))
            }
        })
    }

    /// Binds `value`, a reference to an identity, with the key binder.
    fn expand_key_bind(
        &self,
        key: KeyBinder,
        identity: &Slot,
        param: &TokenStream,
    ) -> Result<TokenStream> {
        let site = self.site(identity);

        let bind = match key {
            KeyBinder::Long if identity.is_native() => {
                quote!(stmt.bind_long(#param, i64::from(*value))?;)
            }
            KeyBinder::Long => {
                let data_type = identity.data_type.ok_or_else(|| {
                    Error::codegen(site.clone(), "identity has no data type")
                })?;
                let rust_type = util::rust_type(&site, data_type)?;
                quote!(stmt.bind_long(#param, i64::from(<#rust_type>::from(value.clone())))?;)
            }
            KeyBinder::String => quote!(stmt.bind_string(#param, &value.to_string())?;),
        };

        Ok(null_or(identity, param, bind))
    }
}

/// Wraps `bind` so that `None` binds null. `bind` sees `value` as a reference
/// to the non-null value.
fn null_or(slot: &Slot, param: &TokenStream, bind: TokenStream) -> TokenStream {
    if slot.optional {
        quote! {
            match value {
                Some(value) => {
                    #bind
                }
                None => stmt.bind_null(#param)?,
            }
        }
    } else {
        bind
    }
}
