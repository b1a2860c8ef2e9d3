use super::{fit, util, Expand};
use crate::plan::{ConverterRef, NullCheck, Read, ReadStep, Slot, ValueRead};
use rowmap_core::schema::{DataType, RowAccessor};
use rowmap_core::{Error, Result};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_materialize(&self) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let record_ty = &self.record_ty;

        let steps = self
            .unit
            .materialize
            .iter()
            .map(|step| self.expand_read_step(step))
            .collect::<Result<Vec<_>>>()?;

        Ok(quote! {
            fn materialize(&self, row: &dyn #rowmap::Row) -> #rowmap::Result<Self::Record> {
                let mut data = <#record_ty as Default>::default();
                #( #steps )*
                Ok(data)
            }
        })
    }

    fn expand_read_step(&self, step: &ReadStep) -> Result<TokenStream> {
        let rowmap = &self.rowmap;
        let column = util::int(step.column);

        let assign = match &step.read {
            Read::Value(read) => {
                let (value, yields_option) = self.expand_value_read(read, &step.slot, &column)?;
                self.set(&quote!(data), &step.slot, fit(value, yields_option, &step.slot))?
            }
            Read::Foreign(foreign) => {
                let target_ty = util::ty(&self.site(&step.slot), foreign.target.as_str())?;
                let (key, yields_option) =
                    self.expand_value_read(&foreign.key, &foreign.identity, &column)?;
                let set_key = self.set(
                    &quote!(foreign),
                    &foreign.identity,
                    fit(key, yields_option, &foreign.identity),
                )?;

                let value = if step.slot.optional {
                    quote!(Some(foreign.into()))
                } else {
                    quote!(foreign.into())
                };
                let set = self.set(&quote!(data), &step.slot, value)?;

                quote! {
                    let mut foreign = <#target_ty as Default>::default();
                    #set_key
                    #set
                }
            }
        };

        Ok(match step.null {
            NullCheck::None => assign,
            NullCheck::Guard => quote! {
                if !row.is_null(#column)? {
                    #assign
                }
            },
            NullCheck::Reject => {
                let field = &step.slot.field;
                quote! {
                    if row.is_null(#column)? {
                        return Err(#rowmap::Error::from_args(format_args!(
                            "column {} is null but field `{}` requires a value",
                            #column,
                            #field,
                        )));
                    }
                    #assign
                }
            }
        })
    }

    /// The read expression and whether it yields an `Option`.
    fn expand_value_read(
        &self,
        read: &ValueRead,
        slot: &Slot,
        column: &TokenStream,
    ) -> Result<(TokenStream, bool)> {
        let rowmap = &self.rowmap;

        Ok(match read {
            ValueRead::Static(accessor) => {
                let method = match accessor {
                    RowAccessor::Bool => quote!(get_bool),
                    RowAccessor::Short => quote!(get_short),
                    RowAccessor::Int => quote!(get_int),
                    RowAccessor::Long => quote!(get_long),
                    RowAccessor::Float => quote!(get_float),
                    RowAccessor::Double => quote!(get_double),
                    RowAccessor::String => quote!(get_string),
                    RowAccessor::Dynamic => {
                        return Err(Error::codegen(
                            self.site(slot),
                            "dynamic field planned with a static row accessor",
                        ))
                    }
                };
                let yields_option = matches!(accessor, RowAccessor::String);
                (quote!(row.#method(#column)?), yields_option)
            }
            ValueRead::Dynamic(converter) => {
                let converter = self.converter(slot, converter)?;
                (
                    quote!(<#converter as #rowmap::Persister>::read(row, #column)?),
                    false,
                )
            }
        })
    }

    /// The type implementing `Persister` for a dynamic field.
    pub(super) fn converter(&self, slot: &Slot, converter: &ConverterRef) -> Result<TokenStream> {
        let rowmap = &self.rowmap;

        Ok(match converter {
            ConverterRef::Persister(path) => {
                let path = util::ty(&self.site(slot), path)?;
                quote!(#path)
            }
            ConverterRef::BuiltIn(data_type) => {
                let name = match data_type {
                    DataType::Byte | DataType::ByteObj => quote!(ByteType),
                    DataType::Char | DataType::CharObj => quote!(CharType),
                    DataType::ByteArray => quote!(ByteArrayType),
                    DataType::Uuid => quote!(UuidType),
                    DataType::Timestamp => quote!(TimestampType),
                    data_type => {
                        return Err(Error::codegen(
                            self.site(slot),
                            format!("no built-in converter for {data_type}"),
                        ))
                    }
                };
                quote!(#rowmap::persister::#name)
            }
        })
    }
}
