use super::{util, Expand};
use rowmap_core::schema::ColumnDef;

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

impl Expand<'_> {
    pub(super) fn expand_table_info(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let table_name = &self.unit.table.table_name;
        let columns = self
            .unit
            .table
            .columns
            .iter()
            .map(|column| self.expand_column(column));

        quote! {
            fn table_info(&self) -> #rowmap::TableInfo {
                #rowmap::TableInfo {
                    table_name: #table_name.to_string(),
                    columns: vec![ #( #columns ),* ],
                }
            }
        }
    }

    fn expand_column(&self, column: &ColumnDef) -> TokenStream {
        let rowmap = &self.rowmap;

        let ColumnDef {
            field_name,
            column_name,
            data_type,
            id,
            generated_id,
            foreign,
            nullable,
            width,
            format,
            unique,
            unique_combo,
            index,
            unique_index,
            index_name,
            unique_index_name,
            default_value,
            throw_if_null,
            version,
            read_only,
        } = column;

        let data_type = format_ident!("{}", data_type.variant_name());
        let width = Literal::u32_unsuffixed(*width);
        let format = util::opt_str(format.as_deref());
        let index_name = util::opt_str(index_name.as_deref());
        let unique_index_name = util::opt_str(unique_index_name.as_deref());
        let default_value = util::opt_str(default_value.as_deref());

        quote! {
            #rowmap::ColumnDef {
                field_name: #field_name.to_string(),
                column_name: #column_name.to_string(),
                data_type: #rowmap::DataType::#data_type,
                id: #id,
                generated_id: #generated_id,
                foreign: #foreign,
                nullable: #nullable,
                width: #width,
                format: #format,
                unique: #unique,
                unique_combo: #unique_combo,
                index: #index,
                unique_index: #unique_index,
                index_name: #index_name,
                unique_index_name: #unique_index_name,
                default_value: #default_value,
                throw_if_null: #throw_if_null,
                version: #version,
                read_only: #read_only,
            }
        }
    }
}
