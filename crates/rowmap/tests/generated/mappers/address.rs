// @generated by rowmap; do not edit
use rowmap::codegen_support as _rowmap;

pub struct AddressMapper;

impl _rowmap::TableMapper for AddressMapper {
    type Record = crate::app::Address;
    type Id = i32;

    fn table_info(&self) -> _rowmap::TableInfo {
        _rowmap::TableInfo {
            table_name: "address".to_string(),
            columns: vec![
                _rowmap::ColumnDef {
                    field_name: "id".to_string(),
                    column_name: "id".to_string(),
                    data_type: _rowmap::DataType::Integer,
                    id: false,
                    generated_id: true,
                    foreign: false,
                    nullable: true,
                    width: 0,
                    format: None,
                    unique: false,
                    unique_combo: false,
                    index: false,
                    unique_index: false,
                    index_name: None,
                    unique_index_name: None,
                    default_value: None,
                    throw_if_null: false,
                    version: false,
                    read_only: false,
                },
                _rowmap::ColumnDef {
                    field_name: "street".to_string(),
                    column_name: "street".to_string(),
                    data_type: _rowmap::DataType::String,
                    id: false,
                    generated_id: false,
                    foreign: false,
                    nullable: true,
                    width: 0,
                    format: None,
                    unique: false,
                    unique_combo: false,
                    index: false,
                    unique_index: false,
                    index_name: None,
                    unique_index_name: None,
                    default_value: None,
                    throw_if_null: false,
                    version: false,
                    read_only: false,
                }
            ],
        }
    }

    fn materialize(&self, row: &dyn _rowmap::Row) -> _rowmap::Result<Self::Record> {
        let mut data = <crate::app::Address as Default>::default();
        if !row.is_null(0)? {
            data.id = row.get_int(0)?;
        }
        data.street = row.get_string(1)?.unwrap_or_default();
        Ok(data)
    }

    fn bind_create_vals(
        &self,
        data: &Self::Record,
        stmt: &mut dyn _rowmap::Statement,
    ) -> _rowmap::Result<()> {
        {
            let value = &data.street;
            stmt.bind_string(1, value)?;
        }
        Ok(())
    }

    fn bind_vals(
        &self,
        data: &Self::Record,
        stmt: &mut dyn _rowmap::Statement,
    ) -> _rowmap::Result<()> {
        {
            let value = &data.street;
            stmt.bind_string(1, value)?;
        }
        {
            let value = &data.id;
            stmt.bind_long(2, i64::from(*value))?;
        }
        Ok(())
    }

    fn extract_id(&self, data: &Self::Record) -> Self::Id {
        data.id.clone()
    }

    fn assign_id(
        &self,
        data: &mut Self::Record,
        value: _rowmap::Value,
    ) -> _rowmap::Result<()> {
        data.id = super::safe_convert::<i32>(value)?;
        Ok(())
    }
}
