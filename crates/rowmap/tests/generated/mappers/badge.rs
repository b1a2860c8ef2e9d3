// @generated by rowmap; do not edit
use rowmap::codegen_support as _rowmap;

pub struct BadgeMapper;

impl _rowmap::TableMapper for BadgeMapper {
    type Record = crate::app::Badge;
    type Id = uuid::Uuid;

    fn table_info(&self) -> _rowmap::TableInfo {
        _rowmap::TableInfo {
            table_name: "badge".to_string(),
            columns: vec![
                _rowmap::ColumnDef {
                    field_name: "id".to_string(),
                    column_name: "id".to_string(),
                    data_type: _rowmap::DataType::Uuid,
                    id: true,
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
                },
                _rowmap::ColumnDef {
                    field_name: "holder".to_string(),
                    column_name: "holder".to_string(),
                    data_type: _rowmap::DataType::Integer,
                    id: false,
                    generated_id: false,
                    foreign: true,
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
                    field_name: "label".to_string(),
                    column_name: "label".to_string(),
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
                },
                _rowmap::ColumnDef {
                    field_name: "initial".to_string(),
                    column_name: "initial".to_string(),
                    data_type: _rowmap::DataType::Char,
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
                },
                _rowmap::ColumnDef {
                    field_name: "revision".to_string(),
                    column_name: "revision".to_string(),
                    data_type: _rowmap::DataType::LongObj,
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
                    version: true,
                    read_only: false,
                }
            ],
        }
    }

    fn materialize(&self, row: &dyn _rowmap::Row) -> _rowmap::Result<Self::Record> {
        let mut data = <crate::app::Badge as Default>::default();
        if !row.is_null(0)? {
            data.id = <_rowmap::persister::UuidType as _rowmap::Persister>::read(row, 0)?;
        }
        if !row.is_null(1)? {
            let mut foreign = <crate::app::Person as Default>::default();
            foreign.id = row.get_int(1)?;
            data.holder = Some(foreign.into());
        }
        data.set_label(row.get_string(2)?);
        if !row.is_null(3)? {
            data.initial = <_rowmap::persister::CharType as _rowmap::Persister>::read(row, 3)?;
        }
        if !row.is_null(4)? {
            data.revision = Some(row.get_long(4)?);
        }
        Ok(data)
    }

    fn bind_create_vals(
        &self,
        data: &Self::Record,
        stmt: &mut dyn _rowmap::Statement,
    ) -> _rowmap::Result<()> {
        {
            let value = &data.id;
            let stored = <_rowmap::persister::UuidType as _rowmap::Persister>::to_stored(value)?;
            stmt.bind_value(1, stored)?;
        }
        {
            let value = &data.holder;
            match value {
                Some(value) => {
                    let foreign = value;
                    let value = &foreign.id;
                    stmt.bind_long(2, i64::from(*value))?;
                }
                None => stmt.bind_null(2)?,
            }
        }
        {
            let value = &data.label();
            match value {
                Some(value) => {
                    stmt.bind_string(3, value)?;
                }
                None => stmt.bind_null(3)?,
            }
        }
        {
            let value = &data.initial;
            let stored = <_rowmap::persister::CharType as _rowmap::Persister>::to_stored(value)?;
            stmt.bind_value(4, stored)?;
        }
        {
            let value = &data.revision;
            match value {
                Some(value) => {
                    stmt.bind_long(5, i64::from(*value))?;
                }
                None => stmt.bind_null(5)?,
            }
        }
        Ok(())
    }

    fn bind_vals(
        &self,
        data: &Self::Record,
        stmt: &mut dyn _rowmap::Statement,
    ) -> _rowmap::Result<()> {
        {
            let value = &data.holder;
            match value {
                Some(value) => {
                    let foreign = value;
                    let value = &foreign.id;
                    stmt.bind_long(1, i64::from(*value))?;
                }
                None => stmt.bind_null(1)?,
            }
        }
        {
            let value = &data.label();
            match value {
                Some(value) => {
                    stmt.bind_string(2, value)?;
                }
                None => stmt.bind_null(2)?,
            }
        }
        {
            let value = &data.initial;
            let stored = <_rowmap::persister::CharType as _rowmap::Persister>::to_stored(value)?;
            stmt.bind_value(3, stored)?;
        }
        {
            let value = &data.revision;
            match value {
                Some(value) => {
                    stmt.bind_long(4, i64::from(*value))?;
                }
                None => stmt.bind_null(4)?,
            }
        }
        {
            let value = &data.id;
            stmt.bind_string(5, &value.to_string())?;
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
        data.id = super::safe_convert::<uuid::Uuid>(value)?;
        Ok(())
    }

    fn extract_version(&self, data: &Self::Record) -> Option<_rowmap::Value> {
        Some(_rowmap::Value::from(data.revision.clone()))
    }

    fn assign_version(
        &self,
        data: &mut Self::Record,
        value: _rowmap::Value,
    ) -> _rowmap::Result<()> {
        data.revision = super::safe_convert::<Option<i64>>(value)?;
        Ok(())
    }
}
