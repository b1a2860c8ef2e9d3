use super::{assemble, classify, Access, DataType, ErrorSet, FieldDescriptor};
use crate::decl::{DeclarationSource, FieldAttr, FieldDecl, TypeDecl};
use crate::{Error, Site};

use std::collections::HashSet;

/// Flattens a record and its supertypes into one ordered field list.
///
/// Fields of the record itself come first, then those of each supertype in
/// turn; within a type, fields keep their declaration order. Only fields with
/// a mapping attribute that is persisted are included. Every field is checked
/// and all violations are returned together.
pub fn resolve_fields(
    source: &dyn DeclarationSource,
    decl: &TypeDecl,
) -> Result<Vec<FieldDescriptor>, ErrorSet> {
    if !decl.is_struct() {
        return Err(Error::declaration_usage(
            Site::record(&decl.path),
            "only structs can be annotated with a table attribute",
        )
        .into());
    }

    let table_name = assemble::table_name(decl);
    let mut fields = vec![];
    let mut errs = ErrorSet::new();

    for level in supertype_chain(source, decl)? {
        for field in &level.fields {
            let Some(attr) = &field.attr else {
                continue;
            };

            if !attr.persisted {
                continue;
            }

            let index = fields.len();
            match resolve_field(decl, level, &table_name, field, attr, index) {
                Ok(descriptor) => fields.push(descriptor),
                Err(field_errs) => errs.extend(field_errs),
            }
        }
    }

    errs.check()?;

    if fields.is_empty() {
        return Err(Error::declaration_usage(
            Site::record(&decl.path),
            "every record with a table attribute must have at least one persisted field",
        )
        .into());
    }

    tracing::debug!(record = %decl.path, fields = fields.len(), "resolved fields");
    Ok(fields)
}

/// The record followed by each of its supertypes, most-derived first.
fn supertype_chain<'a>(
    source: &'a dyn DeclarationSource,
    decl: &'a TypeDecl,
) -> Result<Vec<&'a TypeDecl>, Error> {
    let mut chain = vec![decl];
    let mut seen = HashSet::from([decl.path.as_str()]);
    let mut working = decl;

    while let Some(parent) = &working.extends {
        let Some(next) = source.lookup(parent) else {
            return Err(Error::declaration_usage(
                Site::record(&decl.path),
                format!("supertype `{parent}` is not declared"),
            ));
        };

        if !next.is_struct() {
            return Err(Error::declaration_usage(
                Site::record(&decl.path),
                format!("supertype `{parent}` is not a struct"),
            ));
        }

        if !seen.insert(next.path.as_str()) {
            return Err(Error::declaration_usage(
                Site::record(&decl.path),
                format!("supertype chain loops back to `{parent}`"),
            ));
        }

        chain.push(next);
        working = next;
    }

    Ok(chain)
}

fn resolve_field(
    owner: &TypeDecl,
    level: &TypeDecl,
    table_name: &str,
    field: &FieldDecl,
    attr: &FieldAttr,
    index: usize,
) -> Result<FieldDescriptor, ErrorSet> {
    let site = Site::field(&owner.path, &field.name);
    let mut errs = ErrorSet::new();
    let invalid = |message: String| Error::schema_validation(site.clone(), message);

    let column_name = trim_to_none(&attr.column_name).unwrap_or_else(|| field.name.clone());

    let access = if attr.use_get_set || !field.is_public() {
        Access::Accessor
    } else {
        Access::Direct
    };

    let persister = trim_to_none(&attr.persister);
    let classified = attr.data_type.or_else(|| classify(&field.ty));

    let data_type = match classified {
        Some(data_type) if attr.foreign && data_type.is_primitive() => {
            errs.push(invalid(format!(
                "field `{}` has primitive type `{}` but is marked foreign",
                field.name, field.ty
            )));
            None
        }
        // The referenced record decides the column type
        Some(_) if attr.foreign => None,
        Some(DataType::Custom) if persister.is_none() => {
            errs.push(invalid(format!(
                "field `{}` has data type CUSTOM but names no persister",
                field.name
            )));
            None
        }
        Some(data_type) => Some(data_type),
        None if attr.foreign => None,
        None if persister.is_some() => Some(DataType::Custom),
        None => {
            errs.push(invalid(format!(
                "no classifiable DataType for type `{}`; field `{}` has no persister and is not foreign",
                field.ty, field.name
            )));
            None
        }
    };

    if attr.id && attr.generated_id {
        errs.push(invalid(format!(
            "must specify only one of id and generated_id on `{}`",
            field.name
        )));
    }

    let is_identity = attr.id || attr.generated_id;

    if is_identity && attr.foreign {
        errs.push(invalid(format!(
            "identity field `{}` cannot also be foreign",
            field.name
        )));
    }

    let default_value = trim_to_none(&attr.default_value);

    if attr.generated_id && default_value.is_some() {
        errs.push(invalid(format!(
            "field `{}` cannot be a generated_id and have a default value",
            field.name
        )));
    }

    if let Some(data_type) = data_type {
        if attr.generated_id && !data_type.is_valid_generated_id() {
            let valid: Vec<_> = DataType::ALL
                .iter()
                .filter(|data_type| data_type.is_valid_generated_id())
                .map(|data_type| data_type.to_string())
                .collect();

            errs.push(invalid(format!(
                "generated-id field `{}` in {} can't be type {}; must be one of: {}",
                field.name,
                table_name,
                data_type,
                valid.join(" ")
            )));
        }

        if is_identity && !data_type.is_appropriate_id() {
            errs.push(invalid(format!(
                "field `{}` is of data type {} which cannot be the identity",
                field.name, data_type
            )));
        }
    }

    if attr.throw_if_null && !data_type.is_some_and(DataType::is_primitive) {
        errs.push(invalid(format!(
            "field `{}` must be a primitive type if set with throw_if_null",
            field.name
        )));
    }

    if attr.version && !data_type.is_some_and(DataType::is_valid_version) {
        errs.push(invalid(format!(
            "field `{}` is not a valid type to be a version field",
            field.name
        )));
    }

    errs.check()?;

    let index_name = trim_to_none(&attr.index_name);
    let unique_index_name = trim_to_none(&attr.unique_index_name);

    Ok(FieldDescriptor {
        index,
        field_name: field.name.clone(),
        column_name,
        declared_ty: field.ty.trim().to_string(),
        data_type,
        id: attr.id,
        generated_id: attr.generated_id,
        foreign: attr.foreign,
        nullable: attr.can_be_null,
        width: attr.width,
        format: trim_to_none(&attr.format),
        unique: attr.unique,
        unique_combo: attr.unique_combo,
        index_flag: attr.index || index_name.is_some(),
        unique_index: attr.unique_index || unique_index_name.is_some(),
        index_name,
        unique_index_name,
        default_value,
        throw_if_null: attr.throw_if_null,
        version: attr.version,
        read_only: attr.read_only,
        access,
        persister,
        declared_in: level.path.clone(),
    })
}

fn trim_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
