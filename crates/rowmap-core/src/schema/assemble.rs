use super::{FieldDescriptor, RecordId, RecordSchema};
use crate::decl::TypeDecl;
use crate::{Error, Result, Site};

/// Builds the schema for one record from its resolved fields.
///
/// Exactly one field must be an identity. The caller registers the result
/// before any foreign key is resolved.
pub fn assemble(decl: &TypeDecl, fields: Vec<FieldDescriptor>) -> Result<RecordSchema> {
    let mut identities = fields
        .iter()
        .filter(|field| field.is_identity())
        .map(|field| field.index);

    let Some(identity) = identities.next() else {
        return Err(Error::schema_validation(
            Site::record(&decl.path),
            "missing identity; mark one field with id or generated_id",
        ));
    };

    if let Some(second) = identities.next() {
        return Err(Error::schema_validation(
            Site::field(&decl.path, &fields[second].field_name),
            format!(
                "more than one identity; `{}` is already the identity",
                fields[identity].field_name
            ),
        ));
    }

    let schema = RecordSchema {
        id: RecordId::from(decl.path.as_str()),
        name: decl.simple_name().to_string(),
        table_name: table_name(decl),
        fields,
        identity,
    };

    tracing::debug!(
        record = %schema.id,
        table = %schema.table_name,
        identity = %schema.identity().field_name,
        "assembled record schema"
    );

    Ok(schema)
}

/// The explicit table name when one is given, else the simple type name
/// lowercased.
pub(crate) fn table_name(decl: &TypeDecl) -> String {
    decl.table
        .as_ref()
        .and_then(|table| table.name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .unwrap_or_else(|| decl.simple_name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_defaults_to_lowercase_simple_name() {
        assert_eq!(table_name(&TypeDecl::record("app::BlogPost")), "blogpost");
        assert_eq!(
            table_name(&TypeDecl::record("app::BlogPost").table_name("posts")),
            "posts"
        );
        assert_eq!(
            table_name(&TypeDecl::record("app::BlogPost").table_name("  ")),
            "blogpost"
        );
    }
}
