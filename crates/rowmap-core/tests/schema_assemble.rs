use pretty_assertions::assert_eq;
use rowmap_core::decl::{FieldDecl, TypeDecl};
use rowmap_core::schema::{assemble, resolve_fields};
use rowmap_core::{Declarations, Site};
use std_util::{assert_err, assert_ok};

fn assemble_record(decl: TypeDecl) -> rowmap_core::Result<rowmap_core::schema::RecordSchema> {
    let decls = Declarations::new().with(decl.clone());
    let fields = assert_ok!(resolve_fields(&decls, &decl));
    assemble(&decl, fields)
}

#[test]
fn exactly_one_identity() {
    let schema = assert_ok!(assemble_record(
        TypeDecl::record("app::Person")
            .field(FieldDecl::new("name", "String"))
            .field(FieldDecl::new("id", "i32").generated_id())
    ));

    assert_eq!(schema.identity().field_name, "id");
    assert_eq!(
        schema.fields.iter().filter(|field| field.is_identity()).count(),
        1
    );
}

#[test]
fn missing_identity() {
    let err = assert_err!(assemble_record(
        TypeDecl::record("app::Person").field(FieldDecl::new("name", "String"))
    ));

    assert!(err.is_schema_validation());
    assert_eq!(err.site(), Some(&Site::record("app::Person")));
    assert!(err.to_string().contains("missing identity"));
}

#[test]
fn more_than_one_identity() {
    let err = assert_err!(assemble_record(
        TypeDecl::record("app::Person")
            .field(FieldDecl::new("id", "i32").generated_id())
            .field(FieldDecl::new("code", "String").id())
    ));

    assert!(err.is_schema_validation());
    assert_eq!(err.site(), Some(&Site::field("app::Person", "code")));
    assert!(err.to_string().contains("more than one identity"));
}

#[test]
fn table_name_from_attribute_or_simple_name() {
    let schema = assert_ok!(assemble_record(
        TypeDecl::record("app::model::BlogPost").field(FieldDecl::new("id", "i64").id())
    ));
    assert_eq!(schema.name, "BlogPost");
    assert_eq!(schema.table_name, "blogpost");

    let schema = assert_ok!(assemble_record(
        TypeDecl::record("app::model::BlogPost")
            .table_name(" posts ")
            .field(FieldDecl::new("id", "i64").id())
    ));
    assert_eq!(schema.table_name, "posts");
}

#[test]
fn insert_and_update_field_sets() {
    let schema = assert_ok!(assemble_record(
        TypeDecl::record("app::Person")
            .field(FieldDecl::new("id", "i32").generated_id())
            .field(FieldDecl::new("name", "String"))
            .field(FieldDecl::new("age", "i32"))
    ));

    let insert: Vec<_> = schema.insert_fields().map(|f| f.field_name.as_str()).collect();
    let update: Vec<_> = schema.update_fields().map(|f| f.field_name.as_str()).collect();
    assert_eq!(insert, ["name", "age"]);
    assert_eq!(update, ["name", "age"]);

    let schema = assert_ok!(assemble_record(
        TypeDecl::record("app::Tag")
            .field(FieldDecl::new("code", "String").id())
            .field(FieldDecl::new("label", "String"))
    ));

    let insert: Vec<_> = schema.insert_fields().map(|f| f.field_name.as_str()).collect();
    let update: Vec<_> = schema.update_fields().map(|f| f.field_name.as_str()).collect();
    assert_eq!(insert, ["code", "label"]);
    assert_eq!(update, ["label"]);
}
