//! Mappers emitted by `rowmap-codegen`, compiled against the runtime.
//!
//! The sources under `mappers/` are checked in. `checked_in_sources_are_current`
//! regenerates them from `declarations()` and fails when they drift.

mod mappers;

use mappers::{AddressMapper, BadgeMapper, PersonMapper};
use rowmap::{persister, MapperRegistry, Params, Persister, Row, TableMapper, Value, ValueRow};
use rowmap_codegen::Options;
use rowmap_core::decl::{FieldDecl, TypeDecl};
use rowmap_core::{Declarations, Diagnostic, GeneratedFile};
use std_util::{assert_err, assert_none, assert_ok, assert_some};

use pretty_assertions::assert_eq;
use proc_macro2::{Delimiter, TokenStream, TokenTree};
use std::path::Path;
use uuid::Uuid;

mod app {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Person {
        pub id: i32,
        pub name: String,
        pub address: Option<Address>,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Address {
        pub id: i32,
        pub street: String,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Badge {
        pub id: uuid::Uuid,
        pub holder: Option<Person>,
        label: Option<String>,
        pub initial: char,
        pub revision: Option<i64>,
    }

    impl Badge {
        pub fn label(&self) -> Option<String> {
            self.label.clone()
        }

        pub fn set_label(&mut self, label: Option<String>) {
            self.label = label;
        }
    }
}

use app::{Address, Badge, Person};

fn declarations() -> Declarations {
    Declarations::new()
        .with(
            TypeDecl::record("app::Person")
                .field(FieldDecl::new("id", "i32").generated_id())
                .field(FieldDecl::new("name", "String"))
                .field(FieldDecl::new("address", "Option<app::Address>").foreign()),
        )
        .with(
            TypeDecl::record("app::Address")
                .field(FieldDecl::new("id", "i32").generated_id())
                .field(FieldDecl::new("street", "String")),
        )
        .with(
            TypeDecl::record("app::Badge")
                .field(FieldDecl::new("id", "uuid::Uuid").id())
                .field(FieldDecl::new("holder", "Option<app::Person>").foreign())
                .field(FieldDecl::new("label", "Option<String>").private())
                .field(FieldDecl::new("initial", "char"))
                .field(FieldDecl::new("revision", "Option<i64>").version()),
        )
}

/// Token sequence of a source file, ignoring layout and comments.
fn tokens(src: &str) -> Vec<String> {
    fn flatten(stream: TokenStream, out: &mut Vec<String>) {
        for tree in stream {
            match tree {
                TokenTree::Group(group) => {
                    let (open, close) = match group.delimiter() {
                        Delimiter::Parenthesis => ("(", ")"),
                        Delimiter::Brace => ("{", "}"),
                        Delimiter::Bracket => ("[", "]"),
                        Delimiter::None => ("", ""),
                    };
                    out.push(open.to_string());
                    flatten(group.stream(), out);
                    out.push(close.to_string());
                }
                TokenTree::Punct(punct) => out.push(punct.as_char().to_string()),
                tree => out.push(tree.to_string()),
            }
        }
    }

    let mut out = vec![];
    flatten(src.parse().unwrap(), &mut out);
    out
}

#[test]
fn checked_in_sources_are_current() {
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let mut files: Vec<GeneratedFile> = vec![];
    assert_ok!(rowmap_codegen::generate(
        &declarations(),
        &Options::default(),
        &mut diagnostics,
        &mut files,
    ));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    let names: Vec<_> = files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "mappers/person.rs",
            "mappers/address.rs",
            "mappers/badge.rs",
            "mappers.rs",
        ]
    );

    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/generated");
    for file in &files {
        let checked_in = std::fs::read_to_string(dir.join(&file.name)).unwrap();
        assert_eq!(
            tokens(&file.contents),
            tokens(&checked_in),
            "`{}` is out of date",
            file.name
        );
    }
}

#[test]
fn person_fields_in_declaration_order() {
    let table = PersonMapper.table_info();
    let columns: Vec<_> = table
        .columns
        .iter()
        .map(|column| column.column_name.as_str())
        .collect();

    assert_eq!(table.table_name, "person");
    assert_eq!(columns, ["id", "name", "address"]);
    assert_eq!(
        assert_some!(table.column("address")).data_type,
        rowmap::DataType::Integer
    );
}

#[test]
fn person_insert_skips_generated_id() {
    let mut person = Person {
        id: 4,
        name: "Ann".to_string(),
        address: None,
    };

    let mut params = Params::new();
    assert_ok!(PersonMapper.bind_create_vals(&person, &mut params));
    assert_eq!(params.values(), [Value::from("Ann"), Value::Null]);

    person.address = Some(Address {
        id: 7,
        street: "Main".to_string(),
    });

    let mut params = Params::new();
    assert_ok!(PersonMapper.bind_create_vals(&person, &mut params));
    assert_eq!(params.values(), [Value::from("Ann"), Value::I64(7)]);
}

#[test]
fn person_update_binds_identity_last() {
    let person = Person {
        id: 4,
        name: "Ann".to_string(),
        address: Some(Address {
            id: 7,
            street: "Main".to_string(),
        }),
    };

    let mut params = Params::new();
    assert_ok!(PersonMapper.bind_vals(&person, &mut params));
    assert_eq!(
        params.values(),
        [Value::from("Ann"), Value::I64(7), Value::I64(4)]
    );
}

#[test]
fn materialize_foreign_reference() {
    let row = ValueRow::from(vec![Value::I64(1), Value::from("Ann"), Value::Null]);
    let person = assert_ok!(PersonMapper.materialize(&row));
    assert_eq!(person.id, 1);
    assert_eq!(person.name, "Ann");
    assert_none!(person.address);

    // Only the referenced identity is read; the street stays unset
    let row = ValueRow::from(vec![Value::I64(1), Value::from("Ann"), Value::I64(7)]);
    let person = assert_ok!(PersonMapper.materialize(&row));
    assert_eq!(
        person.address,
        Some(Address {
            id: 7,
            street: String::new(),
        })
    );
}

#[test]
fn assign_generated_id() {
    let mut address = Address::default();
    assert_ok!(AddressMapper.assign_id(&mut address, Value::I64(11)));
    assert_eq!(AddressMapper.extract_id(&address), 11);

    let err = assert_err!(AddressMapper.assign_id(&mut address, Value::I64(i64::MAX)));
    assert!(err.is_type_conversion());
    assert_eq!(AddressMapper.extract_id(&address), 11);
    assert_eq!(AddressMapper.extract_version(&address), None);
}

fn badge() -> Badge {
    let mut badge = Badge::default();
    badge.id = Uuid::new_v4();
    badge.holder = Some(Person {
        id: 3,
        ..Person::default()
    });
    badge.set_label(Some("gold".to_string()));
    badge.initial = 'B';
    badge.revision = Some(2);
    badge
}

#[test]
fn badge_round_trip() {
    let badge = badge();

    let mut params = Params::new();
    assert_ok!(BadgeMapper.bind_create_vals(&badge, &mut params));
    assert_eq!(
        params.values(),
        [
            Value::String(badge.id.hyphenated().to_string()),
            Value::I64(3),
            Value::from("gold"),
            Value::from("B"),
            Value::I64(2),
        ]
    );

    // Nothing is generated, so the insert parameters are the full row
    let back = assert_ok!(BadgeMapper.materialize(&params.into_row()));
    assert_eq!(back, badge);
}

#[test]
fn badge_nulls_stay_unset() {
    let row = ValueRow::from(vec![
        Value::String(Uuid::nil().to_string()),
        Value::Null,
        Value::Null,
        Value::Null,
        Value::Null,
    ]);

    let badge = assert_ok!(BadgeMapper.materialize(&row));
    assert_eq!(badge, Badge::default());
}

#[test]
fn badge_update_binds_string_key_last() {
    let badge = badge();

    let mut params = Params::new();
    assert_ok!(BadgeMapper.bind_vals(&badge, &mut params));
    assert_eq!(params.len(), 5);
    assert_eq!(params.values()[0], Value::I64(3));
    assert_eq!(params.values()[4], Value::String(badge.id.to_string()));
}

#[test]
fn badge_version() {
    let mut badge = badge();
    assert_eq!(BadgeMapper.extract_version(&badge), Some(Value::I64(2)));

    assert_ok!(BadgeMapper.assign_version(&mut badge, Value::I32(5)));
    assert_eq!(badge.revision, Some(5));

    assert_ok!(BadgeMapper.assign_version(&mut badge, Value::Null));
    assert_eq!(badge.revision, None);
    assert_eq!(BadgeMapper.extract_version(&badge), Some(Value::Null));

    assert_err!(BadgeMapper.assign_version(&mut badge, Value::from("three")));
}

#[test]
fn badge_identity_from_string() {
    let mut badge = Badge::default();
    let id = Uuid::new_v4();

    assert_ok!(BadgeMapper.assign_id(&mut badge, Value::String(id.to_string())));
    assert_eq!(BadgeMapper.extract_id(&badge), id);
    assert_err!(BadgeMapper.assign_id(&mut badge, Value::from("not a uuid")));
}

#[test]
fn register_all_mappers() {
    let mut registry = MapperRegistry::new();
    assert!(registry.is_empty());

    mappers::register_all(&mut registry);
    assert_eq!(registry.len(), 3);

    let mapper = assert_some!(registry.get::<Badge, Uuid>());
    assert_eq!(mapper.table_info().table_name, "badge");
    assert!(registry.get::<Badge, i32>().is_none());
    assert!(registry.get::<String, Uuid>().is_none());

    let table = assert_some!(registry.table_info::<Person>());
    assert_eq!(assert_some!(table.identity()).column_name, "id");

    assert_eq!(registry.by_id_type::<i32>().count(), 2);
    assert_eq!(registry.by_id_type::<Uuid>().count(), 1);
    assert!(assert_some!(registry.records().next()).ends_with("Person"));
}

#[test]
fn persisters_are_usable_directly() {
    let row = ValueRow::from(vec![Value::I64(-1), Value::Null]);
    assert_eq!(assert_ok!(persister::ByteType::read(&row, 0)), -1);
    assert!(!assert_ok!(row.is_null(0)));
    assert_eq!(assert_ok!(persister::CharType::read(&row, 1)), '\0');
}
