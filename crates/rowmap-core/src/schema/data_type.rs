use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Canonical storage representation of a field.
///
/// The `*Obj` variants are the nullable ("boxed") forms of the primitive
/// variants: `Option<i32>` classifies as `IntegerObj`, `i32` as `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Boolean,
    BooleanObj,
    Byte,
    ByteObj,
    Char,
    CharObj,
    Short,
    ShortObj,
    Integer,
    IntegerObj,
    Long,
    LongObj,
    Float,
    FloatObj,
    Double,
    DoubleObj,
    String,
    ByteArray,
    Uuid,
    Timestamp,
    /// Stored through a named custom converter
    Custom,
}

/// Typed row read used to materialize a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAccessor {
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    /// Ask the field's converter to read the column
    Dynamic,
}

/// Typed statement bind used for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binder {
    /// Bound as a long `1` / `0`
    Bool,
    Long,
    Double,
    String,
    /// Convert through the field's converter, then bind the result
    Dynamic,
}

/// Binder used for identity values in where clauses and foreign columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinder {
    Long,
    String,
}

/// Built-in type identities, built once and never mutated.
static BUILT_IN: LazyLock<HashMap<&'static str, DataType>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for data_type in DataType::ALL {
        for name in data_type.associated_types() {
            map.insert(*name, data_type);
        }
    }
    map
});

/// Look up the data type associated with a declared type identity.
///
/// Returns `None` for types outside the built-in table (other records, custom
/// types). Whether `None` is acceptable is up to the caller.
pub fn classify(declared: &str) -> Option<DataType> {
    BUILT_IN.get(declared.trim()).copied()
}

impl DataType {
    pub const ALL: [DataType; 21] = [
        DataType::Boolean,
        DataType::BooleanObj,
        DataType::Byte,
        DataType::ByteObj,
        DataType::Char,
        DataType::CharObj,
        DataType::Short,
        DataType::ShortObj,
        DataType::Integer,
        DataType::IntegerObj,
        DataType::Long,
        DataType::LongObj,
        DataType::Float,
        DataType::FloatObj,
        DataType::Double,
        DataType::DoubleObj,
        DataType::String,
        DataType::ByteArray,
        DataType::Uuid,
        DataType::Timestamp,
        DataType::Custom,
    ];

    /// Declared type identities that classify as this data type.
    pub fn associated_types(self) -> &'static [&'static str] {
        use DataType::*;

        match self {
            Boolean => &["bool"],
            BooleanObj => &["Option<bool>"],
            Byte => &["i8"],
            ByteObj => &["Option<i8>"],
            Char => &["char"],
            CharObj => &["Option<char>"],
            Short => &["i16"],
            ShortObj => &["Option<i16>"],
            Integer => &["i32"],
            IntegerObj => &["Option<i32>"],
            Long => &["i64"],
            LongObj => &["Option<i64>"],
            Float => &["f32"],
            FloatObj => &["Option<f32>"],
            Double => &["f64"],
            DoubleObj => &["Option<f64>"],
            String => &["String", "Option<String>"],
            ByteArray => &["Vec<u8>", "Option<Vec<u8>>"],
            Uuid => &["uuid::Uuid", "Option<uuid::Uuid>"],
            Timestamp => &[
                "chrono::DateTime<chrono::Utc>",
                "Option<chrono::DateTime<chrono::Utc>>",
            ],
            Custom => &[],
        }
    }

    /// True when the type has a built-in row accessor and binder and needs no
    /// per-field converter.
    pub fn is_static(self) -> bool {
        use DataType::*;

        matches!(
            self,
            Boolean
                | BooleanObj
                | Double
                | DoubleObj
                | Float
                | FloatObj
                | Integer
                | IntegerObj
                | Long
                | LongObj
                | Short
                | ShortObj
                | String
        )
    }

    /// True for types that cannot hold null by construction.
    pub fn is_primitive(self) -> bool {
        use DataType::*;

        matches!(
            self,
            Boolean | Byte | Char | Short | Integer | Long | Float | Double
        )
    }

    /// True for the nullable forms of primitive types.
    pub fn is_nullable_obj(self) -> bool {
        self.primitive().is_some()
    }

    /// The primitive form of a nullable type.
    pub fn primitive(self) -> Option<DataType> {
        use DataType::*;

        match self {
            BooleanObj => Some(Boolean),
            ByteObj => Some(Byte),
            CharObj => Some(Char),
            ShortObj => Some(Short),
            IntegerObj => Some(Integer),
            LongObj => Some(Long),
            FloatObj => Some(Float),
            DoubleObj => Some(Double),
            _ => None,
        }
    }

    /// Types the store can generate on insert.
    pub fn is_valid_generated_id(self) -> bool {
        use DataType::*;

        matches!(
            self,
            Short | ShortObj | Integer | IntegerObj | Long | LongObj | Uuid
        )
    }

    /// Types that may serve as an identity at all.
    pub fn is_appropriate_id(self) -> bool {
        use DataType::*;

        !matches!(
            self,
            Boolean
                | BooleanObj
                | Float
                | FloatObj
                | Double
                | DoubleObj
                | ByteArray
                | Custom
        )
    }

    /// Types usable as a version column.
    pub fn is_valid_version(self) -> bool {
        use DataType::*;

        matches!(
            self,
            Short | ShortObj | Integer | IntegerObj | Long | LongObj
        )
    }

    pub fn row_accessor(self) -> RowAccessor {
        use DataType::*;

        match self {
            Boolean | BooleanObj => RowAccessor::Bool,
            Double | DoubleObj => RowAccessor::Double,
            Float | FloatObj => RowAccessor::Float,
            Integer | IntegerObj => RowAccessor::Int,
            Long | LongObj => RowAccessor::Long,
            Short | ShortObj => RowAccessor::Short,
            String => RowAccessor::String,
            _ => RowAccessor::Dynamic,
        }
    }

    pub fn binder(self) -> Binder {
        use DataType::*;

        match self {
            Boolean | BooleanObj => Binder::Bool,
            Float | FloatObj | Double | DoubleObj => Binder::Double,
            Short | ShortObj | Integer | IntegerObj | Long | LongObj => Binder::Long,
            String => Binder::String,
            _ => Binder::Dynamic,
        }
    }

    /// How an identity of this type is bound, or `None` when it cannot be.
    pub fn key_binder(self) -> Option<KeyBinder> {
        use DataType::*;

        match self {
            Byte | ByteObj | Short | ShortObj | Integer | IntegerObj | Long | LongObj => {
                Some(KeyBinder::Long)
            }
            String | Uuid | Char | CharObj => Some(KeyBinder::String),
            _ => None,
        }
    }

    /// The Rust type generated code uses for a non-null value of this type.
    pub fn rust_type(self) -> Option<&'static str> {
        use DataType::*;

        match self {
            Boolean | BooleanObj => Some("bool"),
            Byte | ByteObj => Some("i8"),
            Char | CharObj => Some("char"),
            Short | ShortObj => Some("i16"),
            Integer | IntegerObj => Some("i32"),
            Long | LongObj => Some("i64"),
            Float | FloatObj => Some("f32"),
            Double | DoubleObj => Some("f64"),
            String => Some("String"),
            ByteArray => Some("Vec<u8>"),
            Uuid => Some("uuid::Uuid"),
            Timestamp => Some("chrono::DateTime<chrono::Utc>"),
            Custom => None,
        }
    }
}

impl DataType {
    /// The enum variant name, as spelled in Rust source.
    pub fn variant_name(self) -> &'static str {
        use DataType::*;

        match self {
            Boolean => "Boolean",
            BooleanObj => "BooleanObj",
            Byte => "Byte",
            ByteObj => "ByteObj",
            Char => "Char",
            CharObj => "CharObj",
            Short => "Short",
            ShortObj => "ShortObj",
            Integer => "Integer",
            IntegerObj => "IntegerObj",
            Long => "Long",
            LongObj => "LongObj",
            Float => "Float",
            FloatObj => "FloatObj",
            Double => "Double",
            DoubleObj => "DoubleObj",
            String => "String",
            ByteArray => "ByteArray",
            Uuid => "Uuid",
            Timestamp => "Timestamp",
            Custom => "Custom",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DataType::*;

        let name = match self {
            Boolean => "BOOLEAN",
            BooleanObj => "BOOLEAN_OBJ",
            Byte => "BYTE",
            ByteObj => "BYTE_OBJ",
            Char => "CHAR",
            CharObj => "CHAR_OBJ",
            Short => "SHORT",
            ShortObj => "SHORT_OBJ",
            Integer => "INTEGER",
            IntegerObj => "INTEGER_OBJ",
            Long => "LONG",
            LongObj => "LONG_OBJ",
            Float => "FLOAT",
            FloatObj => "FLOAT_OBJ",
            Double => "DOUBLE",
            DoubleObj => "DOUBLE_OBJ",
            String => "STRING",
            ByteArray => "BYTE_ARRAY",
            Uuid => "UUID",
            Timestamp => "TIMESTAMP",
            Custom => "CUSTOM",
        };
        f.write_str(name)
    }
}
