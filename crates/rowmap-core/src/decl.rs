//! Record declarations as supplied by the host.
//!
//! A declaration describes one struct (or other type) as the host compiler sees
//! it: its fully-qualified path, the type it extends, its fields in declaration
//! order and the mapping attributes attached to each of them.

mod field;
pub use field::{FieldAttr, FieldDecl, Visibility};

mod record;
pub use record::{DeclKind, TableAttr, TypeDecl};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supplies the declarations of one batch.
pub trait DeclarationSource {
    /// Declarations carrying a table attribute, in source order.
    fn records(&self) -> Vec<&TypeDecl>;

    /// Any declaration known to the host, including supertypes that are not
    /// themselves records.
    fn lookup(&self, path: &str) -> Option<&TypeDecl>;
}

/// An in-memory declaration set, keyed by path and kept in source order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<TypeDecl>", into = "Vec<TypeDecl>")]
pub struct Declarations {
    decls: IndexMap<String, TypeDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, replacing any earlier one with the same path.
    pub fn push(&mut self, decl: TypeDecl) {
        self.decls.insert(decl.path.clone(), decl);
    }

    pub fn with(mut self, decl: TypeDecl) -> Self {
        self.push(decl);
        self
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.values()
    }
}

impl DeclarationSource for Declarations {
    fn records(&self) -> Vec<&TypeDecl> {
        self.decls.values().filter(|decl| decl.table.is_some()).collect()
    }

    fn lookup(&self, path: &str) -> Option<&TypeDecl> {
        self.decls.get(path)
    }
}

impl From<Vec<TypeDecl>> for Declarations {
    fn from(decls: Vec<TypeDecl>) -> Self {
        let mut ret = Declarations::new();
        for decl in decls {
            ret.push(decl);
        }
        ret
    }
}

impl From<Declarations> for Vec<TypeDecl> {
    fn from(decls: Declarations) -> Self {
        decls.decls.into_values().collect()
    }
}

impl FromIterator<TypeDecl> for Declarations {
    fn from_iter<T: IntoIterator<Item = TypeDecl>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
