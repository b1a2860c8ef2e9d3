pub mod decl;
pub use decl::{DeclarationSource, Declarations};

mod error;
pub use error::{Error, IntoError, Site};

pub mod host;
pub use host::{Diagnostic, DiagnosticSink, EmissionSink, GeneratedFile};

pub mod schema;
pub use schema::SchemaRegistry;

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
