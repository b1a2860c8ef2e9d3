mod adhoc;
mod codegen;
mod declaration_usage;
mod emission_io;
mod schema_validation;
mod type_conversion;
mod unresolved_foreign_key;

use adhoc::AdhocError;
use codegen::CodegenError;
use declaration_usage::DeclarationUsageError;
use emission_io::EmissionIoError;
use schema_validation::SchemaValidationError;
use type_conversion::TypeConversionError;
use unresolved_foreign_key::UnresolvedForeignKeyError;

use std::fmt;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while resolving declarations or emitting mappers.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// Where in the declaration batch an error originated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Site {
    /// Fully-qualified path of the record declaration
    pub record: String,

    /// Field name, when the error concerns a single field
    pub field: Option<String>,
}

impl Site {
    pub fn record(record: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            field: None,
        }
    }

    pub fn field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}::{}", self.record, field),
            None => f.write_str(&self.record),
        }
    }
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let Some(inner) = err.inner.as_mut() else {
            return self;
        };
        match Arc::get_mut(inner) {
            Some(inner) if inner.cause.is_none() => inner.cause = Some(self),
            // A shared or already-chained consequent cannot take a new cause
            _ => return self,
        }
        err
    }

    pub fn from_args(args: fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// The declaration site of the first error in the chain that has one.
    pub fn site(&self) -> Option<&Site> {
        self.chain().find_map(|err| err.kind().site())
    }

    /// Error message without the site prefix, suitable for diagnostics that
    /// report the site separately.
    pub fn message(&self) -> String {
        let mut out = String::new();
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            out.push_str(&err.kind().message());
            if it.peek().is_some() {
                out.push_str(": ");
            }
        }
        out
    }

    /// Returns `true` for errors that describe a defect in the declarations
    /// and must stop emission for the whole batch.
    pub fn is_batch_fatal(&self) -> bool {
        self.is_declaration_usage() || self.is_schema_validation()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::EmissionIo(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DeclarationUsage(DeclarationUsageError),
    SchemaValidation(SchemaValidationError),
    UnresolvedForeignKey(UnresolvedForeignKeyError),
    Codegen(CodegenError),
    EmissionIo(EmissionIoError),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl ErrorKind {
    fn site(&self) -> Option<&Site> {
        match self {
            ErrorKind::DeclarationUsage(err) => Some(&err.site),
            ErrorKind::SchemaValidation(err) => Some(&err.site),
            ErrorKind::UnresolvedForeignKey(err) => Some(&err.site),
            ErrorKind::Codegen(err) => Some(&err.site),
            ErrorKind::EmissionIo(err) => err.site.as_ref(),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            ErrorKind::DeclarationUsage(err) => err.message.to_string(),
            ErrorKind::SchemaValidation(err) => err.message.to_string(),
            ErrorKind::Codegen(err) => err.message.to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => fmt::Display::fmt(err, f),
            Adhoc(err) => fmt::Display::fmt(err, f),
            DeclarationUsage(err) => fmt::Display::fmt(err, f),
            SchemaValidation(err) => fmt::Display::fmt(err, f),
            UnresolvedForeignKey(err) => fmt::Display::fmt(err, f),
            Codegen(err) => fmt::Display::fmt(err, f),
            EmissionIo(err) => fmt::Display::fmt(err, f),
            TypeConversion(err) => fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::schema_validation(Site::field("app::User", "id"), "missing identity");
        let err = root.context(err!("while resolving batch"));
        assert_eq!(
            err.to_string(),
            "while resolving batch: invalid schema at app::User::id: missing identity"
        );
        assert_eq!(err.site(), Some(&Site::field("app::User", "id")));
    }

    #[test]
    fn parse_errors_keep_their_source() {
        use std::error::Error as _;

        let err = Error::from("x1".parse::<i64>().unwrap_err());
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert!(err.source().is_some());
        assert!(!err.is_type_conversion());
    }

    #[test]
    fn batch_fatal_kinds() {
        let usage = Error::declaration_usage(Site::record("app::User"), "no fields");
        assert!(usage.is_batch_fatal());

        let fk = Error::unresolved_foreign_key(Site::field("app::Post", "user"), "app::User");
        assert!(!fk.is_batch_fatal());
        assert!(fk.is_unresolved_foreign_key());
    }
}
