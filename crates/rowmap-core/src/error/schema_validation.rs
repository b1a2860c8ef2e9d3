use super::{Error, Site};

/// Error when a record's field declarations violate a schema rule.
///
/// This occurs when:
/// - A record has no identity field, or more than one
/// - An identity field is also marked foreign
/// - A generated identity has a type the store cannot generate
/// - `throw_if_null` or `version` is set on an unsuitable type
/// - A field type cannot be classified and the field is not foreign
///
/// These errors are reported at the offending field's declaration.
#[derive(Debug)]
pub(super) struct SchemaValidationError {
    pub(super) site: Site,
    pub(super) message: Box<str>,
}

impl std::error::Error for SchemaValidationError {}

impl core::fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema at {}: {}", self.site, self.message)
    }
}

impl Error {
    /// Creates a schema validation error.
    pub fn schema_validation(site: Site, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaValidation(SchemaValidationError {
            site,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema validation error.
    pub fn is_schema_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaValidation(_))
    }
}
