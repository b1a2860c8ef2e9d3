use super::{Error, Site};

/// Error when a declaration is used in a way the mapper cannot support.
///
/// This occurs when:
/// - A table attribute is applied to something that is not a struct
/// - A record declares no persisted fields
/// - A supertype named by a record cannot be found
#[derive(Debug)]
pub(super) struct DeclarationUsageError {
    pub(super) site: Site,
    pub(super) message: Box<str>,
}

impl std::error::Error for DeclarationUsageError {}

impl core::fmt::Display for DeclarationUsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid declaration at {}: {}", self.site, self.message)
    }
}

impl Error {
    /// Creates a declaration usage error.
    pub fn declaration_usage(site: Site, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DeclarationUsage(DeclarationUsageError {
            site,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a declaration usage error.
    pub fn is_declaration_usage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DeclarationUsage(_))
    }
}
