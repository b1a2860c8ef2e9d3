use super::{Error, Site};

/// Error when a foreign field references a record that is not part of the batch.
#[derive(Debug)]
pub(super) struct UnresolvedForeignKeyError {
    pub(super) site: Site,
    pub(super) target: Box<str>,
}

impl std::error::Error for UnresolvedForeignKeyError {}

impl core::fmt::Display for UnresolvedForeignKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown foreign record `{}` referenced by {}",
            self.target, self.site
        )
    }
}

impl Error {
    /// Creates an unresolved foreign key error.
    pub fn unresolved_foreign_key(site: Site, target: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedForeignKey(
            UnresolvedForeignKeyError {
                site,
                target: target.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unresolved foreign key error.
    pub fn is_unresolved_foreign_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedForeignKey(_))
    }
}
