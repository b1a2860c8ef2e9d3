use super::{Error, Site};

/// Error when a mapping unit cannot be emitted for a record.
#[derive(Debug)]
pub(super) struct CodegenError {
    pub(super) site: Site,
    pub(super) message: Box<str>,
}

impl std::error::Error for CodegenError {}

impl core::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "code generation failed at {}: {}", self.site, self.message)
    }
}

impl Error {
    /// Creates a code generation error.
    pub fn codegen(site: Site, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Codegen(CodegenError {
            site,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a code generation error.
    pub fn is_codegen(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Codegen(_))
    }
}
