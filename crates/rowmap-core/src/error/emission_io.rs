use super::{Error, Site};

/// Error when the emission sink fails to persist a generated unit.
#[derive(Debug)]
pub(super) struct EmissionIoError {
    pub(super) site: Option<Site>,
    pub(super) unit: Box<str>,
    pub(super) source: std::io::Error,
}

impl std::error::Error for EmissionIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for EmissionIoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to write `{}`: {}", self.unit, self.source)
    }
}

impl Error {
    /// Creates an emission I/O error for the named unit.
    pub fn emission_io(site: Option<Site>, unit: impl Into<String>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::EmissionIo(EmissionIoError {
            site,
            unit: unit.into().into(),
            source,
        }))
    }

    /// Returns `true` if this error is an emission I/O error.
    pub fn is_emission_io(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmissionIo(_))
    }
}
