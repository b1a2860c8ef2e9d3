//! Collaborators supplied by the host that drives a batch.

use crate::{Error, Site};

use std::fmt;
use std::io;

/// A problem found in the declarations, reported at its declaration site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub site: Option<Site>,
    pub message: String,
}

/// Receives diagnostics as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root, e.g. `mappers/person.rs`
    pub name: String,
    pub contents: String,
}

/// Persists generated files.
pub trait EmissionSink {
    fn emit(&mut self, file: GeneratedFile) -> io::Result<()>;
}

impl Diagnostic {
    pub fn new(site: Option<Site>, message: impl Into<String>) -> Self {
        Self {
            site,
            message: message.into(),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        Self {
            site: err.site().cloned(),
            message: err.message(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.site {
            Some(site) => write!(f, "{site}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl EmissionSink for Vec<GeneratedFile> {
    fn emit(&mut self, file: GeneratedFile) -> io::Result<()> {
        self.push(file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_from_error_splits_site() {
        let err = Error::schema_validation(Site::field("app::User", "id"), "bad id");
        let diagnostic = Diagnostic::from(&err);

        assert_eq!(diagnostic.site, Some(Site::field("app::User", "id")));
        assert_eq!(diagnostic.message, "bad id");
        assert_eq!(diagnostic.to_string(), "app::User::id: bad id");
    }
}
