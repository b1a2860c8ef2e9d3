use console::style;
use rowmap_core::{Diagnostic, DiagnosticSink, EmissionSink, GeneratedFile};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes generated files below a root directory, creating directories as
/// needed.
#[derive(Debug)]
pub struct FileSink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

/// Prints diagnostics to stderr as they arrive.
#[derive(Debug, Default)]
pub struct Printer {
    reported: usize,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: vec![],
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl EmissionSink for FileSink {
    fn emit(&mut self, file: GeneratedFile) -> io::Result<()> {
        let path = self.root.join(&file.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, file.contents)?;
        self.written.push(path);
        Ok(())
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics printed
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for Printer {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;

        match &diagnostic.site {
            Some(site) => eprintln!(
                "  {} {} {}",
                style("✖").red().bold(),
                style(site).bold(),
                diagnostic.message
            ),
            None => eprintln!("  {} {}", style("✖").red().bold(), diagnostic.message),
        }
    }
}
