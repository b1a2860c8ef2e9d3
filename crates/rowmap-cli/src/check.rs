use crate::{load_declarations, Printer};
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// JSON file listing the record declarations
    #[arg(short, long)]
    input: PathBuf,
}

impl CheckCommand {
    pub(crate) fn run(self) -> Result<()> {
        let decls = load_declarations(&self.input)?;

        let mut printer = Printer::new();
        let registry = match rowmap_codegen::check(&decls, &mut printer) {
            Ok(registry) => registry,
            Err(err) => bail!(
                "check failed with {} diagnostic(s): {err}",
                printer.reported()
            ),
        };

        for schema in registry.records() {
            println!(
                "  {} {} {}",
                style("✓").green().bold(),
                schema.id,
                style(format!("-> {} ({} columns)", schema.table_name, schema.fields.len())).dim()
            );
        }

        Ok(())
    }
}
