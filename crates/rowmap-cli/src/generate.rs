use crate::{load_declarations, Config, FileSink, Printer};
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// JSON file listing the record declarations
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write generated files to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Name of the generated batch module
    #[arg(long)]
    module: Option<String>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let mut config = config.clone();
        if let Some(out_dir) = self.out_dir {
            config.output.out_dir = out_dir;
        }
        if let Some(module) = self.module {
            config.output.module = module;
        }

        let decls = load_declarations(&self.input)?;
        tracing::info!(
            input = %self.input.display(),
            declarations = decls.len(),
            "loaded declarations"
        );

        println!();
        println!("  {}", style("Generate Mappers").cyan().bold().underlined());
        println!();

        let mut printer = Printer::new();
        let mut sink = FileSink::new(&config.output.out_dir);
        let result = rowmap_codegen::generate(&decls, &config.options(), &mut printer, &mut sink);

        for path in sink.written() {
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("Wrote {}", path.display())).dim()
            );
        }
        println!();

        match result {
            Ok(output) => {
                println!(
                    "  {}",
                    style(format!("Generated {} mapper(s)", output.units.len()))
                        .green()
                        .bold()
                );
                println!();
                Ok(())
            }
            Err(err) => {
                eprintln!("  {}", style(&err).red().bold());
                eprintln!();
                bail!(
                    "generation failed with {} diagnostic(s): {err}",
                    printer.reported()
                )
            }
        }
    }
}
