mod check;
mod config;
mod generate;
mod logging;
mod output;

pub use check::CheckCommand;
pub use config::*;
pub use generate::GenerateCommand;
pub use output::{FileSink, Printer};

use anyhow::{Context, Result};
use clap::Parser;
use rowmap_core::Declarations;
use std::path::{Path, PathBuf};

/// Rowmap CLI library for building custom command-line tools
pub struct RowmapCli {
    config: Config,
}

impl RowmapCli {
    /// Create a new RowmapCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new RowmapCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        logging::init(cli.log_level.as_deref());

        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or(CONFIG_FILE, self.config.clone())?,
        };

        match cli.command {
            Command::Generate(cmd) => cmd.run(&config),
            Command::Check(cmd) => cmd.run(),
        }
    }
}

impl Default for RowmapCli {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(name = "rowmap")]
#[command(about = "Rowmap CLI - generate row mappers from record declarations")]
#[command(version)]
struct Cli {
    /// Configuration file; defaults to `rowmap.toml` when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `rowmap_codegen=trace`; overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Resolve declarations and write one mapper per record
    Generate(GenerateCommand),

    /// Resolve declarations and report problems without writing anything
    Check(CheckCommand),
}

/// Reads a JSON list of declarations.
pub(crate) fn load_declarations(path: &Path) -> Result<Declarations> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid declarations in {}", path.display()))
}
