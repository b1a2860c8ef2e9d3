use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name the CLI looks for in the working directory when no
/// configuration file is given.
pub const CONFIG_FILE: &str = "rowmap.toml";

/// Configuration for rowmap CLI operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where and under which module generated files are written
    pub output: OutputConfig,

    /// Path generated code imports the mapper runtime from
    pub support_path: String,
}

/// Configuration for generated output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory generated files are written to
    pub out_dir: PathBuf,

    /// Name of the generated batch module
    pub module: String,
}

impl Default for Config {
    fn default() -> Self {
        let options = rowmap_codegen::Options::default();

        Self {
            output: OutputConfig::default(),
            support_path: options.support_path,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("src/generated"),
            module: rowmap_codegen::Options::default().module,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output configuration
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set the runtime path used by generated code
    pub fn support_path(mut self, path: impl Into<String>) -> Self {
        self.support_path = path.into();
        self
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Loads the configuration file, or returns `default` if it does not exist
    pub fn load_or(path: impl AsRef<Path>, default: Config) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(default)
    }

    /// Code generation options for this configuration
    pub fn options(&self) -> rowmap_codegen::Options {
        rowmap_codegen::Options::new()
            .support_path(&self.support_path)
            .module(&self.output.module)
    }
}

impl OutputConfig {
    /// Create a new OutputConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = path.into();
        self
    }

    /// Set the generated module name
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.support_path, "rowmap::codegen_support");
        assert_eq!(config.output.module, "mappers");
    }

    #[test]
    fn partial_file() {
        let config: Config = r#"
            support_path = "crate::runtime"

            [output]
            out_dir = "gen"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config,
            Config::new()
                .support_path("crate::runtime")
                .output(OutputConfig::new().out_dir("gen"))
        );

        let options = config.options();
        assert_eq!(options.support_path, "crate::runtime");
        assert_eq!(options.module, "mappers");
    }

    #[test]
    fn unknown_type() {
        let err = "support_path = 3".parse::<Config>().unwrap_err();
        assert!(err.to_string().contains("support_path"));
    }
}
