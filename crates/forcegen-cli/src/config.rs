use crate::cli::CompileArgs;
use crate::error::{CliError, Result};
use forcegen::engine::config::{FfConfig, FfConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialForcefieldConfig {
    rcut: Option<f64>,
    #[serde(rename = "rcut-unit")]
    rcut_unit: Option<String>,
    smooth: Option<bool>,
}

/// Run configuration as read from a TOML file; every value is optional and may be
/// overridden on the command line.
///
/// ```toml
/// [forcefield]
/// rcut = 12.0
/// rcut-unit = "angstrom"
/// smooth = true
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    forcefield: Option<PartialForcefieldConfig>,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Combines file values with command-line overrides. A cutoff given on the command
    /// line replaces the file's cutoff together with its unit.
    pub fn merge_with_cli(self, args: &CompileArgs) -> Result<FfConfig> {
        let ff_config = self.forcefield.unwrap_or_default();
        let mut builder = FfConfigBuilder::new();

        let (rcut, rcut_unit) = match args.rcut {
            Some(rcut) => (Some(rcut), args.rcut_unit.clone()),
            None => (ff_config.rcut, ff_config.rcut_unit),
        };
        if let Some(rcut) = rcut {
            builder = builder.rcut(rcut);
        }
        if let Some(unit) = rcut_unit {
            builder = builder.rcut_unit(unit);
        }

        if args.no_smooth {
            builder = builder.smooth(false);
        } else if let Some(smooth) = ff_config.smooth {
            builder = builder.smooth(smooth);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use forcegen::core::units::parse_unit;
    use forcegen::engine::config::DEFAULT_RCUT;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("run.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn compile_args(extra: &[&str]) -> CompileArgs {
        let mut args = vec!["forcegen", "compile", "-p", "ff.pars", "-s", "system.toml"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Compile(args) => args,
            other => panic!("expected 'compile' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_section_yields_defaults() {
        let config = PartialRunConfig::default()
            .merge_with_cli(&compile_args(&[]))
            .unwrap();
        assert_eq!(config, FfConfig::default());
        assert_eq!(config.rcut, DEFAULT_RCUT);
    }

    #[test]
    fn reads_cutoff_with_unit_from_file() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [forcefield]
            rcut = 12.0
            rcut-unit = "angstrom"
            smooth = false
            "#,
        );
        let config = PartialRunConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&compile_args(&[]))
            .unwrap();
        assert_eq!(config.rcut, 12.0 * parse_unit("angstrom").unwrap());
        assert!(!config.smooth);
    }

    #[test]
    fn cli_cutoff_replaces_file_cutoff_and_unit() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [forcefield]
            rcut = 12.0
            rcut-unit = "angstrom"
            "#,
        );
        let config = PartialRunConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&compile_args(&["--rcut", "20.0", "--no-smooth"]))
            .unwrap();
        assert_eq!(config.rcut, 20.0);
        assert!(!config.smooth);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[forcefield]\ncutoff = 12.0\n");
        assert!(matches!(
            PartialRunConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[forcefield]\nrcut-unit = \"angstrom\"\n");
        let result = PartialRunConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&compile_args(&[]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("rcut")));

        let result = PartialRunConfig::default().merge_with_cli(&compile_args(&["--rcut=-1"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
