use crate::cli::CompileArgs;
use crate::config::PartialRunConfig;
use crate::error::{CliError, Result};
use forcegen::core::forcefield::field::ForceField;
use forcegen::core::io::system::load_system;
use forcegen::core::io::terms::write_valence_terms;
use forcegen::workflows::compile::compile_file;
use std::fs::File;
use std::path::Path;
use tracing::info;

pub fn run(args: CompileArgs) -> Result<()> {
    let force_field = execute(&args)?;
    println!("{}", force_field.summary());
    Ok(())
}

fn execute(args: &CompileArgs) -> Result<ForceField> {
    let partial = match &args.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    let config = partial.merge_with_cli(args)?;
    info!(
        "Using cutoff {:.6} bohr, smoothing {}.",
        config.rcut,
        if config.smooth { "on" } else { "off" }
    );

    info!("Loading system from {:?}", args.system);
    let mut system = load_system(&args.system)?;
    let force_field = compile_file(&mut system, &args.pars, &config)?;

    if let Some(path) = &args.terms_csv {
        export_terms(&force_field, path)?;
    }
    Ok(force_field)
}

fn export_terms(force_field: &ForceField, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_valence_terms(force_field, file).map_err(|e| CliError::Export {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Valence terms written to {:?}", path);
    Ok(())
}
