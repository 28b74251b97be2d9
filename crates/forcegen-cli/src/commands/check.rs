use crate::cli::CheckArgs;
use crate::error::Result;
use forcegen::core::io::pars::ParsedPars;
use forcegen::engine::registry::generator;
use std::fmt::Write;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let pars = ParsedPars::load(&args.pars)?;
    info!("Parsed {} without syntax errors.", pars.file());
    print!("{}", report(&pars));
    Ok(())
}

/// One line per prefix: the number of entries and whether a generator owns it. Owned
/// sections also have their command names validated.
fn report(pars: &ParsedPars) -> String {
    let mut out = String::new();
    for prefix in pars.prefixes() {
        let section = pars.section(prefix);
        let entries: usize = section
            .commands()
            .map(|command| section.command(command).len())
            .sum();
        let status = match generator(prefix) {
            Some(generator) => match generator.info().check_commands(&section) {
                Ok(()) => "ok".to_string(),
                Err(e) => format!("error: {}", e.kind),
            },
            None => "no generator, ignored".to_string(),
        };
        let _ = writeln!(out, "{:<12} {:>4} line(s)  {}", prefix, entries, status);
    }
    out
}
