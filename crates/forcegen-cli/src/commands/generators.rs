use crate::error::Result;
use forcegen::engine::registry::generators;
use std::fmt::Write;

pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

fn report() -> String {
    let mut out = String::new();
    for generator in generators() {
        let info = generator.info();
        let _ = writeln!(
            out,
            "{:<10} atom types: {}  parameters: {}  commands: {}",
            info.prefix,
            info.num_ffatypes,
            info.par_names.join(", "),
            info.commands.join(", ")
        );
    }
    out
}
