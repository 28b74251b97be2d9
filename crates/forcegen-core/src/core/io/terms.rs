use crate::core::forcefield::field::ForceField;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct TermRecord {
    potential: String,
    coordinate: String,
    atoms: String,
    fc: f64,
    rv: f64,
}

/// Writes every valence term of `force_field` as one CSV row
/// (`potential,coordinate,atoms,fc,rv`, atoms joined by `-`, values in atomic units).
pub fn write_valence_terms<W: Write>(force_field: &ForceField, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    if let Some(valence) = force_field.valence() {
        for term in valence.terms() {
            let atoms: Vec<String> = term.ic.atoms().iter().map(|i| i.to_string()).collect();
            writer.serialize(TermRecord {
                potential: term.potential.kind().to_string(),
                coordinate: term.ic.kind().to_string(),
                atoms: atoms.join("-"),
                fc: term.potential.fc(),
                rv: term.potential.rv(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
