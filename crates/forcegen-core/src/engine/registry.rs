use super::generator::Generator;
use super::nonbonded::{ExpRep, FixQ};
use super::valence::{BendAngleHarm, BendCosHarm, BondFues, BondHarm};
use phf::{OrderedMap, phf_ordered_map};

/// Every known generator, keyed by the prefix it owns, in application order.
pub static GENERATORS: OrderedMap<&'static str, &'static dyn Generator> = phf_ordered_map! {
    "BONDHARM" => &BondHarm as &'static dyn Generator,
    "BONDFUES" => &BondFues as &'static dyn Generator,
    "BENDAHARM" => &BendAngleHarm as &'static dyn Generator,
    "BENDCHARM" => &BendCosHarm as &'static dyn Generator,
    "EXPREP" => &ExpRep as &'static dyn Generator,
    "FIXQ" => &FixQ as &'static dyn Generator,
};

/// The generator owning `prefix`; prefixes are matched case-insensitively.
pub fn generator(prefix: &str) -> Option<&'static dyn Generator> {
    GENERATORS.get(prefix.to_uppercase().as_str()).copied()
}

/// All generators in application order.
pub fn generators() -> impl Iterator<Item = &'static dyn Generator> {
    GENERATORS.values().copied()
}
