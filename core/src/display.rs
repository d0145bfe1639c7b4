//! Display impls for the dice and the tables
//!
//! Tables are written one `<key>: <value>%` line per entry. A precision given in the format
//! string (`{:.2}`) is applied to every value.
use crate::{DiceSpec, OutcomeTable, RankedList};
use std::fmt::Display;

impl Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count(), self.faces())
    }
}

fn write_entries<K, V>(
    f: &mut std::fmt::Formatter<'_>,
    entries: impl Iterator<Item = (K, V)>,
) -> std::fmt::Result
where
    K: Display,
    V: Display,
{
    let precision = f.precision();
    for (key, value) in entries {
        match precision {
            Some(precision) => writeln!(f, "{key}: {value:.precision$}%")?,
            None => writeln!(f, "{key}: {value}%")?,
        }
    }
    Ok(())
}

impl<K, V> Display for RankedList<K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_entries(f, self.iter().map(|(key, value)| (key, value)))
    }
}

impl Display for OutcomeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_entries(f, self.iter())
    }
}
