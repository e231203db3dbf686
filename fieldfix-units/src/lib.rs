//! Unit file ingestion.
//!
//! A unit file is a compilation unit's syntax tree as handed over by a host front-end. Loading is
//! tolerant: a file that cannot be read or parsed is reported alongside the good ones instead of
//! failing the whole scan.

mod load;
mod unit;

pub use load::{LoadedUnit, UnitLoadError, load_units, read_unit};
pub use unit::UnitFile;
