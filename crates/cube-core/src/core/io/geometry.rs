use super::files::require_file;
use super::table::{TableError, read_rows};
use crate::core::elements;
use crate::core::units::angstrom_to_bohr;
use nalgebra::Point3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Atom symbols longer than this are truncated on load.
pub const DEFAULT_SYMBOL_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryAtom {
    pub symbol: String,
    /// Position in bohr.
    pub position: Point3<f64>,
}

impl GeometryAtom {
    pub fn atomic_number(&self) -> Option<u8> {
        elements::atomic_number(&self.symbol)
    }
}

/// Loads a `<symbol> <x> <y> <z>` table with coordinates in angstrom, converting them
/// to bohr. Columns past the fourth are ignored.
pub fn load_geometry<P: AsRef<Path>>(path: P) -> Result<Vec<GeometryAtom>, TableError> {
    load_geometry_with_width(path, DEFAULT_SYMBOL_WIDTH)
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_geometry_with_width<P: AsRef<Path>>(
    path: P,
    symbol_width: usize,
) -> Result<Vec<GeometryAtom>, TableError> {
    require_file(&path)?;
    let mut reader = BufReader::new(File::open(path)?);
    let atoms = read_geometry(&mut reader, symbol_width)?;
    debug!(atoms = atoms.len(), "Loaded geometry");
    Ok(atoms)
}

pub fn read_geometry(
    reader: &mut impl BufRead,
    symbol_width: usize,
) -> Result<Vec<GeometryAtom>, TableError> {
    read_rows(reader)?
        .iter()
        .map(|row| {
            if row.fields.len() < 4 {
                return Err(row.error(format!(
                    "expected '<symbol> <x> <y> <z>', found {} field(s)",
                    row.fields.len()
                )));
            }
            let symbol = row.fields[0].chars().take(symbol_width).collect();
            let position = Point3::new(
                angstrom_to_bohr(row.float(1)?),
                angstrom_to_bohr(row.float(2)?),
                angstrom_to_bohr(row.float(3)?),
            );
            Ok(GeometryAtom { symbol, position })
        })
        .collect()
}
