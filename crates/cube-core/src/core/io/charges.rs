use super::files::require_file;
use super::table::{TableError, read_rows};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

/// A rectangular numeric table, loaded verbatim.
///
/// The common case is a single column holding one charge per atom, in the same order
/// as the atoms of the matching geometry or CUBE file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChargeTable {
    rows: Vec<Vec<f64>>,
}

impl ChargeTable {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.ncols() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// All values in row-major order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().flatten().copied().collect()
    }
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_charges<P: AsRef<Path>>(path: P) -> Result<ChargeTable, TableError> {
    require_file(&path)?;
    let mut reader = BufReader::new(File::open(path)?);
    let table = read_charges(&mut reader)?;
    debug!(rows = table.nrows(), cols = table.ncols(), "Loaded charge table");
    Ok(table)
}

pub fn read_charges(reader: &mut impl BufRead) -> Result<ChargeTable, TableError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for row in read_rows(reader)? {
        let values = (0..row.fields.len())
            .map(|i| row.float(i))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(row.error(format!(
                    "expected {} column(s), found {}",
                    first.len(),
                    values.len()
                )));
            }
        }
        rows.push(values);
    }
    Ok(ChargeTable { rows })
}
