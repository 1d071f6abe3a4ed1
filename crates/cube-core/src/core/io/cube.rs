use super::files::FileNotFound;
use super::traits::VolumetricFile;
use crate::core::grid::GridShape;
use crate::core::models::volume::{CubeAtom, CubeAxis, CubeVolume, ShapeError};
use nalgebra::{Point3, Vector3};
use std::fmt;
use std::io::{self, BufRead, Lines, Write};
use thiserror::Error;
use tracing::{debug, trace};

const VALUES_PER_LINE: usize = 6;
// Upper bound on pre-allocation driven by header counts, which may be corrupt.
const MAX_PREALLOC: usize = 1 << 24;

/// The two free-text lines opening every CUBE file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeMetadata {
    pub comments: [String; 2],
}

impl Default for CubeMetadata {
    fn default() -> Self {
        Self {
            comments: ["CUBE file".to_string(), "Generated by cubeio".to_string()],
        }
    }
}

#[derive(Debug, Error)]
pub enum CubeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    NotFound(#[from] FileNotFound),
    #[error("Format error on line {line}: {kind}")]
    Format {
        line: usize,
        kind: CubeFormatErrorKind,
    },
    #[error("Volumetric data holds {found} values but the grid has {expected} voxels")]
    DataLength { expected: usize, found: usize },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CubeFormatErrorKind {
    #[error("Unexpected end of file while reading the {0}")]
    UnexpectedEof(&'static str),
    #[error("The {record} needs at least {expected} fields, found {found}")]
    MissingFields {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid integer in the {record} (value: '{value}')")]
    InvalidInt { record: &'static str, value: String },
    #[error("Invalid float in the {record} (value: '{value}')")]
    InvalidFloat { record: &'static str, value: String },
    #[error("Non-finite value in the {record} (value: '{value}')")]
    NonFinite { record: &'static str, value: String },
    #[error("The {0} is not valid UTF-8 text")]
    InvalidText(&'static str),
    #[error("Negative atom count {0}; multi-dataset cube files are not supported")]
    NegativeAtomCount(i64),
    #[error("Grid of {nx} x {ny} x {nz} voxels is too large")]
    GridTooLarge { nx: usize, ny: usize, nz: usize },
}

/// Reports undecodable bytes as a format error on `line`; other read failures stay I/O errors.
fn line_error(error: io::Error, line: usize, record: &'static str) -> CubeError {
    if error.kind() == io::ErrorKind::InvalidData {
        CubeError::Format {
            line,
            kind: CubeFormatErrorKind::InvalidText(record),
        }
    } else {
        CubeError::Io(error)
    }
}

/// Line-numbered access to the fixed-layout CUBE header.
struct HeaderLines<B> {
    lines: Lines<B>,
    line_num: usize,
}

impl<B: BufRead> HeaderLines<B> {
    fn next_line(&mut self, record: &'static str) -> Result<String, CubeError> {
        self.line_num += 1;
        match self.lines.next() {
            Some(line) => line.map_err(|e| line_error(e, self.line_num, record)),
            None => Err(CubeError::Format {
                line: self.line_num,
                kind: CubeFormatErrorKind::UnexpectedEof(record),
            }),
        }
    }

    fn next_fields(
        &mut self,
        record: &'static str,
        expected: usize,
    ) -> Result<Vec<String>, CubeError> {
        let line = self.next_line(record)?;
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if fields.len() < expected {
            return Err(self.error(CubeFormatErrorKind::MissingFields {
                record,
                expected,
                found: fields.len(),
            }));
        }
        Ok(fields)
    }

    fn int(&self, value: &str, record: &'static str) -> Result<i64, CubeError> {
        value.parse().map_err(|_| {
            self.error(CubeFormatErrorKind::InvalidInt {
                record,
                value: value.into(),
            })
        })
    }

    fn float(&self, value: &str, record: &'static str) -> Result<f64, CubeError> {
        let parsed: f64 = value.parse().map_err(|_| {
            self.error(CubeFormatErrorKind::InvalidFloat {
                record,
                value: value.into(),
            })
        })?;
        if !parsed.is_finite() {
            return Err(self.error(CubeFormatErrorKind::NonFinite {
                record,
                value: value.into(),
            }));
        }
        Ok(parsed)
    }

    fn vector(&self, fields: &[String], record: &'static str) -> Result<Vector3<f64>, CubeError> {
        Ok(Vector3::new(
            self.float(&fields[0], record)?,
            self.float(&fields[1], record)?,
            self.float(&fields[2], record)?,
        ))
    }

    fn axis(&mut self, record: &'static str) -> Result<CubeAxis, CubeError> {
        let fields = self.next_fields(record, 4)?;
        let voxel_count = self.int(&fields[0], record)?;
        let step = self.vector(&fields[1..4], record)?;
        Ok(CubeAxis::new(voxel_count, step))
    }

    fn error(&self, kind: CubeFormatErrorKind) -> CubeError {
        CubeError::Format {
            line: self.line_num,
            kind,
        }
    }
}

/// Formats a sample the way C's `%.5e` does: five decimals and an exponent that is
/// signed and at least two digits wide (`1.23450e-03`).
struct Scientific(f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        let formatted = format!("{:.5e}", value);
        match formatted
            .split_once('e')
            .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)))
        {
            Some((mantissa, exp)) => write!(
                f,
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.unsigned_abs()
            ),
            None => f.write_str(&formatted),
        }
    }
}

pub struct CubeFile;

impl VolumetricFile for CubeFile {
    type Metadata = CubeMetadata;
    type Error = CubeError;

    fn read_from(reader: &mut impl BufRead) -> Result<(CubeVolume, Self::Metadata), Self::Error> {
        let mut header = HeaderLines {
            lines: reader.lines(),
            line_num: 0,
        };

        let comments = [
            header.next_line("first comment line")?,
            header.next_line("second comment line")?,
        ];

        let record = "atom count/origin line";
        let fields = header.next_fields(record, 4)?;
        let atom_count = header.int(&fields[0], record)?;
        let atom_count = usize::try_from(atom_count).map_err(|_| {
            header.error(CubeFormatErrorKind::NegativeAtomCount(atom_count))
        })?;
        let origin = Point3::from(header.vector(&fields[1..4], record)?);

        let axes = [
            header.axis("x axis line")?,
            header.axis("y axis line")?,
            header.axis("z axis line")?,
        ];
        let shape = GridShape::from_axes(&axes);
        let expected = shape.checked_len().ok_or_else(|| {
            header.error(CubeFormatErrorKind::GridTooLarge {
                nx: shape.nx,
                ny: shape.ny,
                nz: shape.nz,
            })
        })?;
        debug!(
            atom_count,
            nx = shape.nx,
            ny = shape.ny,
            nz = shape.nz,
            "Parsed cube header"
        );

        let mut atoms = Vec::with_capacity(atom_count.min(MAX_PREALLOC));
        for _ in 0..atom_count {
            let record = "atom line";
            let fields = header.next_fields(record, 5)?;
            let atomic_number = header.float(&fields[0], record)?;
            // Column 1 (nuclear charge) must be numeric but is not kept.
            header.float(&fields[1], record)?;
            let position = Point3::from(header.vector(&fields[2..5], record)?);
            atoms.push(CubeAtom::new(atomic_number, position));
        }

        let HeaderLines {
            lines,
            mut line_num,
        } = header;
        let mut data = Vec::with_capacity(expected.min(MAX_PREALLOC));
        for line in lines {
            line_num += 1;
            let line = line.map_err(|e| line_error(e, line_num, "volumetric data"))?;
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| CubeError::Format {
                    line: line_num,
                    kind: CubeFormatErrorKind::InvalidFloat {
                        record: "volumetric data",
                        value: token.into(),
                    },
                })?;
                data.push(value);
            }
        }
        trace!(values = data.len(), "Read volumetric data block");

        if data.len() != expected {
            return Err(CubeError::DataLength {
                expected,
                found: data.len(),
            });
        }

        let volume = CubeVolume::new(origin, axes, atoms, data)?;
        Ok((volume, CubeMetadata { comments }))
    }

    fn write_to(
        volume: &CubeVolume,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for comment in &metadata.comments {
            writeln!(writer, "{}", comment.replace(['\r', '\n'], " "))?;
        }

        let origin = volume.origin();
        writeln!(
            writer,
            "{:5} {:12.6} {:12.6} {:12.6}",
            volume.atom_count(),
            origin.x,
            origin.y,
            origin.z
        )?;
        for axis in volume.axes() {
            writeln!(
                writer,
                "{:5} {:12.6} {:12.6} {:12.6}",
                axis.voxel_count, axis.step.x, axis.step.y, axis.step.z
            )?;
        }

        // The nuclear-charge column was dropped on read; the atomic number fills both slots.
        for atom in volume.atoms() {
            writeln!(
                writer,
                "{:5} {:12.6} {:12.6} {:12.6} {:12.6}",
                atom.atomic_number as i64,
                atom.atomic_number,
                atom.position.x,
                atom.position.y,
                atom.position.z
            )?;
        }

        // One run per (i, j) column of z values, wrapped every six values.
        let nz = volume.shape().nz;
        if nz > 0 {
            for run in volume.data().chunks(nz) {
                for line in run.chunks(VALUES_PER_LINE) {
                    for value in line {
                        write!(writer, "{} ", Scientific(*value))?;
                    }
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn write_volume_to(volume: &CubeVolume, writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::write_to(volume, &CubeMetadata::default(), writer)
    }
}
