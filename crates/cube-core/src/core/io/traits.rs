use super::files::{FileNotFound, require_file};
use crate::core::models::volume::CubeVolume;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing volumetric file formats.
///
/// Implementors provide format-specific parsing and serialization over buffered
/// readers and writers; the path-based methods wrap them with file handling and the
/// existence check.
pub trait VolumetricFile {
    /// Format-specific data that is not part of the volume itself (comments, banners).
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error> + From<FileNotFound>;

    /// Reads a volume and its metadata from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<(CubeVolume, Self::Metadata), Self::Error>;

    /// Writes a volume with the given metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_to(
        volume: &CubeVolume,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a volume with the format's default metadata.
    fn write_volume_to(volume: &CubeVolume, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a volume from a file path.
    ///
    /// # Errors
    ///
    /// Fails with the [`FileNotFound`] variant of `Self::Error` before opening anything
    /// if `path` is not an existing regular file; otherwise as [`read_from`](Self::read_from).
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(CubeVolume, Self::Metadata), Self::Error> {
        require_file(&path)?;
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a volume and metadata to a file path, creating or truncating it.
    fn write_to_path<P: AsRef<Path>>(
        volume: &CubeVolume,
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(volume, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes a volume with default metadata to a file path.
    fn write_volume_to_path<P: AsRef<Path>>(volume: &CubeVolume, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_volume_to(volume, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
