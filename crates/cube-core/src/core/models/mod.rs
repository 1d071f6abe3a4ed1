//! In-memory representation of volumetric CUBE data.
//!
//! [`volume::CubeVolume`] owns the header (origin, axes, atoms), the flat sample buffer
//! and the quantities derived from them at construction time.

pub mod volume;
