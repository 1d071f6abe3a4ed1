//! Provides input/output functionality for volumetric and tabular chemistry files.
//!
//! The CUBE format is exposed through the [`traits::VolumetricFile`] trait; the simpler
//! whitespace tables (geometries, charges) are plain loader functions. Every path-based
//! entry point checks [`files::require_file`] before opening anything.

pub mod charges;
pub mod cube;
pub mod files;
pub mod geometry;
pub mod table;
pub mod traits;
