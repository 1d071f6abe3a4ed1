//! # cubeio
//!
//! Reading and writing of Gaussian-style CUBE files: a molecular geometry paired with a
//! scalar field (electron density, transition density, ...) sampled on a regular 3-D grid.
//!
//! ## Layout
//!
//! Everything lives under [`core`]:
//!
//! - **Data model** ([`core::models`]) - `CubeVolume`, its axes and atoms.
//! - **Grid** ([`core::grid`]) - the flat/3-D index mapping shared by reader, writer and
//!   the grid-point generator.
//! - **File I/O** ([`core::io`]) - the CUBE parser and writer, plus loaders for plain
//!   geometry and charge tables.
//! - **Selections** ([`core::selection`]) - compact `3-7,9` index lists.
//!
//! Volumetric data is always held as one flat buffer in row-major order (`z` fastest);
//! there is no notion of a "current shape".

pub mod core;
