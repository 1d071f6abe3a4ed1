//! # Core Module
//!
//! The building blocks of the library: unit constants, the element table, the CUBE data
//! model, grid index arithmetic, file I/O and selection-list expansion.
//!
//! - **Units** ([`units`]) - atomic unit conversion factors
//! - **Elements** ([`elements`]) - symbol to atomic number lookup
//! - **Grid** ([`grid`]) - `GridShape`, grid-point generation and spherical masks
//! - **Models** ([`models`]) - `CubeVolume` and friends
//! - **File I/O** ([`io`]) - CUBE, geometry and charge files
//! - **Selections** ([`selection`]) - compact index-range notation

pub mod elements;
pub mod grid;
pub mod io;
pub mod models;
pub mod selection;
pub mod units;
