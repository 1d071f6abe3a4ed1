pub mod charges;
pub mod convert;
pub mod geometry;
pub mod info;
pub mod select;
