//! Static reference data.

pub mod coordinates;

pub use coordinates::coordinates_for;
