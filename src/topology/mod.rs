//! Cell shapes understood by the mesh containers.

pub mod cell_type;

pub use cell_type::CellType;
