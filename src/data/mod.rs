//! Data module: named per-cell attribute arrays.

pub mod cell_data;

pub use cell_data::{CellData, DataArray};
