//! Mesh containers and the connectivity interface the partitioner reads.
//!
//! Every representation that can be partitioned implements
//! [`MeshConnectivity`]: cell count, point count, the ordered points of a
//! cell, and access to the cell-attribute collection. [`DataObject`] is the
//! closed set of objects that can travel through a pipeline; only some of its
//! variants are meshes.

pub mod cell_array;
pub mod poly_data;
pub mod structured;
pub mod unstructured;

pub use cell_array::CellArray;
pub use poly_data::{PolyCellKind, PolyData};
pub use structured::StructuredGrid;
pub use unstructured::UnstructuredGrid;

use crate::data::cell_data::CellData;

/// Read access to cell-to-point incidence plus the cell-attribute collection.
pub trait MeshConnectivity {
    /// Number of cells.
    fn n_cells(&self) -> usize;

    /// Number of points.
    fn n_points(&self) -> usize;

    /// Clears `out` and fills it with the points of `cell`, in the
    /// representation's native local order.
    ///
    /// # Panics
    /// If `cell >= self.n_cells()`.
    fn cell_points(&self, cell: usize, out: &mut Vec<usize>);

    /// Named per-cell attributes.
    fn cell_data(&self) -> &CellData;

    /// Mutable access to the per-cell attributes.
    fn cell_data_mut(&mut self) -> &mut CellData;
}

/// Column-oriented table. Carries data but no cells or points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Columns keyed by name, one value per row.
    pub columns: CellData,
}

/// Any object that can be handed to, or produced by, a pipeline stage.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DataObject {
    /// Output slot that has not been populated yet.
    #[default]
    Empty,
    UnstructuredGrid(UnstructuredGrid),
    PolyData(PolyData),
    StructuredGrid(StructuredGrid),
    Table(Table),
}

impl DataObject {
    /// Copy that shares geometry, connectivity and attribute buffers with
    /// `self`. Attributes added to the copy afterwards stay local to it.
    pub fn shallow_copy(&self) -> DataObject {
        self.clone()
    }

    /// Name of the concrete representation.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataObject::Empty => "Empty",
            DataObject::UnstructuredGrid(_) => "UnstructuredGrid",
            DataObject::PolyData(_) => "PolyData",
            DataObject::StructuredGrid(_) => "StructuredGrid",
            DataObject::Table(_) => "Table",
        }
    }

    /// The mesh view of this object, if it has cells and points.
    pub fn as_mesh(&self) -> Option<&dyn MeshConnectivity> {
        match self {
            DataObject::UnstructuredGrid(g) => Some(g),
            DataObject::PolyData(p) => Some(p),
            DataObject::StructuredGrid(s) => Some(s),
            DataObject::Empty | DataObject::Table(_) => None,
        }
    }

    /// Cell attributes of a mesh object.
    pub fn cell_data(&self) -> Option<&CellData> {
        self.as_mesh().map(|m| m.cell_data())
    }
}

impl From<UnstructuredGrid> for DataObject {
    fn from(g: UnstructuredGrid) -> Self {
        DataObject::UnstructuredGrid(g)
    }
}

impl From<PolyData> for DataObject {
    fn from(p: PolyData) -> Self {
        DataObject::PolyData(p)
    }
}

impl From<StructuredGrid> for DataObject {
    fn from(s: StructuredGrid) -> Self {
        DataObject::StructuredGrid(s)
    }
}

impl From<Table> for DataObject {
    fn from(t: Table) -> Self {
        DataObject::Table(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cell_data::DataArray;

    #[test]
    fn dispatch_exposes_only_meshes() {
        let grid: DataObject = UnstructuredGrid::new(vec![[0.0; 3]; 2]).into();
        let table: DataObject = Table::default().into();
        assert_eq!(grid.as_mesh().map(|m| m.n_points()), Some(2));
        assert!(table.as_mesh().is_none());
        assert!(DataObject::Empty.as_mesh().is_none());
        assert_eq!(table.type_name(), "Table");
    }

    #[test]
    fn shallow_copy_shares_buffers() {
        let mut pd = PolyData::new(vec![[0.0; 3]; 3]);
        pd.insert_polygon(&[0, 1, 2]).unwrap();
        pd.cell_data_mut().add_array("Area", DataArray::Float(vec![0.5]));
        let obj = DataObject::from(pd);
        let copy = obj.shallow_copy();
        match (&obj, &copy) {
            (DataObject::PolyData(a), DataObject::PolyData(b)) => {
                assert!(a.shares_structure_with(b));
                assert!(std::sync::Arc::ptr_eq(
                    a.cell_data().get_shared("Area").unwrap(),
                    b.cell_data().get_shared("Area").unwrap()
                ));
            }
            _ => panic!("copy changed representation"),
        }
        assert_eq!(obj, copy);
    }
}
