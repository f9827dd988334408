//! Explicit collection of typed cells over a shared point set.

use std::sync::Arc;

use crate::data::cell_data::CellData;
use crate::mesh::MeshConnectivity;
use crate::mesh::cell_array::CellArray;
use crate::mesh_error::MeshPartitionError;
use crate::topology::cell_type::CellType;

/// Unstructured grid: arbitrary cells, each an ordered list of point ids.
///
/// Geometry and connectivity sit behind `Arc`, so `clone` is a shallow copy
/// that shares them with the source. Mutating either copy detaches it first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnstructuredGrid {
    points: Arc<Vec<[f64; 3]>>,
    cells: Arc<CellArray>,
    cell_types: Arc<Vec<CellType>>,
    cell_data: CellData,
}

impl UnstructuredGrid {
    /// Creates a grid with the given points and no cells.
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self {
            points: Arc::new(points),
            ..Self::default()
        }
    }

    /// Creates a grid from points and `(type, points)` cell descriptions.
    pub fn from_cells<I, P>(points: Vec<[f64; 3]>, cells: I) -> Result<Self, MeshPartitionError>
    where
        I: IntoIterator<Item = (CellType, P)>,
        P: AsRef<[usize]>,
    {
        let mut grid = Self::new(points);
        for (ct, pts) in cells {
            grid.insert_next_cell(ct, pts.as_ref())?;
        }
        Ok(grid)
    }

    /// Appends a cell and returns its index.
    ///
    /// The point count must suit `cell_type` and every id must address an
    /// existing point.
    pub fn insert_next_cell(
        &mut self,
        cell_type: CellType,
        points: &[usize],
    ) -> Result<usize, MeshPartitionError> {
        if !cell_type.accepts_point_count(points.len()) {
            return Err(MeshPartitionError::invalid(format!(
                "{cell_type:?} cannot have {} points",
                points.len()
            )));
        }
        let n_points = self.points.len();
        if let Some(&bad) = points.iter().find(|&&p| p >= n_points) {
            return Err(MeshPartitionError::invalid(format!(
                "point id {bad} out of range (grid has {n_points} points)"
            )));
        }
        Arc::make_mut(&mut self.cell_types).push(cell_type);
        Ok(Arc::make_mut(&mut self.cells).push(points))
    }

    /// Point coordinates.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Type of cell `i`.
    pub fn cell_type(&self, i: usize) -> CellType {
        self.cell_types[i]
    }

    /// Points of cell `i` as a borrowed slice.
    pub fn cell(&self, i: usize) -> &[usize] {
        self.cells.cell(i)
    }

    /// Whether `other` shares this grid's geometry and connectivity buffers.
    pub fn shares_structure_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points) && Arc::ptr_eq(&self.cells, &other.cells)
    }
}

impl MeshConnectivity for UnstructuredGrid {
    fn n_cells(&self) -> usize {
        self.cells.len()
    }

    fn n_points(&self) -> usize {
        self.points.len()
    }

    fn cell_points(&self, cell: usize, out: &mut Vec<usize>) {
        out.clear();
        out.extend_from_slice(self.cells.cell(cell));
    }

    fn cell_data(&self) -> &CellData {
        &self.cell_data
    }

    fn cell_data_mut(&mut self) -> &mut CellData {
        &mut self.cell_data
    }
}
