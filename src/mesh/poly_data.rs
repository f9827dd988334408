//! Polygonal surface: vertices, lines, polygons and triangle strips.

use std::sync::Arc;

use crate::data::cell_data::CellData;
use crate::mesh::MeshConnectivity;
use crate::mesh::cell_array::CellArray;
use crate::mesh_error::MeshPartitionError;

/// Which of the four poly-data cell arrays a cell lives in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolyCellKind {
    Vert,
    Line,
    Poly,
    Strip,
}

/// Polygonal data set.
///
/// Global cell ids run through the verts, then lines, then polys, then
/// strips, matching the order in which attribute arrays are laid out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolyData {
    points: Arc<Vec<[f64; 3]>>,
    verts: Arc<CellArray>,
    lines: Arc<CellArray>,
    polys: Arc<CellArray>,
    strips: Arc<CellArray>,
    cell_data: CellData,
}

impl PolyData {
    /// Creates a surface with the given points and no cells.
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self {
            points: Arc::new(points),
            ..Self::default()
        }
    }

    /// Appends a cell to the array selected by `kind` and returns the index
    /// within that array.
    pub fn insert_cell(
        &mut self,
        kind: PolyCellKind,
        points: &[usize],
    ) -> Result<usize, MeshPartitionError> {
        let min = match kind {
            PolyCellKind::Vert => 1,
            PolyCellKind::Line => 2,
            PolyCellKind::Poly | PolyCellKind::Strip => 3,
        };
        if points.len() < min {
            return Err(MeshPartitionError::invalid(format!(
                "{kind:?} cell needs at least {min} points, got {}",
                points.len()
            )));
        }
        let n_points = self.points.len();
        if let Some(&bad) = points.iter().find(|&&p| p >= n_points) {
            return Err(MeshPartitionError::invalid(format!(
                "point id {bad} out of range (surface has {n_points} points)"
            )));
        }
        let array = match kind {
            PolyCellKind::Vert => &mut self.verts,
            PolyCellKind::Line => &mut self.lines,
            PolyCellKind::Poly => &mut self.polys,
            PolyCellKind::Strip => &mut self.strips,
        };
        Ok(Arc::make_mut(array).push(points))
    }

    /// Shorthand for [`PolyCellKind::Poly`] cells.
    pub fn insert_polygon(&mut self, points: &[usize]) -> Result<usize, MeshPartitionError> {
        self.insert_cell(PolyCellKind::Poly, points)
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Maps a global cell id to its array and local index.
    pub fn locate(&self, cell: usize) -> Option<(PolyCellKind, usize)> {
        let mut local = cell;
        for (kind, array) in self.arrays() {
            if local < array.len() {
                return Some((kind, local));
            }
            local -= array.len();
        }
        None
    }

    /// Whether `other` shares this surface's geometry and cell buffers.
    pub fn shares_structure_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
            && Arc::ptr_eq(&self.verts, &other.verts)
            && Arc::ptr_eq(&self.lines, &other.lines)
            && Arc::ptr_eq(&self.polys, &other.polys)
            && Arc::ptr_eq(&self.strips, &other.strips)
    }

    fn arrays(&self) -> [(PolyCellKind, &CellArray); 4] {
        [
            (PolyCellKind::Vert, self.verts.as_ref()),
            (PolyCellKind::Line, self.lines.as_ref()),
            (PolyCellKind::Poly, self.polys.as_ref()),
            (PolyCellKind::Strip, self.strips.as_ref()),
        ]
    }
}

impl MeshConnectivity for PolyData {
    fn n_cells(&self) -> usize {
        self.verts.len() + self.lines.len() + self.polys.len() + self.strips.len()
    }

    fn n_points(&self) -> usize {
        self.points.len()
    }

    fn cell_points(&self, cell: usize, out: &mut Vec<usize>) {
        out.clear();
        let (kind, local) = self
            .locate(cell)
            .unwrap_or_else(|| panic!("cell {cell} out of range ({} cells)", self.n_cells()));
        let array = self.arrays()[kind as usize].1;
        out.extend_from_slice(array.cell(local));
    }

    fn cell_data(&self) -> &CellData {
        &self.cell_data
    }

    fn cell_data_mut(&mut self) -> &mut CellData {
        &mut self.cell_data
    }
}
