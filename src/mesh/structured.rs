//! Curvilinear grid with implicit lattice connectivity.

use std::sync::Arc;

use crate::data::cell_data::CellData;
use crate::mesh::MeshConnectivity;
use crate::mesh_error::MeshPartitionError;
use crate::topology::cell_type::CellType;

// Corner offsets per varying axis, in VTK's local node order.
const LINE: [[usize; 3]; 2] = [[0, 0, 0], [1, 0, 0]];
const QUAD: [[usize; 3]; 4] = [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]];
const HEX: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Structured grid of `nx * ny * nz` points, point index `i + nx * (j + ny * k)`.
///
/// Cells are implied by the lattice: hexahedra when all three axes have more
/// than one point, quads for two such axes, segments for one, and a single
/// vertex cell for a one-point grid.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredGrid {
    dims: [usize; 3],
    points: Arc<Vec<[f64; 3]>>,
    cell_data: CellData,
}

impl StructuredGrid {
    /// Creates a grid over `points`, which must hold exactly
    /// `dims[0] * dims[1] * dims[2]` entries.
    pub fn new(dims: [usize; 3], points: Vec<[f64; 3]>) -> Result<Self, MeshPartitionError> {
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| MeshPartitionError::invalid(format!("dimensions {dims:?} overflow")))?;
        if points.len() != expected {
            return Err(MeshPartitionError::invalid(format!(
                "dimensions {dims:?} need {expected} points, got {}",
                points.len()
            )));
        }
        Ok(Self {
            dims,
            points: Arc::new(points),
            cell_data: CellData::default(),
        })
    }

    /// Unit-spaced lattice with the given dimensions.
    pub fn uniform(dims: [usize; 3]) -> Self {
        let mut points = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        for k in 0..dims[2] {
            for j in 0..dims[1] {
                for i in 0..dims[0] {
                    points.push([i as f64, j as f64, k as f64]);
                }
            }
        }
        Self {
            dims,
            points: Arc::new(points),
            cell_data: CellData::default(),
        }
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dims
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Shape shared by every cell of this grid.
    pub fn cell_type(&self) -> CellType {
        match self.varying_axes().1 {
            0 => CellType::Vertex,
            1 => CellType::Segment,
            2 => CellType::Quadrilateral,
            _ => CellType::Hexahedron,
        }
    }

    pub fn shares_structure_with(&self, other: &Self) -> bool {
        self.dims == other.dims && Arc::ptr_eq(&self.points, &other.points)
    }

    fn varying_axes(&self) -> ([usize; 3], usize) {
        let mut axes = [0; 3];
        let mut n = 0;
        for (axis, &d) in self.dims.iter().enumerate() {
            if d > 1 {
                axes[n] = axis;
                n += 1;
            }
        }
        (axes, n)
    }

    #[inline]
    fn point_index(&self, ijk: [usize; 3]) -> usize {
        ijk[0] + self.dims[0] * (ijk[1] + self.dims[1] * ijk[2])
    }
}

impl MeshConnectivity for StructuredGrid {
    fn n_cells(&self) -> usize {
        if self.dims.contains(&0) {
            return 0;
        }
        let (axes, n) = self.varying_axes();
        axes[..n].iter().map(|&a| self.dims[a] - 1).product()
    }

    fn n_points(&self) -> usize {
        self.points.len()
    }

    fn cell_points(&self, cell: usize, out: &mut Vec<usize>) {
        out.clear();
        assert!(
            cell < self.n_cells(),
            "cell {cell} out of range ({} cells)",
            self.n_cells()
        );
        let (axes, n) = self.varying_axes();

        // cell lattice coordinates, fastest axis first
        let mut base = [0usize; 3];
        let mut rest = cell;
        for &axis in &axes[..n] {
            let cells_along = self.dims[axis] - 1;
            base[axis] = rest % cells_along;
            rest /= cells_along;
        }

        let corners: &[[usize; 3]] = match n {
            0 => &[[0, 0, 0]],
            1 => &LINE,
            2 => &QUAD,
            _ => &HEX,
        };
        for corner in corners {
            let mut ijk = base;
            for (slot, &axis) in axes[..n].iter().enumerate() {
                ijk[axis] += corner[slot];
            }
            out.push(self.point_index(ijk));
        }
    }

    fn cell_data(&self) -> &CellData {
        &self.cell_data
    }

    fn cell_data_mut(&mut self) -> &mut CellData {
        &mut self.cell_data
    }
}
