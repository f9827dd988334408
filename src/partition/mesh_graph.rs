//! Build the compressed element-to-node structure handed to a mesh partitioner.
//
// Layout (METIS manual §5.6):
//
// * `element_offsets[i] .. element_offsets[i+1]` = slice of `element_indices`
//   holding the nodes of cell *i*
// * `element_indices`                             = concatenated node ids
//
// Node order inside a cell is the mesh's native local order; cells are
// visited in index order, so rebuilding from the same mesh is reproducible.

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::mesh::MeshConnectivity;
use crate::mesh_error::MeshPartitionError;
use crate::partition::Idx;

/// CSR-style cell-to-node incidence of a mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshGraph {
    /// Offsets into `element_indices`, one per cell plus a trailing total.
    pub element_offsets: Vec<Idx>,
    /// Node ids of every cell, concatenated.
    pub element_indices: Vec<Idx>,
    /// Number of nodes in the source mesh.
    pub n_points: usize,
}

impl MeshGraph {
    /// Number of cells described by the graph.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.element_offsets.len().saturating_sub(1)
    }

    /// Node ids of cell `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> &[Idx] {
        // offsets are validated non-negative when built
        let lo = self.element_offsets[i] as usize;
        let hi = self.element_offsets[i + 1] as usize;
        &self.element_indices[lo..hi]
    }
}

impl DebugInvariants for MeshGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshGraph");
    }

    fn validate_invariants(&self) -> Result<(), MeshPartitionError> {
        let (Some(&first), Some(&last)) =
            (self.element_offsets.first(), self.element_offsets.last())
        else {
            return Err(MeshPartitionError::invalid("element offsets are empty"));
        };
        if first != 0 {
            return Err(MeshPartitionError::invalid(format!(
                "element offsets start at {first}, expected 0"
            )));
        }
        if let Some((i, (a, b))) = self
            .element_offsets
            .iter()
            .tuple_windows()
            .find_position(|(a, b)| b < a)
        {
            return Err(MeshPartitionError::invalid(format!(
                "element offsets decrease at cell {i} ({a} > {b})"
            )));
        }
        if usize::try_from(last).ok() != Some(self.element_indices.len()) {
            return Err(MeshPartitionError::invalid(format!(
                "last element offset {last} != {} indices",
                self.element_indices.len()
            )));
        }
        if let Some(&bad) = self
            .element_indices
            .iter()
            .find(|&&p| usize::try_from(p).map_or(true, |p| p >= self.n_points))
        {
            return Err(MeshPartitionError::invalid(format!(
                "node index {bad} outside [0, {})",
                self.n_points
            )));
        }
        Ok(())
    }
}

/// Build the graph of `mesh`.
pub fn build_mesh_graph<M>(mesh: &M) -> Result<MeshGraph, MeshPartitionError>
where
    M: MeshConnectivity + ?Sized,
{
    let mut element_offsets = vec![0; mesh.n_cells() + 1];
    let mut element_indices = Vec::new();
    fill_mesh_graph(mesh, &mut element_offsets, &mut element_indices)?;

    let graph = MeshGraph {
        element_offsets,
        element_indices,
        n_points: mesh.n_points(),
    };
    graph.debug_assert_invariants();
    log::debug!(
        "mesh graph: {} cells, {} nodes, {} incidences",
        graph.n_cells(),
        graph.n_points,
        graph.element_indices.len()
    );
    Ok(graph)
}

/// Fill caller-owned buffers with the graph of `mesh`.
///
/// `element_offsets` must already hold exactly `n_cells + 1` slots;
/// `element_indices` is cleared and refilled.
pub fn fill_mesh_graph<M>(
    mesh: &M,
    element_offsets: &mut [Idx],
    element_indices: &mut Vec<Idx>,
) -> Result<(), MeshPartitionError>
where
    M: MeshConnectivity + ?Sized,
{
    let n_cells = mesh.n_cells();
    let n_points = mesh.n_points();
    if element_offsets.len() != n_cells + 1 {
        return Err(MeshPartitionError::invalid(format!(
            "element offsets sized {}, mesh needs {}",
            element_offsets.len(),
            n_cells + 1
        )));
    }
    // every node id must fit the engine index type
    to_idx(n_points, "point count")?;

    element_indices.clear();
    element_offsets[0] = 0;
    let mut cell_points = Vec::new();
    for cell in 0..n_cells {
        mesh.cell_points(cell, &mut cell_points);
        for &p in &cell_points {
            if p >= n_points {
                return Err(MeshPartitionError::invalid(format!(
                    "cell {cell} references point {p}, mesh has {n_points} points"
                )));
            }
            element_indices.push(p as Idx);
        }
        element_offsets[cell + 1] = to_idx(element_indices.len(), "incidence count")?;
    }
    Ok(())
}

pub(crate) fn to_idx(n: usize, what: &str) -> Result<Idx, MeshPartitionError> {
    Idx::try_from(n).map_err(|_| {
        MeshPartitionError::invalid(format!("{what} {n} exceeds the partitioner index range"))
    })
}
