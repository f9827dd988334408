//! Seam between the mesh graph and an external mesh-partitioning service.
//!
//! [`PartitionEngine`] is the black-box contract: given the element-to-node
//! structure, a part count and the selected options, fill one part id per
//! cell and per node and return the objective value (edge-cut or
//! communication volume). [`run_engine`] owns the result buffers, maps engine
//! failures to [`MeshPartitionError::PartitioningFailed`], and refuses any
//! output that is not a complete, in-range assignment.

use std::fmt;

use crate::mesh_error::MeshPartitionError;
use crate::partition::Idx;
use crate::partition::mesh_graph::{MeshGraph, to_idx};
use crate::partition::strategy::PartitionOptions;

/// Status reported by a partitioning engine, with METIS' numeric codes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EngineStatus {
    Ok,
    /// The engine rejected its input as malformed.
    InputError,
    /// The engine could not allocate the memory it needed.
    MemoryError,
    /// Any other internal failure.
    Error,
}

impl EngineStatus {
    /// Numeric status code.
    pub fn code(self) -> i32 {
        match self {
            EngineStatus::Ok => 1,
            EngineStatus::InputError => -2,
            EngineStatus::MemoryError => -3,
            EngineStatus::Error => -4,
        }
    }

    /// Inverse of [`EngineStatus::code`]; unknown codes map to `Error`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => EngineStatus::Ok,
            -2 => EngineStatus::InputError,
            -3 => EngineStatus::MemoryError,
            _ => EngineStatus::Error,
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EngineStatus::Ok => "success",
            EngineStatus::InputError => "malformed input",
            EngineStatus::MemoryError => "out of memory",
            EngineStatus::Error => "internal error",
        })
    }
}

/// External nodal mesh partitioner.
///
/// Vertex weights, vertex sizes and target part fractions are never supplied:
/// every cell weighs the same and parts are meant to be equal.
pub trait PartitionEngine {
    /// Partition `graph` into `n_parts` parts.
    ///
    /// `cell_parts` has one slot per cell and `node_parts` one per node of
    /// the source mesh. On success returns the objective value.
    fn part_mesh_nodal(
        &self,
        graph: &MeshGraph,
        n_parts: Idx,
        options: &PartitionOptions,
        cell_parts: &mut [Idx],
        node_parts: &mut [Idx],
    ) -> Result<Idx, EngineStatus>;
}

impl<E: PartitionEngine + ?Sized> PartitionEngine for &E {
    fn part_mesh_nodal(
        &self,
        graph: &MeshGraph,
        n_parts: Idx,
        options: &PartitionOptions,
        cell_parts: &mut [Idx],
        node_parts: &mut [Idx],
    ) -> Result<Idx, EngineStatus> {
        (**self).part_mesh_nodal(graph, n_parts, options, cell_parts, node_parts)
    }
}

/// Per-cell and per-node part ids produced by one engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodalPartition {
    pub cell_parts: Vec<Idx>,
    pub node_parts: Vec<Idx>,
    /// Edge-cut or communication volume, as reported by the engine.
    pub objective: Idx,
}

// Slots the engine never wrote keep this value and fail validation.
const UNASSIGNED: Idx = -1;

/// Invoke `engine` on fresh buffers and validate what it returns.
pub fn run_engine<E>(
    engine: &E,
    graph: &MeshGraph,
    n_parts: usize,
    options: &PartitionOptions,
) -> Result<NodalPartition, MeshPartitionError>
where
    E: PartitionEngine + ?Sized,
{
    let nparts = to_idx(n_parts, "part count")?;
    let mut cell_parts = vec![UNASSIGNED; graph.n_cells()];
    let mut node_parts = vec![UNASSIGNED; graph.n_points];

    let objective = engine
        .part_mesh_nodal(graph, nparts, options, &mut cell_parts, &mut node_parts)
        .map_err(|status| {
            log::error!("partitioning engine failed: {status} (code {})", status.code());
            MeshPartitionError::from(status)
        })?;

    check_parts("cell", &cell_parts, graph.n_cells(), nparts)?;
    check_parts("node", &node_parts, graph.n_points, nparts)?;

    Ok(NodalPartition {
        cell_parts,
        node_parts,
        objective,
    })
}

fn check_parts(what: &str, parts: &[Idx], expected_len: usize, nparts: Idx) -> Result<(), MeshPartitionError> {
    if parts.len() != expected_len {
        log::error!(
            "engine returned {} {what} parts, expected {expected_len}",
            parts.len()
        );
        return Err(EngineStatus::Error.into());
    }
    if let Some((i, &p)) = parts.iter().enumerate().find(|&(_, &p)| p < 0 || p >= nparts) {
        log::error!("engine assigned {what} {i} to part {p}, outside [0, {nparts})");
        return Err(EngineStatus::Error.into());
    }
    Ok(())
}
