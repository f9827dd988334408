//! Mesh partitioning: graph building, strategy selection, engine invocation
//! and result writing.
//!
//! [`MeshPartitioner`] chains the four stages for a single mesh:
//!
//! 1. [`mesh_graph::build_mesh_graph`] serializes cell-to-node incidence,
//! 2. [`strategy::select_strategy`] picks recursive bisection or k-way,
//! 3. [`engine::run_engine`] calls the [`PartitionEngine`] and validates its output,
//! 4. [`writer::attach_partition_ids`] stores the cell parts as `PartitionID`.

pub mod engine;
pub mod mesh_graph;
#[cfg(feature = "metis-support")]
pub mod metis_engine;
pub mod strategy;
pub mod writer;

pub use engine::{EngineStatus, NodalPartition, PartitionEngine};
pub use mesh_graph::MeshGraph;
#[cfg(feature = "metis-support")]
pub use metis_engine::MetisEngine;
pub use strategy::{PartitionMethod, PartitionOptions};
pub use writer::PARTITION_ID_ARRAY;

use crate::mesh::MeshConnectivity;
use crate::mesh_error::MeshPartitionError;

/// Integer type of graph indices and part ids.
#[cfg(feature = "metis-support")]
pub type Idx = metis::Idx;
/// Integer type of graph indices and part ids.
#[cfg(not(feature = "metis-support"))]
pub type Idx = i32;

/// Result of partitioning one mesh. Created fresh by every call.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionAssignment {
    /// Part id of every cell, in cell order.
    pub cell_parts: Vec<Idx>,
    /// Part id of every point, in point order.
    pub node_parts: Vec<Idx>,
    /// Objective value reported by the engine (0 when the engine was skipped).
    pub objective: Idx,
    pub n_parts: usize,
    pub options: PartitionOptions,
}

/// Partitions meshes with a given engine.
#[derive(Clone, Debug, Default)]
pub struct MeshPartitioner<E> {
    engine: E,
}

impl<E: PartitionEngine> MeshPartitioner<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Partition `mesh` into `n_parts` parts without modifying it.
    ///
    /// One part, or a mesh without cells, is answered without calling the
    /// engine; zero parts is an error.
    pub fn partition<M>(&self, mesh: &M, n_parts: usize) -> Result<PartitionAssignment, MeshPartitionError>
    where
        M: MeshConnectivity + ?Sized,
    {
        if n_parts == 0 {
            return Err(MeshPartitionError::invalid("number of partitions must be at least 1"));
        }

        let graph = mesh_graph::build_mesh_graph(mesh)?;
        let options = strategy::select_strategy(n_parts);

        if n_parts == 1 || graph.n_cells() == 0 {
            log::debug!(
                "trivial partition ({n_parts} parts, {} cells), engine skipped",
                graph.n_cells()
            );
            return Ok(PartitionAssignment {
                cell_parts: vec![0; graph.n_cells()],
                node_parts: vec![0; graph.n_points],
                objective: 0,
                n_parts,
                options,
            });
        }

        let NodalPartition {
            cell_parts,
            node_parts,
            objective,
        } = engine::run_engine(&self.engine, &graph, n_parts, &options)?;
        log::info!(
            "partitioned {} cells into {n_parts} parts ({:?}), objective {objective}",
            cell_parts.len(),
            options.method
        );
        Ok(PartitionAssignment {
            cell_parts,
            node_parts,
            objective,
            n_parts,
            options,
        })
    }

    /// Partition `mesh` and attach the result as its `PartitionID` cell attribute.
    ///
    /// On error the mesh is left as it was.
    pub fn partition_and_attach<M>(
        &self,
        mesh: &mut M,
        n_parts: usize,
    ) -> Result<PartitionAssignment, MeshPartitionError>
    where
        M: MeshConnectivity + ?Sized,
    {
        let assignment = self.partition(mesh, n_parts)?;
        writer::attach_partition_ids(mesh, &assignment.cell_parts)?;
        Ok(assignment)
    }
}
