//! METIS-backed [`PartitionEngine`](crate::partition::engine::PartitionEngine).
//!
//! Calls METIS' nodal mesh partitioner (`METIS_PartMeshNodal`) through the
//! `metis` crate, with the algorithm family chosen by
//! [`select_strategy`](crate::partition::strategy::select_strategy) and no
//! weights or target fractions.
//!
//! Cells without points are never shown to METIS (it marks them `-2`); they
//! are placed in part 0, as are nodes no cell references.

use itertools::Itertools;

use crate::partition::Idx;
use crate::partition::engine::{EngineStatus, PartitionEngine};
use crate::partition::mesh_graph::MeshGraph;
use crate::partition::strategy::{Numbering, PartitionMethod, PartitionOptions};

/// Zero-sized handle to the METIS library.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetisEngine;

impl From<metis::Error> for EngineStatus {
    fn from(e: metis::Error) -> Self {
        match e {
            metis::Error::Input => EngineStatus::InputError,
            metis::Error::Memory => EngineStatus::MemoryError,
            _ => EngineStatus::Error,
        }
    }
}

impl PartitionEngine for MetisEngine {
    fn part_mesh_nodal(
        &self,
        graph: &MeshGraph,
        n_parts: Idx,
        options: &PartitionOptions,
        cell_parts: &mut [Idx],
        node_parts: &mut [Idx],
    ) -> Result<Idx, EngineStatus> {
        // the metis crate always runs METIS with C numbering
        if options.numbering != Numbering::C {
            return Err(EngineStatus::InputError);
        }
        if cell_parts.len() != graph.n_cells() {
            return Err(EngineStatus::InputError);
        }

        // METIS sizes its node vector from the largest referenced node id.
        let used_nodes = graph
            .element_indices
            .iter()
            .copied()
            .max()
            .map_or(0, |m| m as usize + 1);
        if used_nodes > node_parts.len() {
            return Err(EngineStatus::InputError);
        }
        let (used, unused) = node_parts.split_at_mut(used_nodes);
        unused.fill(0);

        if used_nodes == 0 {
            log::debug!("no cell references a node, all {} cells go to part 0", graph.n_cells());
            cell_parts.fill(0);
            return Ok(0);
        }

        let ptype = match options.method {
            PartitionMethod::RecursiveBisection => metis::option::PType::Rb,
            PartitionMethod::KWay => metis::option::PType::Kway,
        };

        let filled: Vec<usize> = (0..graph.n_cells())
            .filter(|&c| !graph.cell(c).is_empty())
            .collect();
        if filled.len() == graph.n_cells() {
            return part_nodal(
                &graph.element_offsets,
                &graph.element_indices,
                n_parts,
                ptype,
                cell_parts,
                used,
            );
        }

        // Empty cells add nothing to the indices, so dropping their repeated
        // offsets leaves a valid graph of the remaining cells.
        let offsets: Vec<Idx> = graph.element_offsets.iter().copied().dedup().collect();
        let mut filled_parts = vec![0; filled.len()];
        let objective = part_nodal(
            &offsets,
            &graph.element_indices,
            n_parts,
            ptype,
            &mut filled_parts,
            used,
        )?;
        cell_parts.fill(0);
        for (&c, &p) in filled.iter().zip(&filled_parts) {
            cell_parts[c] = p;
        }
        log::debug!("{} empty cells placed in part 0", graph.n_cells() - filled.len());
        Ok(objective)
    }
}

fn part_nodal(
    offsets: &[Idx],
    indices: &[Idx],
    n_parts: Idx,
    ptype: metis::option::PType,
    cell_parts: &mut [Idx],
    node_parts: &mut [Idx],
) -> Result<Idx, EngineStatus> {
    let mesh = metis::Mesh::new(n_parts, offsets, indices).map_err(|e| {
        log::error!("METIS rejected the mesh graph: {e:?}");
        EngineStatus::InputError
    })?;
    Ok(mesh.set_option(ptype).part_nodal(cell_parts, node_parts)?)
}
