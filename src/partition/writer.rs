//! Store a per-cell partition vector on the mesh as an integer attribute.

use crate::data::cell_data::DataArray;
use crate::mesh::MeshConnectivity;
use crate::mesh_error::MeshPartitionError;
use crate::partition::Idx;

/// Name of the cell attribute holding each cell's part id.
pub const PARTITION_ID_ARRAY: &str = "PartitionID";

/// Attach `cell_parts` to `mesh` as the [`PARTITION_ID_ARRAY`] cell attribute.
///
/// An existing array of that name is replaced. Nothing is written unless
/// `cell_parts` has exactly one entry per cell of `mesh`.
pub fn attach_partition_ids<M>(mesh: &mut M, cell_parts: &[Idx]) -> Result<(), MeshPartitionError>
where
    M: MeshConnectivity + ?Sized,
{
    let n_cells = mesh.n_cells();
    if cell_parts.len() != n_cells {
        return Err(MeshPartitionError::invalid(format!(
            "partition vector has {} entries, mesh has {n_cells} cells",
            cell_parts.len()
        )));
    }
    let values = cell_parts
        .iter()
        .map(|&p| {
            i32::try_from(p).map_err(|_| {
                MeshPartitionError::invalid(format!("part id {p} does not fit a 32-bit attribute"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if mesh
        .cell_data_mut()
        .add_array(PARTITION_ID_ARRAY, DataArray::Int(values))
        .is_some()
    {
        log::debug!("replaced existing {PARTITION_ID_ARRAY} array");
    }
    Ok(())
}
