#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-partition
//!
//! mesh-partition splits an unstructured mesh into balanced sub-domains and
//! records the result on the mesh as an integer cell attribute named
//! `PartitionID`.
//!
//! ## Features
//! - Mesh containers with shared, copy-on-write buffers: unstructured grids,
//!   polygonal data and implicit structured grids
//! - Compressed element-to-node graph construction for nodal partitioners
//! - Automatic choice between recursive bisection and k-way partitioning
//! - A pluggable [`PartitionEngine`](partition::PartitionEngine) seam, with a
//!   METIS backend behind the `metis-support` feature
//! - A pipeline stage, [`MeshPartitionFilter`](pipeline::MeshPartitionFilter),
//!   that never mutates its input
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mesh-partition = { version = "0.1", features = ["metis-support"] }
//! ```
//!
//! Without `metis-support` the crate builds without any C dependency; bring
//! your own engine by implementing [`PartitionEngine`](partition::PartitionEngine).
//!
//! ## Logging
//! Diagnostics go through the [`log`] facade. Engine failures are reported at
//! `error`, unsupported pipeline inputs at `warn`, completed partitions at
//! `info`, and graph sizes at `debug`.

pub mod data;
pub mod debug_invariants;
pub mod mesh;
pub mod mesh_error;
pub mod partition;
pub mod pipeline;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::cell_data::{CellData, DataArray};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh::{
        DataObject, MeshConnectivity, PolyCellKind, PolyData, StructuredGrid, Table,
        UnstructuredGrid,
    };
    pub use crate::mesh_error::MeshPartitionError;
    #[cfg(feature = "metis-support")]
    pub use crate::partition::MetisEngine;
    pub use crate::partition::{
        EngineStatus, Idx, MeshGraph, MeshPartitioner, PARTITION_ID_ARRAY, PartitionAssignment,
        PartitionEngine, PartitionMethod, PartitionOptions,
    };
    pub use crate::pipeline::{Algorithm, MeshPartitionFilter, PartitionFilterConfig};
    pub use crate::topology::cell_type::CellType;
}
