//! MeshPartitionError: Unified error type for mesh-partition public APIs
//!
//! Every fallible operation in this crate (graph building, engine calls,
//! attribute writing, pipeline dispatch) reports failures through this type
//! instead of panicking on a violated pre-condition.

use thiserror::Error;

use crate::partition::engine::EngineStatus;

/// Unified error type for mesh-partition operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshPartitionError {
    /// Absent mesh, mis-sized buffers, out-of-range indices or counts that
    /// do not fit the engine's index type.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The partitioning engine reported a failure, or returned a result that
    /// violates its contract.
    #[error("Partitioning failed: engine reported {status} (status code {code})", code = .status.code())]
    PartitioningFailed {
        /// Status reported by the engine.
        status: EngineStatus,
    },
    /// The data object is not one of the supported mesh representations.
    #[error("Unsupported data type: {0}")]
    UnsupportedType(&'static str),
}

impl MeshPartitionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MeshPartitionError::InvalidInput(msg.into())
    }
}

impl From<EngineStatus> for MeshPartitionError {
    fn from(status: EngineStatus) -> Self {
        MeshPartitionError::PartitioningFailed { status }
    }
}
