//! Structural self-checks for the buffers handed to a partitioning engine.
//!
//! [`MeshGraph`](crate::partition::MeshGraph) validates its offsets and node
//! indices after every build. Debug builds panic on a broken graph; release
//! builds skip the check, and callers may still run
//! [`DebugInvariants::validate_invariants`] to get the first violation as a
//! [`MeshPartitionError`].

use crate::mesh_error::MeshPartitionError;

/// Types whose internal consistency can be checked on demand.
pub trait DebugInvariants {
    /// Panics on a violation in debug builds; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// First violated invariant, as an `InvalidInput` error.
    fn validate_invariants(&self) -> Result<(), MeshPartitionError>;
}

/// Run a `Result`-returning check and panic with `$ctx` in debug builds.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(debug_assertions)]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
