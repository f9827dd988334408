//! Choose the partitioning algorithm family from the requested part count.

use serde::{Deserialize, Serialize};

/// Part counts above this use direct k-way partitioning; recursive bisection
/// degrades as the number of parts grows.
pub const KWAY_THRESHOLD: usize = 8;

/// Algorithm family requested from the engine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PartitionMethod {
    /// Repeated splits into two parts until `k` parts exist.
    RecursiveBisection,
    /// Direct partitioning into `k` parts.
    KWay,
}

/// Index base used by the graph arrays.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Numbering {
    /// Zero-based (C-style) indices.
    #[default]
    C,
    /// One-based (Fortran-style) indices.
    Fortran,
}

/// Options handed to the engine for one invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PartitionOptions {
    pub method: PartitionMethod,
    pub numbering: Numbering,
}

/// Options for partitioning into `n_parts` parts.
///
/// Numbering is always zero-based because the mesh graph is built that way.
pub fn select_strategy(n_parts: usize) -> PartitionOptions {
    let method = if n_parts > KWAY_THRESHOLD {
        PartitionMethod::KWay
    } else {
        PartitionMethod::RecursiveBisection
    };
    log::debug!("{n_parts} parts -> {method:?}");
    PartitionOptions {
        method,
        numbering: Numbering::C,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(select_strategy(2).method, PartitionMethod::RecursiveBisection);
        assert_eq!(select_strategy(8).method, PartitionMethod::RecursiveBisection);
        assert_eq!(select_strategy(9).method, PartitionMethod::KWay);
        assert_eq!(select_strategy(64).numbering, Numbering::C);
    }

    proptest! {
        #[test]
        fn selection_is_a_pure_function_of_k(k in 1usize..10_000) {
            let opts = select_strategy(k);
            prop_assert_eq!(opts, select_strategy(k));
            prop_assert_eq!(opts.numbering, Numbering::C);
            if k <= KWAY_THRESHOLD {
                prop_assert_eq!(opts.method, PartitionMethod::RecursiveBisection);
            } else {
                prop_assert_eq!(opts.method, PartitionMethod::KWay);
            }
        }
    }
}
