//! Flat cell-to-point storage shared by the explicit mesh containers.

use crate::mesh_error::MeshPartitionError;

/// Cells stored as `offsets` into a flat `connectivity` array.
///
/// The points of cell `i` are `connectivity[offsets[i]..offsets[i + 1]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellArray {
    offsets: Vec<usize>,
    connectivity: Vec<usize>,
}

impl Default for CellArray {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Vec::new(),
        }
    }
}

impl CellArray {
    /// Creates an empty cell array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cell array from raw offsets and connectivity.
    ///
    /// `offsets` must start at zero, be non-decreasing and end at
    /// `connectivity.len()`.
    pub fn from_raw(offsets: Vec<usize>, connectivity: Vec<usize>) -> Result<Self, MeshPartitionError> {
        match (offsets.first(), offsets.last()) {
            (Some(0), Some(&last)) if last == connectivity.len() => {}
            _ => {
                return Err(MeshPartitionError::invalid(format!(
                    "cell offsets must start at 0 and end at {}",
                    connectivity.len()
                )));
            }
        }
        if offsets.windows(2).any(|w| w[1] < w[0]) {
            return Err(MeshPartitionError::invalid("cell offsets must be non-decreasing"));
        }
        Ok(Self {
            offsets,
            connectivity,
        })
    }

    /// Appends a cell and returns its index within this array.
    pub fn push(&mut self, points: &[usize]) -> usize {
        self.connectivity.extend_from_slice(points);
        self.offsets.push(self.connectivity.len());
        self.offsets.len() - 2
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points of cell `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> &[usize] {
        &self.connectivity[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Largest referenced point index, if any cell has points.
    pub fn max_point(&self) -> Option<usize> {
        self.connectivity.iter().copied().max()
    }
}
