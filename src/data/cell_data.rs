//! Named per-cell attribute arrays.
//!
//! A [`CellData`] collection maps array names to [`DataArray`] payloads,
//! one value per cell. Arrays are reference counted so that a shallow copy of
//! a mesh shares them with its source; replacing an array in one collection
//! never touches the other.

use std::sync::Arc;

/// Payload of a single attribute array.
#[derive(Clone, Debug, PartialEq)]
pub enum DataArray {
    /// Integer values (partition ids, material tags, ...).
    Int(Vec<i32>),
    /// Floating-point values.
    Float(Vec<f64>),
}

impl DataArray {
    /// Number of values in the array.
    pub fn len(&self) -> usize {
        match self {
            DataArray::Int(v) => v.len(),
            DataArray::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integer view, if this is an integer array.
    pub fn as_int(&self) -> Option<&[i32]> {
        match self {
            DataArray::Int(v) => Some(v),
            DataArray::Float(_) => None,
        }
    }
}

/// Insertion-ordered collection of named cell attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellData {
    arrays: Vec<(String, Arc<DataArray>)>,
}

impl CellData {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `array` under `name`, replacing any array with the same name.
    ///
    /// Returns the replaced array, if any.
    pub fn add_array(&mut self, name: &str, array: DataArray) -> Option<Arc<DataArray>> {
        let array = Arc::new(array);
        match self.arrays.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, array)),
            None => {
                self.arrays.push((name.to_string(), array));
                None
            }
        }
    }

    /// Looks up an array by name.
    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a.as_ref())
    }

    /// Shared handle to an array, for checking buffer identity.
    pub fn get_shared(&self, name: &str) -> Option<&Arc<DataArray>> {
        self.arrays.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    /// Removes the array called `name`.
    pub fn remove_array(&mut self, name: &str) -> Option<Arc<DataArray>> {
        let pos = self.arrays.iter().position(|(n, _)| n == name)?;
        Some(self.arrays.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of arrays in the collection.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Array names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_replaces_same_name() {
        let mut cd = CellData::new();
        assert!(cd.add_array("a", DataArray::Int(vec![1, 2])).is_none());
        cd.add_array("b", DataArray::Float(vec![0.5]));
        let old = cd.add_array("a", DataArray::Int(vec![3, 4]));
        assert_eq!(old.as_deref(), Some(&DataArray::Int(vec![1, 2])));
        assert_eq!(cd.len(), 2);
        assert_eq!(cd.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(cd.get("a").and_then(DataArray::as_int), Some(&[3, 4][..]));
    }

    #[test]
    fn clones_share_buffers_until_replaced() {
        let mut cd = CellData::new();
        cd.add_array("a", DataArray::Int(vec![7]));
        let mut copy = cd.clone();
        assert!(Arc::ptr_eq(
            cd.get_shared("a").unwrap(),
            copy.get_shared("a").unwrap()
        ));
        copy.add_array("a", DataArray::Int(vec![8]));
        assert_eq!(cd.get("a"), Some(&DataArray::Int(vec![7])));
        assert!(copy.remove_array("a").is_some());
        assert!(copy.is_empty());
    }
}
