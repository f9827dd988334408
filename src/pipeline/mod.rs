//! Pipeline stage that attaches a `PartitionID` cell attribute to its input.
//!
//! A stage receives one input [`DataObject`] and fills one output object. The
//! partition filter always shallow-copies its input to the output first, so a
//! failed run still leaves a valid, unpartitioned copy behind.

use serde::{Deserialize, Serialize};

use crate::mesh::DataObject;
use crate::mesh_error::MeshPartitionError;
use crate::partition::{MeshPartitioner, PartitionEngine};

/// Contract between a host pipeline and one of its single-output stages.
pub trait Algorithm {
    /// Populate `output` from `inputs`.
    fn request_data(
        &self,
        inputs: &[&DataObject],
        output: &mut DataObject,
    ) -> Result<(), MeshPartitionError>;

    /// Host-facing entry point: `1` on success, `0` on failure.
    fn process_request(&self, inputs: &[&DataObject], output: &mut DataObject) -> i32 {
        match self.request_data(inputs, output) {
            Ok(()) => 1,
            Err(e) => {
                log::error!("{e}");
                0
            }
        }
    }
}

/// User-settable parameters of [`MeshPartitionFilter`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionFilterConfig {
    /// Requested number of parts; below 2 the filter passes data through.
    pub number_of_partitions: usize,
}

impl Default for PartitionFilterConfig {
    fn default() -> Self {
        Self {
            number_of_partitions: 5,
        }
    }
}

/// Partitions unstructured grids, poly data and structured grids.
#[derive(Clone, Debug, Default)]
pub struct MeshPartitionFilter<E> {
    config: PartitionFilterConfig,
    partitioner: MeshPartitioner<E>,
}

impl<E: PartitionEngine> MeshPartitionFilter<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, PartitionFilterConfig::default())
    }

    pub fn with_config(engine: E, config: PartitionFilterConfig) -> Self {
        Self {
            config,
            partitioner: MeshPartitioner::new(engine),
        }
    }

    pub fn config(&self) -> &PartitionFilterConfig {
        &self.config
    }

    pub fn number_of_partitions(&self) -> usize {
        self.config.number_of_partitions
    }

    pub fn set_number_of_partitions(&mut self, n: usize) {
        self.config.number_of_partitions = n;
    }

    pub fn partitioner(&self) -> &MeshPartitioner<E> {
        &self.partitioner
    }
}

impl<E: PartitionEngine> Algorithm for MeshPartitionFilter<E> {
    fn request_data(
        &self,
        inputs: &[&DataObject],
        output: &mut DataObject,
    ) -> Result<(), MeshPartitionError> {
        let [input] = inputs else {
            return Err(MeshPartitionError::invalid(format!(
                "expected exactly one input, got {}",
                inputs.len()
            )));
        };
        *output = input.shallow_copy();

        let n_parts = self.config.number_of_partitions;
        if n_parts < 2 {
            log::debug!(
                "{n_parts} partition(s) requested, passing {} through",
                output.type_name()
            );
            return Ok(());
        }

        let type_name = output.type_name();
        match output {
            DataObject::UnstructuredGrid(grid) => {
                self.partitioner.partition_and_attach(grid, n_parts)?;
            }
            DataObject::PolyData(poly) => {
                self.partitioner.partition_and_attach(poly, n_parts)?;
            }
            DataObject::StructuredGrid(grid) => {
                self.partitioner.partition_and_attach(grid, n_parts)?;
            }
            DataObject::Empty | DataObject::Table(_) => {
                log::warn!("cannot partition a {type_name}");
                return Err(MeshPartitionError::UnsupportedType(type_name));
            }
        }
        Ok(())
    }
}
