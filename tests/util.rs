#![allow(dead_code)]
use mesh_partition::prelude::*;

/// Single tetrahedron on the unit corner.
pub fn single_tet() -> UnstructuredGrid {
    UnstructuredGrid::from_cells(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
        [(CellType::Tetrahedron, [0usize, 1, 2, 3])],
    )
    .unwrap()
}

/// `n` triangles that share no points (3n points).
pub fn disjoint_triangles(n: usize) -> UnstructuredGrid {
    let mut points = Vec::with_capacity(3 * n);
    for i in 0..n {
        let x = 2.0 * i as f64;
        points.extend([[x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0]]);
    }
    let mut grid = UnstructuredGrid::new(points);
    for i in 0..n {
        grid.insert_next_cell(CellType::Triangle, &[3 * i, 3 * i + 1, 3 * i + 2])
            .unwrap();
    }
    grid
}

/// Polyline of `n` segments over `n + 1` collinear points.
pub fn segment_strip(n: usize) -> UnstructuredGrid {
    let points = (0..=n).map(|i| [i as f64, 0.0, 0.0]).collect();
    let mut grid = UnstructuredGrid::new(points);
    for i in 0..n {
        grid.insert_next_cell(CellType::Segment, &[i, i + 1]).unwrap();
    }
    grid
}

/// Splits cells into `n_parts` contiguous runs of near-equal size.
///
/// Every node takes the part of the first cell that references it, or part 0
/// when no cell does. The objective is the number of cells that share a node
/// with a cell in another part.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkEngine;

impl PartitionEngine for ChunkEngine {
    fn part_mesh_nodal(
        &self,
        graph: &MeshGraph,
        n_parts: Idx,
        _options: &PartitionOptions,
        cell_parts: &mut [Idx],
        node_parts: &mut [Idx],
    ) -> Result<Idx, EngineStatus> {
        let n_cells = cell_parts.len();
        for (c, p) in cell_parts.iter_mut().enumerate() {
            *p = (c * n_parts as usize / n_cells) as Idx;
        }
        node_parts.fill(-1);
        for (c, &part) in cell_parts.iter().enumerate() {
            for &n in graph.cell(c) {
                let slot = &mut node_parts[n as usize];
                if *slot < 0 {
                    *slot = part;
                }
            }
        }
        let cut = (0..n_cells)
            .filter(|&c| {
                graph
                    .cell(c)
                    .iter()
                    .any(|&n| node_parts[n as usize] != cell_parts[c])
            })
            .count();
        node_parts.iter_mut().filter(|p| **p < 0).for_each(|p| *p = 0);
        Ok(cut as Idx)
    }
}

/// Always fails with the given status.
#[derive(Clone, Copy, Debug)]
pub struct FailingEngine(pub EngineStatus);

impl PartitionEngine for FailingEngine {
    fn part_mesh_nodal(
        &self,
        _graph: &MeshGraph,
        _n_parts: Idx,
        _options: &PartitionOptions,
        _cell_parts: &mut [Idx],
        _node_parts: &mut [Idx],
    ) -> Result<Idx, EngineStatus> {
        Err(self.0)
    }
}

/// The `PartitionID` values of a pipeline output, if present.
pub fn partition_ids(obj: &DataObject) -> Option<Vec<i32>> {
    obj.cell_data()?
        .get(PARTITION_ID_ARRAY)?
        .as_int()
        .map(<[i32]>::to_vec)
}

/// Run `filter` on a single input and return its status and output.
pub fn run<E: PartitionEngine>(filter: &MeshPartitionFilter<E>, input: &DataObject) -> (i32, DataObject) {
    let mut out = DataObject::Empty;
    let status = filter.process_request(&[input], &mut out);
    (status, out)
}

/// Two triangles framed by cells without points: `[Empty, Tri, Tri, Empty]`.
pub fn triangles_between_empty_cells() -> UnstructuredGrid {
    UnstructuredGrid::from_cells(
        vec![[0.0; 3]; 6],
        [
            (CellType::Empty, vec![]),
            (CellType::Triangle, vec![0usize, 1, 2]),
            (CellType::Triangle, vec![3, 4, 5]),
            (CellType::Empty, vec![]),
        ],
    )
    .unwrap()
}

/// `n_cells` cells without points over `n_points` unused points.
pub fn only_empty_cells(n_points: usize, n_cells: usize) -> UnstructuredGrid {
    UnstructuredGrid::from_cells(
        vec![[0.0; 3]; n_points],
        (0..n_cells).map(|_| (CellType::Empty, Vec::<usize>::new())),
    )
    .unwrap()
}
