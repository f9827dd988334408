mod util;
use mesh_partition::prelude::*;
use util::*;

fn filter_with(k: usize) -> MeshPartitionFilter<ChunkEngine> {
    MeshPartitionFilter::with_config(
        ChunkEngine,
        PartitionFilterConfig {
            number_of_partitions: k,
        },
    )
}

#[test]
fn single_part_passes_the_mesh_through() {
    let input = DataObject::from(single_tet());
    let (status, out) = run(&filter_with(1), &input);
    assert_eq!(status, 1);
    assert_eq!(out, input);
    assert!(partition_ids(&out).is_none());
}

#[test]
fn zero_parts_passes_through_too() {
    let input = DataObject::from(disjoint_triangles(4));
    let (status, out) = run(&filter_with(0), &input);
    assert_eq!(status, 1);
    assert!(partition_ids(&out).is_none());
}

#[test]
fn disjoint_triangles_into_two_parts() {
    let input = DataObject::from(disjoint_triangles(10));
    let (status, out) = run(&filter_with(2), &input);
    assert_eq!(status, 1);

    let ids = partition_ids(&out).unwrap();
    assert_eq!(ids.len(), 10);
    assert!(ids.iter().all(|&p| p == 0 || p == 1));
    assert_eq!(ids.iter().filter(|&&p| p == 0).count(), 5);

    assert!(partition_ids(&input).is_none());
    match (&input, &out) {
        (DataObject::UnstructuredGrid(a), DataObject::UnstructuredGrid(b)) => {
            assert!(a.shares_structure_with(b));
        }
        _ => panic!("output changed representation"),
    }
}

#[test]
fn table_input_is_rejected_but_copied() {
    let mut columns = CellData::new();
    columns.add_array("Temperature", DataArray::Float(vec![300.0, 310.0]));
    let input = DataObject::from(Table { columns });
    let (status, out) = run(&filter_with(4), &input);
    assert_eq!(status, 0);
    assert_eq!(out, input);
}

#[test]
fn empty_input_is_unsupported() {
    let filter = filter_with(3);
    let mut out = DataObject::Empty;
    let err = filter.request_data(&[&DataObject::Empty], &mut out).unwrap_err();
    assert_eq!(err, MeshPartitionError::UnsupportedType("Empty"));
}

#[test]
fn engine_failure_leaves_an_unpartitioned_copy() {
    let filter = MeshPartitionFilter::with_config(
        FailingEngine(EngineStatus::MemoryError),
        PartitionFilterConfig {
            number_of_partitions: 3,
        },
    );
    let input = DataObject::from(segment_strip(6));
    let mut out = DataObject::Empty;
    let err = filter.request_data(&[&input], &mut out).unwrap_err();
    assert_eq!(
        err,
        MeshPartitionError::PartitioningFailed {
            status: EngineStatus::MemoryError
        }
    );
    assert_eq!(out, input);
    assert_eq!(filter.process_request(&[&input], &mut out), 0);
}

#[test]
fn rerun_overwrites_partition_ids() {
    let mut filter = filter_with(2);
    let (_, first) = run(&filter, &DataObject::from(segment_strip(6)));
    assert_eq!(partition_ids(&first).unwrap(), vec![0, 0, 0, 1, 1, 1]);

    filter.set_number_of_partitions(3);
    let (status, second) = run(&filter, &first);
    assert_eq!(status, 1);
    assert_eq!(partition_ids(&second).unwrap(), vec![0, 0, 1, 1, 2, 2]);
    assert_eq!(second.cell_data().unwrap().len(), 1);
    assert_eq!(partition_ids(&first).unwrap(), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn every_mesh_representation_is_partitioned() {
    let mut poly = PolyData::new(vec![[0.0; 3]; 6]);
    poly.insert_cell(PolyCellKind::Vert, &[5]).unwrap();
    poly.insert_cell(PolyCellKind::Line, &[0, 1]).unwrap();
    poly.insert_polygon(&[0, 1, 2]).unwrap();
    poly.insert_cell(PolyCellKind::Strip, &[2, 3, 4, 5]).unwrap();

    let inputs = [
        DataObject::from(disjoint_triangles(3)),
        DataObject::from(poly),
        DataObject::from(StructuredGrid::uniform([4, 3, 1])),
    ];
    let filter = filter_with(2);
    for input in &inputs {
        let (status, out) = run(&filter, input);
        assert_eq!(status, 1, "{}", input.type_name());
        let n_cells = input.as_mesh().unwrap().n_cells();
        assert_eq!(partition_ids(&out).unwrap().len(), n_cells);
    }
}

#[test]
fn cells_without_points_still_get_an_id() {
    let filter = filter_with(2);
    let (status, out) = run(&filter, &DataObject::from(triangles_between_empty_cells()));
    assert_eq!(status, 1);
    assert_eq!(partition_ids(&out).unwrap(), vec![0, 0, 1, 1]);

    let (status, out) = run(&filter, &DataObject::from(only_empty_cells(3, 2)));
    assert_eq!(status, 1);
    assert_eq!(partition_ids(&out).unwrap(), vec![0, 1]);
}

#[test]
fn many_parts_request_kway() {
    let p = MeshPartitioner::new(ChunkEngine);
    let a = p.partition(&segment_strip(20), 9).unwrap();
    assert_eq!(a.options.method, PartitionMethod::KWay);
    let b = p.partition(&segment_strip(20), 8).unwrap();
    assert_eq!(b.options.method, PartitionMethod::RecursiveBisection);
    assert_eq!(*a.cell_parts.iter().max().unwrap(), 8);
}
