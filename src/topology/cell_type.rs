//! Cell type metadata for mesh cells.

/// Cell shapes understood by the mesh containers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CellType {
    /// Placeholder cell without points.
    Empty,
    /// 0D vertex.
    #[default]
    Vertex,
    /// Collection of 0D vertices.
    PolyVertex,
    /// 1D segment/edge.
    Segment,
    /// Connected chain of segments.
    PolyLine,
    /// 2D simplex (triangle).
    Triangle,
    /// Strip of triangles sharing edges.
    TriangleStrip,
    /// 2D polygon with an arbitrary number of vertices.
    Polygon,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D simplex (tet).
    Tetrahedron,
    /// 3D tensor-product cell (hex).
    Hexahedron,
    /// 3D wedge/prism.
    Wedge,
    /// 3D pyramid.
    Pyramid,
}

impl CellType {
    /// Number of points a cell of this type must have, or `None` when the
    /// shape admits any count.
    pub fn point_count(self) -> Option<usize> {
        match self {
            CellType::Empty => Some(0),
            CellType::Vertex => Some(1),
            CellType::Segment => Some(2),
            CellType::Triangle => Some(3),
            CellType::Quadrilateral | CellType::Tetrahedron => Some(4),
            CellType::Pyramid => Some(5),
            CellType::Wedge => Some(6),
            CellType::Hexahedron => Some(8),
            CellType::PolyVertex | CellType::PolyLine | CellType::TriangleStrip | CellType::Polygon => {
                None
            }
        }
    }

    /// Whether a cell of this type may legally hold `n` points.
    pub fn accepts_point_count(self, n: usize) -> bool {
        match self.point_count() {
            Some(expected) => expected == n,
            None => match self {
                CellType::PolyLine => n >= 2,
                CellType::TriangleStrip | CellType::Polygon => n >= 3,
                _ => n >= 1,
            },
        }
    }
}
