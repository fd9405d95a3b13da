//! Surface graph of a rectangular box, one node per unit cell.
//!
//! Purpose
//! - Build the six faces as row-major grids of cells with globally
//!   sequential ids, link in-face grid neighbours, then stitch the twelve
//!   fold seams so the result is the full adjacency graph of the surface.
//!
//! Model
//! - Faces are built in the fixed order Top, Front, Left, Back, Right,
//!   Bottom. Top and Bottom are `width × length`, Front and Back are
//!   `width × height`, Left and Right are `length × height`.
//! - Within a face ids run left to right, then top to bottom.
//! - A `CellLink` stores the direction in the owning cell's face frame. For a
//!   seam link that direction is the side of the face the edge lies on.
//! - Cells live in an arena (`Vec<Cell>` indexed by `CellId`); links are
//!   `(id, direction)` pairs, so the cyclic adjacency needs no shared owners.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::Error;

/// Identifier of a unit cell; equals its index in `Cuboid::cells`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// "This cell's neighbour in `direction` is `cell`."
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellLink {
    pub cell: CellId,
    pub direction: Direction,
}

/// A unit square of the surface. Immutable once the cuboid is built.
#[derive(Clone, Debug)]
pub struct Cell {
    pub id: CellId,
    pub neighbors: Vec<CellLink>,
}

impl Cell {
    fn new(id: CellId) -> Self {
        Self {
            id,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// The link from this cell to `other`, if they share an edge.
    pub fn link_to(&self, other: CellId) -> Option<&CellLink> {
        self.neighbors.iter().find(|l| l.cell == other)
    }

    #[inline]
    pub fn is_neighbor(&self, other: CellId) -> bool {
        self.link_to(other).is_some()
    }

    pub fn neighbor_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().map(|l| l.cell)
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// The six faces, in build order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Top,
    Front,
    Left,
    Back,
    Right,
    Bottom,
}

impl FaceKind {
    pub const ALL: [FaceKind; 6] = [
        FaceKind::Top,
        FaceKind::Front,
        FaceKind::Left,
        FaceKind::Back,
        FaceKind::Right,
        FaceKind::Bottom,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// A rectangular `width × height` block of cells starting at id `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub kind: FaceKind,
    pub start: usize,
    pub width: usize,
    pub height: usize,
}

impl Face {
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> {
        (self.start..self.start + self.len()).map(CellId)
    }

    #[inline]
    pub fn cell_at(&self, col: usize, row: usize) -> CellId {
        CellId(self.start + col + row * self.width)
    }

    /// Cells along one side: top/bottom run left to right, left/right run
    /// top to bottom.
    pub fn edge(&self, side: Direction) -> Vec<CellId> {
        match side {
            Direction::Up => (0..self.width).map(|i| self.cell_at(i, 0)).collect(),
            Direction::Left => (0..self.height).map(|j| self.cell_at(0, j)).collect(),
            Direction::Down => (0..self.width)
                .map(|i| self.cell_at(i, self.height - 1))
                .collect(),
            Direction::Right => (0..self.height)
                .map(|j| self.cell_at(self.width - 1, j))
                .collect(),
        }
    }

    fn link_interior(&self, cells: &mut [Cell]) {
        for j in 0..self.height {
            for i in 0..self.width {
                let cell = &mut cells[self.cell_at(i, j).index()];
                if j != 0 {
                    cell.neighbors.push(link(self.cell_at(i, j - 1), Direction::Up));
                }
                if i != 0 {
                    cell.neighbors.push(link(self.cell_at(i - 1, j), Direction::Left));
                }
                if j != self.height - 1 {
                    cell.neighbors.push(link(self.cell_at(i, j + 1), Direction::Down));
                }
                if i != self.width - 1 {
                    cell.neighbors.push(link(self.cell_at(i + 1, j), Direction::Right));
                }
            }
        }
    }
}

#[inline]
fn link(cell: CellId, direction: Direction) -> CellLink {
    CellLink { cell, direction }
}

/// One fold seam: edge `a_side` of face `a` meets edge `b_side` of face `b`,
/// optionally with `b`'s edge walked in reverse.
struct Seam {
    a: FaceKind,
    a_side: Direction,
    b: FaceKind,
    b_side: Direction,
    reversed: bool,
}

const fn seam(
    a: FaceKind,
    a_side: Direction,
    b: FaceKind,
    b_side: Direction,
    reversed: bool,
) -> Seam {
    Seam {
        a,
        a_side,
        b,
        b_side,
        reversed,
    }
}

const SEAMS: [Seam; 12] = {
    use Direction::{Down, Left, Right, Up};
    use FaceKind as F;
    [
        seam(F::Top, Up, F::Back, Up, true),
        seam(F::Top, Left, F::Left, Up, false),
        seam(F::Top, Down, F::Front, Up, false),
        seam(F::Top, Right, F::Right, Up, true),
        seam(F::Front, Left, F::Left, Right, false),
        seam(F::Left, Left, F::Back, Right, false),
        seam(F::Back, Left, F::Right, Right, false),
        seam(F::Right, Left, F::Front, Right, false),
        seam(F::Front, Down, F::Bottom, Up, false),
        seam(F::Left, Down, F::Bottom, Left, true),
        seam(F::Back, Down, F::Bottom, Down, true),
        seam(F::Right, Down, F::Bottom, Right, false),
    ]
};

/// Edge lengths of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims {
    pub length: usize,
    pub width: usize,
    pub height: usize,
}

impl Dims {
    pub fn new(length: usize, width: usize, height: usize) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn surface_area(&self) -> usize {
        2 * (self.length * self.width + self.length * self.height + self.width * self.height)
    }

    pub fn volume(&self) -> usize {
        self.length * self.width * self.height
    }

    /// Edge lengths in ascending order; equal for boxes that differ only by
    /// which edge is called what.
    pub fn sorted(&self) -> [usize; 3] {
        let mut e = [self.length, self.width, self.height];
        e.sort_unstable();
        e
    }
}

impl FromStr for Dims {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims: Vec<usize> = s
            .split('x')
            .map(|d| d.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| Error::InvalidDims(format!("{s:?}: dimensions must be integers")))?;
        let &[length, width, height] = dims.as_slice() else {
            return Err(Error::InvalidDims(format!(
                "{s:?}: expected LxWxH (length, width and height)"
            )));
        };
        if dims.contains(&0) {
            return Err(Error::InvalidDims(format!("{s:?}: dimensions must be positive")));
        }
        Ok(Self::new(length, width, height))
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// The stitched surface graph of a box.
#[derive(Clone, Debug)]
pub struct Cuboid {
    dims: Dims,
    faces: [Face; 6],
    cells: Vec<Cell>,
    connections: usize,
}

impl Cuboid {
    /// Build the surface graph.
    ///
    /// Pre: all edge lengths are positive (checked by `Dims::from_str` at
    /// input boundaries; asserted here).
    pub fn new(length: usize, width: usize, height: usize) -> Self {
        Self::from_dims(Dims::new(length, width, height))
    }

    pub fn from_dims(dims: Dims) -> Self {
        assert!(
            dims.length > 0 && dims.width > 0 && dims.height > 0,
            "box dimensions must be positive, got {dims}"
        );
        let sizes = [
            (FaceKind::Top, dims.width, dims.length),
            (FaceKind::Front, dims.width, dims.height),
            (FaceKind::Left, dims.length, dims.height),
            (FaceKind::Back, dims.width, dims.height),
            (FaceKind::Right, dims.length, dims.height),
            (FaceKind::Bottom, dims.width, dims.length),
        ];
        let mut start = 0;
        let faces = sizes.map(|(kind, width, height)| {
            let face = Face {
                kind,
                start,
                width,
                height,
            };
            start += face.len();
            face
        });

        let mut cells: Vec<Cell> = (0..start).map(|i| Cell::new(CellId(i))).collect();
        for face in &faces {
            face.link_interior(&mut cells);
        }
        for s in &SEAMS {
            let edge_a = faces[s.a.index()].edge(s.a_side);
            let mut edge_b = faces[s.b.index()].edge(s.b_side);
            if s.reversed {
                edge_b.reverse();
            }
            debug_assert_eq!(edge_a.len(), edge_b.len(), "seam edges differ in length");
            for (a, b) in edge_a.into_iter().zip(edge_b) {
                cells[a.index()].neighbors.push(link(b, s.a_side));
                cells[b.index()].neighbors.push(link(a, s.b_side));
            }
        }

        let connections = cells.iter().map(Cell::degree).sum::<usize>() / 2;
        Self {
            dims,
            faces,
            cells,
            connections,
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// All cells, ordered by id.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    pub fn face(&self, kind: FaceKind) -> &Face {
        &self.faces[kind.index()]
    }

    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Number of cells; always `2·(l·w + l·h + w·h)`.
    #[inline]
    pub fn surface_area(&self) -> usize {
        self.cells.len()
    }

    /// Number of undirected adjacencies: `Σ degree / 2`.
    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_links_are_mutual(c: &Cuboid) {
        for cell in c.cells() {
            for l in &cell.neighbors {
                assert!(
                    c.cell(l.cell).is_neighbor(cell.id),
                    "{} -> {} has no reverse link",
                    cell.id,
                    l.cell
                );
            }
        }
    }

    #[test]
    fn unit_cube_graph() {
        let c = Cuboid::new(1, 1, 1);
        assert_eq!(c.surface_area(), 6);
        assert_eq!(c.connections(), 12);
        assert!(c.cells().iter().all(|cell| cell.degree() == 4));
        assert_links_are_mutual(&c);
        // Top sees Back above, Left, Front below, Right.
        let top: Vec<_> = c.cell(CellId(0)).neighbors.clone();
        assert_eq!(
            top,
            vec![
                link(CellId(3), Direction::Up),
                link(CellId(2), Direction::Left),
                link(CellId(1), Direction::Down),
                link(CellId(4), Direction::Right),
            ]
        );
    }

    #[test]
    fn area_and_connections_match_formulas() {
        for (l, w, h) in [(1, 1, 2), (2, 3, 4), (1, 5, 1), (3, 3, 3)] {
            let c = Cuboid::new(l, w, h);
            let dims = c.dims();
            assert_eq!(c.surface_area(), dims.surface_area());
            let degree_sum: usize = c.cells().iter().map(Cell::degree).sum();
            assert_eq!(degree_sum / 2, c.connections());
            // Closed surface: every unit square has four edge neighbours.
            assert!(c.cells().iter().all(|cell| cell.degree() == 4), "{dims}");
            assert_eq!(c.connections(), 2 * c.surface_area());
            assert_links_are_mutual(&c);
            for (i, cell) in c.cells().iter().enumerate() {
                assert_eq!(cell.id, CellId(i));
            }
        }
    }

    #[test]
    fn face_ids_follow_build_order() {
        let c = Cuboid::new(2, 2, 2);
        let starts: Vec<_> = FaceKind::ALL.iter().map(|&k| c.face(k).start).collect();
        assert_eq!(starts, vec![0, 4, 8, 12, 16, 20]);
        let top = c.face(FaceKind::Top);
        assert_eq!(top.edge(Direction::Up), vec![CellId(0), CellId(1)]);
        assert_eq!(top.edge(Direction::Left), vec![CellId(0), CellId(2)]);
        assert_eq!(top.edge(Direction::Down), vec![CellId(2), CellId(3)]);
        assert_eq!(top.edge(Direction::Right), vec![CellId(1), CellId(3)]);
    }

    #[test]
    fn top_back_seam_is_reversed() {
        let c = Cuboid::new(2, 2, 2);
        // Back's top edge is [12, 13]; reversed it meets Top's top edge [0, 1].
        assert_eq!(
            c.cell(CellId(0)).link_to(CellId(13)),
            Some(&link(CellId(13), Direction::Up))
        );
        assert_eq!(
            c.cell(CellId(13)).link_to(CellId(0)),
            Some(&link(CellId(0), Direction::Up))
        );
        assert!(c.cell(CellId(1)).is_neighbor(CellId(12)));
        // Top's left edge [0, 2] meets Left's top edge [8, 9] in order.
        assert!(c.cell(CellId(0)).is_neighbor(CellId(8)));
        assert!(c.cell(CellId(2)).is_neighbor(CellId(9)));
    }

    #[test]
    fn non_square_faces_have_expected_sizes() {
        let c = Cuboid::new(2, 3, 4);
        let sizes: Vec<_> = FaceKind::ALL
            .iter()
            .map(|&k| (c.face(k).width, c.face(k).height))
            .collect();
        assert_eq!(sizes, vec![(3, 2), (3, 4), (2, 4), (3, 4), (2, 4), (3, 2)]);
        assert_eq!(c.surface_area(), 52);
    }

    #[test]
    fn dims_parse_and_display() {
        let d: Dims = "1x5x1".parse().unwrap();
        assert_eq!(d, Dims::new(1, 5, 1));
        assert_eq!(d.to_string(), "1x5x1");
        assert_eq!(d.surface_area(), 22);
        assert_eq!(d.sorted(), [1, 1, 5]);
        assert!(matches!("2x2".parse::<Dims>(), Err(Error::InvalidDims(_))));
        assert!(matches!("2xax2".parse::<Dims>(), Err(Error::InvalidDims(_))));
        assert!(matches!("0x1x1".parse::<Dims>(), Err(Error::InvalidDims(_))));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_dimension_is_rejected() {
        let _ = Cuboid::new(0, 1, 1);
    }
}
