//! Per-net bookkeeping for one placed cell.

use crate::surface::{Cell, CellId};

/// A placed cell inside one net snapshot.
///
/// `connections` are the cells this node is joined to inside the net;
/// `used` are neighbour relations retired from the frontier. Neither list
/// is ever offered again as an open connection from this node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellNode {
    cell: CellId,
    connections: Vec<CellId>,
    used: Vec<CellId>,
    sequence: usize,
}

impl CellNode {
    pub(crate) fn new(cell: CellId, sequence: usize) -> Self {
        Self {
            cell,
            connections: Vec::new(),
            used: Vec::new(),
            sequence,
        }
    }

    #[inline]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn connections(&self) -> &[CellId] {
        &self.connections
    }

    #[inline]
    pub fn used_connections(&self) -> &[CellId] {
        &self.used
    }

    /// Order in which this cell was placed (the seed is 0).
    #[inline]
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    #[inline]
    pub fn is_connected_to(&self, other: CellId) -> bool {
        self.connections.contains(&other)
    }

    pub(crate) fn connect(&mut self, other: CellId) {
        self.connections.push(other);
    }

    pub(crate) fn retire(&mut self, other: CellId) {
        if !self.used.contains(&other) {
            self.used.push(other);
        }
    }

    /// Surface neighbours of `cell` (this node's cell) that are neither
    /// connected nor retired, in link order, without repeats.
    pub fn open_connections<'a>(&'a self, cell: &'a Cell) -> impl Iterator<Item = CellId> + 'a {
        debug_assert_eq!(cell.id, self.cell);
        cell.neighbors
            .iter()
            .enumerate()
            .filter(move |&(i, l)| {
                !self.connections.contains(&l.cell)
                    && !self.used.contains(&l.cell)
                    && !cell.neighbors[..i].iter().any(|p| p.cell == l.cell)
            })
            .map(|(_, l)| l.cell)
    }
}
