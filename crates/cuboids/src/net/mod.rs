//! Planar embeddings ("nets") grown one cell at a time.
//!
//! Purpose
//! - Represent a partial or complete unfolding: which cells are placed, how
//!   they are joined inside the net, and where each sits (and how it is
//!   turned) on a 2D grid relative to the seed cell.
//!
//! Model
//! - A `Net` is an immutable snapshot. `extend` returns a new snapshot with a
//!   full copy of the node map and a possibly grown layout; the basis is
//!   never touched, so concurrent branches can share ancestors freely.
//! - The shared surface graph (`Cuboid`) is passed in by reference and never
//!   copied.
//!
//! Code cross-refs: `surface::Cuboid`, `symmetry::equivalent`, `search`.

mod layout;
mod node;

pub use layout::{locate, occupied_count, render, seed_layout, Layout, Slot};
pub use node::CellNode;

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::direction::Rotation;
use crate::error::{Error, Result};
use crate::surface::{CellId, Cuboid};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

/// A (partial) net: placed cells, their in-net joins, and the planar layout.
#[derive(Clone, Debug)]
pub struct Net {
    /// Unique per snapshot; nodes of different snapshots never compare equal.
    serial: u64,
    nodes: BTreeMap<CellId, CellNode>,
    layout: Layout,
}

impl Net {
    /// One-cell net: the seed at the origin, rotation 0°.
    pub fn new(seed: CellId) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(seed, CellNode::new(seed, 0));
        Self {
            serial: next_serial(),
            nodes,
            layout: seed_layout(seed),
        }
    }

    /// New snapshot with `cell` attached to the placed cell `anchor`.
    ///
    /// Errors
    /// - `MissingLayoutAnchor` if `anchor` is not placed.
    /// - `NotAdjacent` if the two cells share no surface edge.
    /// - `PlacementCollision` if the computed slot is already taken.
    pub fn extend(&self, cuboid: &Cuboid, cell: CellId, anchor: CellId) -> Result<Net> {
        if !self.nodes.contains_key(&anchor) {
            return Err(Error::MissingLayoutAnchor { cell: anchor });
        }
        let not_adjacent = Error::NotAdjacent { cell, anchor };
        let to_new = cuboid
            .cell(anchor)
            .link_to(cell)
            .ok_or_else(|| not_adjacent.clone())?
            .direction;
        let to_anchor = cuboid
            .cell(cell)
            .link_to(anchor)
            .ok_or(not_adjacent)?
            .direction;
        let layout = layout::place(&self.layout, cell, anchor, to_new, to_anchor)?;

        let mut nodes = self.nodes.clone();
        nodes.insert(cell, CellNode::new(cell, self.nodes.len()));
        join(&mut nodes, anchor, cell);
        close_loops(&mut nodes, cuboid, cell, anchor);

        Ok(Net {
            serial: next_serial(),
            nodes,
            layout,
        })
    }

    /// New snapshot in which `cell` is retired from `node`'s frontier.
    pub fn with_retired(&self, node: CellId, cell: CellId) -> Result<Net> {
        let mut nodes = self.nodes.clone();
        nodes
            .get_mut(&node)
            .ok_or(Error::MissingLayoutAnchor { cell: node })?
            .retire(cell);
        Ok(Net {
            serial: next_serial(),
            nodes,
            layout: self.layout.clone(),
        })
    }

    /// Frontier pairs `(placed node, neighbouring cell)`, nodes in id order.
    ///
    /// The neighbouring cell may already be placed elsewhere in the net;
    /// callers join against their own unplaced set.
    pub fn open_connections(&self, cuboid: &Cuboid) -> Vec<(CellId, CellId)> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.open_connections(cuboid.cell(node.cell()))
                    .map(move |c| (node.cell(), c))
            })
            .collect()
    }

    #[inline]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.ncols()
    }

    /// Number of placed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        self.nodes.contains_key(&cell)
    }

    pub fn node(&self, cell: CellId) -> Option<&CellNode> {
        self.nodes.get(&cell)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CellNode> {
        self.nodes.values()
    }

    /// Placed cell ids in ascending order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn position(&self, cell: CellId) -> Option<(usize, usize)> {
        locate(&self.layout, cell)
    }

    pub fn rotation_of(&self, cell: CellId) -> Option<Rotation> {
        self.position(cell).map(|rc| self.layout[rc].rotation)
    }

    pub fn render(&self) -> String {
        render(&self.layout)
    }
}

impl Display for Net {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn join(nodes: &mut BTreeMap<CellId, CellNode>, a: CellId, b: CellId) {
    if let Some(n) = nodes.get_mut(&a) {
        n.connect(b);
    }
    if let Some(n) = nodes.get_mut(&b) {
        n.connect(a);
    }
}

/// Join `new` to every placed surface neighbour one or two connection hops
/// away from `anchor`, closing 2×2 loops so they leave the frontier.
fn close_loops(
    nodes: &mut BTreeMap<CellId, CellNode>,
    cuboid: &Cuboid,
    new: CellId,
    anchor: CellId,
) {
    let connections_of = |id: CellId| -> Vec<CellId> {
        nodes
            .get(&id)
            .map(|n| {
                n.connections()
                    .iter()
                    .copied()
                    .filter(|c| nodes.contains_key(c))
                    .collect()
            })
            .unwrap_or_default()
    };

    let first: Vec<CellId> = connections_of(anchor)
        .into_iter()
        .filter(|&c| c != new)
        .collect();
    let mut candidates: Vec<CellId> = Vec::new();
    for hop in first.iter().copied().chain(first.iter().flat_map(|&f| connections_of(f))) {
        if hop != anchor && hop != new && !candidates.contains(&hop) {
            candidates.push(hop);
        }
    }

    let new_cell = cuboid.cell(new);
    for c in candidates {
        if new_cell.is_neighbor(c) {
            join(nodes, new, c);
        }
    }
}

#[cfg(test)]
mod tests;
