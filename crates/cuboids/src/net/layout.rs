//! Planar grid of placed cells.
//!
//! A `Layout` is a dense `rows × cols` matrix of `Slot`s, positioned relative
//! to the seed cell. It only ever grows by one row or column at a time, on
//! the side a placement would otherwise fall off.

use std::fmt::Write;

use nalgebra::DMatrix;

use crate::direction::{Direction, Rotation};
use crate::error::{Error, Result};
use crate::surface::CellId;

/// One grid position: the cell placed there (if any) and how far it is
/// turned relative to the seed cell's face frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Slot {
    pub cell: Option<CellId>,
    pub rotation: Rotation,
}

impl Slot {
    pub const EMPTY: Slot = Slot {
        cell: None,
        rotation: Rotation::Zero,
    };

    #[inline]
    pub fn occupied(&self) -> bool {
        self.cell.is_some()
    }
}

pub type Layout = DMatrix<Slot>;

/// A 1×1 layout holding `cell` unrotated.
pub fn seed_layout(cell: CellId) -> Layout {
    DMatrix::from_element(
        1,
        1,
        Slot {
            cell: Some(cell),
            rotation: Rotation::Zero,
        },
    )
}

/// Row and column of `cell`, if present.
pub fn locate(layout: &Layout, cell: CellId) -> Option<(usize, usize)> {
    (0..layout.nrows())
        .flat_map(|r| (0..layout.ncols()).map(move |c| (r, c)))
        .find(|&rc| layout[rc].cell == Some(cell))
}

/// Copy of `reference` with `cell` placed next to `anchor`.
///
/// `to_new` is the anchor's link direction toward `cell`, `to_anchor` the
/// reverse link; both are in their own cells' face frames. The anchor's
/// stored rotation turns `to_new` into layout space.
pub(crate) fn place(
    reference: &Layout,
    cell: CellId,
    anchor: CellId,
    to_new: Direction,
    to_anchor: Direction,
) -> Result<Layout> {
    let (mut row, mut col) =
        locate(reference, anchor).ok_or(Error::MissingLayoutAnchor { cell: anchor })?;
    let anchor_rotation = reference[(row, col)].rotation;
    let heading = to_new.rotate(anchor_rotation);
    let (rows, cols) = reference.shape();

    let mut layout = reference.clone();
    match heading {
        Direction::Up if row == 0 => {
            layout = layout.insert_row(0, Slot::EMPTY);
            row += 1;
        }
        Direction::Down if row == rows - 1 => {
            layout = layout.insert_row(rows, Slot::EMPTY);
        }
        Direction::Left if col == 0 => {
            layout = layout.insert_column(0, Slot::EMPTY);
            col += 1;
        }
        Direction::Right if col == cols - 1 => {
            layout = layout.insert_column(cols, Slot::EMPTY);
        }
        _ => {}
    }

    let (d_row, d_col) = heading.offset();
    let (row, col) = (row.wrapping_add_signed(d_row), col.wrapping_add_signed(d_col));
    if layout[(row, col)].occupied() {
        tracing::error!(%cell, %anchor, row, col, "placement collision");
        return Err(Error::PlacementCollision { cell, row, col });
    }
    layout[(row, col)] = Slot {
        cell: Some(cell),
        rotation: to_new.rotation_to(to_anchor).compound(anchor_rotation),
    };
    Ok(layout)
}

/// Number of occupied slots.
pub fn occupied_count(layout: &Layout) -> usize {
    layout.iter().filter(|s| s.occupied()).count()
}

/// Fixed-width text grid: three characters per slot, ids right-aligned,
/// blanks for empty slots, one line per row.
pub fn render(layout: &Layout) -> String {
    let mut out = String::with_capacity(layout.nrows() * (layout.ncols() * 3 + 1));
    for r in 0..layout.nrows() {
        for c in 0..layout.ncols() {
            match layout[(r, c)].cell {
                Some(id) => {
                    let _ = write!(out, "{:>3}", id.0);
                }
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }
    out
}
