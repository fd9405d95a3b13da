//! Placement, loop closing and layout growth on the unit cube.
//!
//! Unit cube ids: Top 0, Front 1, Left 2, Back 3, Right 4, Bottom 5.

use super::*;
use crate::direction::Rotation;
use crate::surface::Cuboid;

const TOP: CellId = CellId(0);
const FRONT: CellId = CellId(1);
const LEFT: CellId = CellId(2);
const BACK: CellId = CellId(3);
const RIGHT: CellId = CellId(4);
const BOTTOM: CellId = CellId(5);

fn cube() -> Cuboid {
    Cuboid::new(1, 1, 1)
}

/// Latin cross: Top, Front, Bottom, Back in a column, Left and Right beside Front.
fn cross(c: &Cuboid) -> Net {
    Net::new(TOP)
        .extend(c, FRONT, TOP)
        .and_then(|n| n.extend(c, BOTTOM, FRONT))
        .and_then(|n| n.extend(c, BACK, BOTTOM))
        .and_then(|n| n.extend(c, LEFT, FRONT))
        .and_then(|n| n.extend(c, RIGHT, FRONT))
        .unwrap()
}

#[test]
fn seed_net_is_one_slot() {
    let c = cube();
    let net = Net::new(TOP);
    assert_eq!((net.rows(), net.cols()), (1, 1));
    assert_eq!(net.len(), 1);
    assert_eq!(net.rotation_of(TOP), Some(Rotation::Zero));
    assert_eq!(net.node(TOP).map(CellNode::sequence), Some(0));
    let open = net.open_connections(&c);
    assert_eq!(open, vec![(TOP, BACK), (TOP, LEFT), (TOP, FRONT), (TOP, RIGHT)]);
}

#[test]
fn extend_below_grows_a_row_at_the_bottom() {
    let c = cube();
    let net = Net::new(TOP).extend(&c, FRONT, TOP).unwrap();
    assert_eq!((net.rows(), net.cols()), (2, 1));
    assert_eq!(net.position(TOP), Some((0, 0)));
    assert_eq!(net.position(FRONT), Some((1, 0)));
    assert_eq!(net.rotation_of(FRONT), Some(Rotation::Zero));
    assert_eq!(net.render(), "  0\n  1\n");
    assert_eq!(net.node(FRONT).map(CellNode::sequence), Some(1));
    assert!(net.node(TOP).unwrap().is_connected_to(FRONT));
    assert!(net.node(FRONT).unwrap().is_connected_to(TOP));
}

#[test]
fn extend_above_row_zero_shifts_existing_cells_down() {
    let c = cube();
    let net = Net::new(TOP).extend(&c, BACK, TOP).unwrap();
    assert_eq!((net.rows(), net.cols()), (2, 1));
    assert_eq!(net.position(BACK), Some((0, 0)));
    assert_eq!(net.position(TOP), Some((1, 0)));
    // Back's top edge is the shared one, so it is turned upside down.
    assert_eq!(net.rotation_of(BACK), Some(Rotation::Half));
}

#[test]
fn extend_left_of_column_zero_shifts_existing_cells_right() {
    let c = cube();
    let net = Net::new(TOP).extend(&c, LEFT, TOP).unwrap();
    assert_eq!((net.rows(), net.cols()), (1, 2));
    assert_eq!(net.position(LEFT), Some((0, 0)));
    assert_eq!(net.position(TOP), Some((0, 1)));
    assert_eq!(net.rotation_of(LEFT), Some(Rotation::ThreeQuarter));
    assert_eq!(net.render(), "  2  0\n");
}

#[test]
fn placement_inside_bounds_reuses_the_grid() {
    let c = cube();
    let net = Net::new(TOP)
        .extend(&c, FRONT, TOP)
        .and_then(|n| n.extend(&c, RIGHT, TOP))
        .unwrap();
    assert_eq!((net.rows(), net.cols()), (2, 2));
    assert_eq!(net.position(RIGHT), Some((0, 1)));
    assert_eq!(net.rotation_of(RIGHT), Some(Rotation::Quarter));
    assert_eq!(net.render(), "  0  4\n  1   \n");
    assert_eq!(occupied_count(net.layout()), net.len());
}

#[test]
fn loop_closing_joins_one_hop_neighbours() {
    let c = cube();
    let net = Net::new(TOP)
        .extend(&c, FRONT, TOP)
        .and_then(|n| n.extend(&c, RIGHT, TOP))
        .unwrap();
    // Right meets Front around the cube corner: joined without a layout edge.
    assert!(net.node(RIGHT).unwrap().is_connected_to(FRONT));
    assert!(net.node(FRONT).unwrap().is_connected_to(RIGHT));
    let open = net.open_connections(&c);
    assert_eq!(
        open,
        vec![
            (TOP, BACK),
            (TOP, LEFT),
            (FRONT, LEFT),
            (FRONT, BOTTOM),
            (RIGHT, BACK),
            (RIGHT, BOTTOM),
        ]
    );
}

#[test]
fn loop_closing_reaches_two_hops() {
    let c = cube();
    let net = cross(&c);
    // Right was attached to Front; Back is two hops away via Bottom.
    let right = net.node(RIGHT).unwrap();
    for other in [FRONT, TOP, BOTTOM, BACK] {
        assert!(right.is_connected_to(other), "right not joined to {other}");
    }
    assert!(net.open_connections(&c).iter().all(|&(_, cell)| net.contains(cell)));
}

#[test]
fn complete_cross_layout() {
    let c = cube();
    let net = cross(&c);
    assert_eq!(net.len(), 6);
    assert_eq!((net.rows(), net.cols()), (4, 3));
    assert_eq!(
        net.render(),
        concat!("     0   \n", "  2  1  4\n", "     5   \n", "     3   \n")
    );
    assert_eq!(net.rotation_of(BACK), Some(Rotation::Half));
    assert_eq!(net.rotation_of(LEFT), Some(Rotation::Zero));
    let ids: Vec<_> = net.cell_ids().collect();
    assert_eq!(ids, vec![TOP, FRONT, LEFT, BACK, RIGHT, BOTTOM]);
    let sequences: Vec<_> = [TOP, FRONT, BOTTOM, BACK, LEFT, RIGHT]
        .iter()
        .map(|&id| net.node(id).unwrap().sequence())
        .collect();
    assert_eq!(sequences, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(net.to_string(), net.render());
}

#[test]
fn extend_leaves_the_basis_untouched() {
    let c = cube();
    let basis = Net::new(TOP).extend(&c, FRONT, TOP).unwrap();
    let before = basis.render();
    let top_before = basis.node(TOP).cloned();
    let child = basis.extend(&c, RIGHT, TOP).unwrap();
    assert_eq!(child.len(), 3);
    assert_eq!(basis.len(), 2);
    assert_eq!(basis.render(), before);
    assert_eq!(basis.node(TOP).cloned(), top_before);
    assert!(!basis.contains(RIGHT));
    assert_ne!(basis.serial(), child.serial());
}

#[test]
fn extend_onto_an_occupied_slot_is_a_collision() {
    let c = cube();
    let net = Net::new(TOP).extend(&c, FRONT, TOP).unwrap();
    let err = net.extend(&c, FRONT, TOP).unwrap_err();
    assert_eq!(
        err,
        Error::PlacementCollision {
            cell: FRONT,
            row: 1,
            col: 0
        }
    );
    assert!(err.to_string().contains("cell 1"));
}

#[test]
fn extend_from_unplaced_anchor_is_missing_anchor() {
    let c = cube();
    let err = Net::new(TOP).extend(&c, FRONT, BOTTOM).unwrap_err();
    assert_eq!(err, Error::MissingLayoutAnchor { cell: BOTTOM });
}

#[test]
fn extend_across_non_adjacent_cells_is_rejected() {
    let c = cube();
    let err = Net::new(TOP).extend(&c, BOTTOM, TOP).unwrap_err();
    assert_eq!(
        err,
        Error::NotAdjacent {
            cell: BOTTOM,
            anchor: TOP
        }
    );
}

#[test]
fn anchor_missing_from_layout_is_reported() {
    let layout = seed_layout(TOP);
    let err = layout::place(
        &layout,
        FRONT,
        BOTTOM,
        crate::direction::Direction::Up,
        crate::direction::Direction::Down,
    )
    .unwrap_err();
    assert_eq!(err, Error::MissingLayoutAnchor { cell: BOTTOM });
}

#[test]
fn retired_connections_leave_the_frontier() {
    let c = cube();
    let net = Net::new(TOP);
    let retired = net.with_retired(TOP, FRONT).unwrap();
    assert!(!retired
        .open_connections(&c)
        .contains(&(TOP, FRONT)));
    assert_eq!(retired.open_connections(&c).len(), 3);
    assert_eq!(retired.node(TOP).unwrap().used_connections(), &[FRONT]);
    assert_eq!(net.open_connections(&c).len(), 4);
    assert_eq!(
        net.with_retired(BOTTOM, FRONT).unwrap_err(),
        Error::MissingLayoutAnchor { cell: BOTTOM }
    );
}
