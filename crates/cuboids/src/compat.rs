//! Boxes that could share an unfolding, and the net shapes they do share.
//!
//! Two boxes can only fold from one net if their surface areas match, so the
//! candidate pairs are the boxes grouped by area. Whether a shape is actually
//! shared is decided by comparing the enumerated nets of both boxes with
//! `symmetry::equivalent`.

use std::collections::BTreeMap;

use crate::net::Net;
use crate::surface::Dims;
use crate::symmetry::equivalent;

/// Every box with edges in `1..=max_edge`, one per unordered edge triple,
/// edges ascending, in lexicographic order.
pub fn distinct_dims(max_edge: usize) -> Vec<Dims> {
    let mut out = Vec::new();
    for l in 1..=max_edge {
        for w in l..=max_edge {
            for h in w..=max_edge {
                out.push(Dims::new(l, w, h));
            }
        }
    }
    out
}

/// Distinct boxes grouped by surface area, keeping only areas reached by
/// more than one box. Ordered by area.
pub fn compatible_dims(max_edge: usize) -> Vec<(usize, Vec<Dims>)> {
    let mut by_area: BTreeMap<usize, Vec<Dims>> = BTreeMap::new();
    for d in distinct_dims(max_edge) {
        by_area.entry(d.surface_area()).or_default().push(d);
    }
    by_area
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .collect()
}

/// Index pairs `(i, j)` with `a[i]` and `b[j]` the same net shape.
pub fn shared_nets(a: &[Net], b: &[Net]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            if equivalent(x, y) {
                out.push((i, j));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::enumerate_distinct_nets;
    use crate::surface::{CellId, Cuboid};

    #[test]
    fn distinct_dims_small() {
        let got = distinct_dims(2);
        assert_eq!(
            got,
            vec![
                Dims::new(1, 1, 1),
                Dims::new(1, 1, 2),
                Dims::new(1, 2, 2),
                Dims::new(2, 2, 2),
            ]
        );
        assert!(distinct_dims(0).is_empty());
        // C(n + 2, 3) multisets of size 3 from n edge lengths.
        assert_eq!(distinct_dims(5).len(), 35);
    }

    #[test]
    fn no_shared_area_up_to_three() {
        assert!(compatible_dims(3).is_empty());
    }

    #[test]
    fn area_twenty_two_pair() {
        let groups = compatible_dims(5);
        let g = groups.iter().find(|(area, _)| *area == 22).unwrap();
        assert_eq!(g.1, vec![Dims::new(1, 1, 5), Dims::new(1, 2, 3)]);
        assert!(groups.iter().all(|(_, g)| g.len() > 1));
        assert!(groups.windows(2).all(|w| w[0].0 < w[1].0));
        for (area, group) in &groups {
            assert!(group.iter().all(|d| d.surface_area() == *area));
        }
    }

    #[test]
    fn shared_with_itself_is_the_diagonal() {
        let nets = enumerate_distinct_nets(&Cuboid::new(1, 1, 1)).unwrap();
        let pairs = shared_nets(&nets, &nets);
        assert_eq!(pairs, (0..nets.len()).map(|i| (i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn different_sizes_share_nothing() {
        let c = Cuboid::new(1, 1, 1);
        let cube_nets = enumerate_distinct_nets(&c).unwrap();
        let domino = Net::new(CellId(0)).extend(&c, CellId(1), CellId(0)).unwrap();
        assert!(shared_nets(&cube_nets, &[domino]).is_empty());
        assert!(shared_nets(&[], &cube_nets).is_empty());
    }
}
