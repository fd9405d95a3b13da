//! Random complete nets (one uniformly chosen frontier edge at a time).
//!
//! Purpose
//! - Produce a single arbitrary unfolding quickly, without enumerating. Used
//!   for demos, property tests and benches.
//!
//! Model
//! - Start from the first cell. While some cell is unplaced, collect every
//!   frontier pair `(placed, unplaced)` and attach one chosen uniformly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   or any caller-provided `Rng`.
//!
//! Code cross-refs: `net::Net::extend`, `search` (exhaustive counterpart).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::net::Net;
use crate::surface::{CellId, Cuboid};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same sequence.
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Grow a complete net by repeatedly attaching a random unplaced neighbour.
///
/// Stops early (returning a partial net) only if the frontier runs dry,
/// which cannot happen on a connected surface. Placement errors propagate.
pub fn random_net<R: Rng + ?Sized>(cuboid: &Cuboid, rng: &mut R) -> Result<Net> {
    let mut net = Net::new(CellId(0));
    while net.len() < cuboid.surface_area() {
        let frontier: Vec<(CellId, CellId)> = net
            .open_connections(cuboid)
            .into_iter()
            .filter(|&(_, cell)| !net.contains(cell))
            .collect();
        let Some(&(anchor, cell)) = frontier.choose(rng) else {
            tracing::warn!(
                placed = net.len(),
                "frontier exhausted before the net was complete"
            );
            break;
        };
        net = net.extend(cuboid, cell, anchor)?;
    }
    Ok(net)
}

/// [`random_net`] driven by a replay token.
pub fn random_net_replay(cuboid: &Cuboid, tok: ReplayToken) -> Result<Net> {
    random_net(cuboid, &mut tok.to_std_rng())
}
