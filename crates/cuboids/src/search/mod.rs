//! Parallel backtracking search for every distinct net of a box.
//!
//! Purpose
//! - Grow nets cell by cell from the first cell, fanning out one branch per
//!   surviving placement, and collect one representative per symmetry class.
//!
//! Model
//! - State per branch: `(net, unplaced cells, explored placements)`.
//! - Candidates are frontier pairs whose far cell is still unplaced, minus
//!   placements already offered on the path to this branch. A placement is
//!   tied to the snapshot that offered it, and each snapshot is expanded
//!   once, so in practice nothing is removed here.
//! - Children are deduplicated against each other with
//!   `symmetry::equivalent` before recursing; first seen wins.
//! - Terminal nets go through `NetCollection::insert_unique`, an atomic
//!   scan-then-push.
//! - Children run under `rayon::scope`, so a parent returns only after all of
//!   its children did. No detached work.
//! - A placement error is fatal: it is recorded once, no new branches start,
//!   and the run returns it.
//!
//! Code cross-refs: `net::Net::extend`, `symmetry::equivalent`.

mod dfs;
mod types;

pub use dfs::{enumerate_distinct_nets, Search};
pub use types::{NetCollection, Placement, SearchCfg, SearchObserver, SearchStats};
