//! Curated internal API (UNSTABLE).
//!
//! Prefer these re-exports over reaching into individual modules.

// Surface graph
pub use crate::surface::{Cell, CellId, CellLink, Cuboid, Dims, Face, FaceKind};
// Nets
pub use crate::direction::{Direction, Rotation};
pub use crate::net::{render, CellNode, Layout, Net, Slot};
pub use crate::symmetry::{equivalent, equivalent_layouts};
// Search
pub use crate::search::{
    enumerate_distinct_nets, NetCollection, Placement, Search, SearchCfg, SearchObserver,
    SearchStats,
};
// Random nets and box families
pub use crate::compat::{compatible_dims, distinct_dims, shared_nets};
pub use crate::random::{random_net, random_net_replay, ReplayToken};
pub use crate::error::{Error, Result};
