//! Enumeration of the distinct nets of a rectangular box.
//!
//! A box is modelled as a graph of unit cells stitched across its twelve
//! edges (`surface`). Nets are grown one cell at a time on a planar grid
//! (`net`), compared up to rotation and mirroring (`symmetry`), and collected
//! by a parallel backtracking search (`search`).
//!
//! API Policy
//! - The crate has one consumer (the `cli` crate). There is no stable public
//!   API; `api` is the curated surface callers should import from.

pub mod api;
pub mod compat;
pub mod direction;
pub mod error;
pub mod net;
pub mod random;
pub mod search;
pub mod surface;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use net::Net;
pub use surface::{CellId, Cuboid, Dims};

/// Common exports for quick imports in callers and tests.
pub mod prelude {
    pub use crate::direction::{Direction, Rotation};
    pub use crate::error::{Error, Result};
    pub use crate::net::{Layout, Net, Slot};
    pub use crate::search::{
        enumerate_distinct_nets, NetCollection, Search, SearchCfg, SearchObserver,
    };
    pub use crate::surface::{CellId, Cuboid, Dims};
    pub use crate::symmetry::equivalent;
}
