//! Configuration, observer hooks, and the shared result collection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::net::Net;
use crate::surface::CellId;
use crate::symmetry::equivalent;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Fan children out on the rayon pool; `false` walks the same tree
    /// depth-first on the calling thread.
    pub parallel: bool,
    /// Run inside a dedicated pool with this many workers instead of the
    /// global one.
    pub threads: Option<usize>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Notifications fired from whichever worker reaches the event. No return
/// value and no ordering guarantee between calls.
pub trait SearchObserver: Sync {
    /// A branch placed its last cell, whether or not the net turns out new.
    fn net_generated(&self) {}

    /// `net` was added to the collection at position `index`.
    fn net_found(&self, _net: &Net, _index: usize) {}
}

impl SearchObserver for () {}

/// "Attach `cell` to `anchor`" as offered by one particular snapshot.
///
/// `net` is the serial of the snapshot whose node would be the anchor, so a
/// placement only matches placements offered by that same snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub cell: CellId,
    pub anchor: CellId,
    pub net: u64,
}

/// Counters from one finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    pub unique: usize,
    pub generated: u64,
    pub elapsed: Duration,
}

/// Distinct nets found so far, in discovery order.
///
/// Safe to poll from other threads while a search is filling it.
#[derive(Debug, Default)]
pub struct NetCollection {
    nets: Mutex<Vec<Arc<Net>>>,
}

impl NetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<Net>>> {
        // Entries are only ever appended whole; a poisoned guard is still consistent.
        self.nets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `net` unless an equivalent net is already stored. The scan and the
    /// push happen under one lock.
    pub fn insert_unique(&self, net: Net) -> Option<(usize, Arc<Net>)> {
        let mut nets = self.lock();
        if nets.iter().any(|n| equivalent(n, &net)) {
            return None;
        }
        let net = Arc::new(net);
        nets.push(Arc::clone(&net));
        Some((nets.len() - 1, net))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Arc<Net>> {
        self.lock().get(index).cloned()
    }

    /// Most recently found net.
    pub fn latest(&self) -> Option<Arc<Net>> {
        self.lock().last().cloned()
    }

    pub fn snapshot(&self) -> Vec<Arc<Net>> {
        self.lock().clone()
    }

    pub fn into_nets(self) -> Vec<Net> {
        self.nets
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .map(|n| Arc::try_unwrap(n).unwrap_or_else(|shared| (*shared).clone()))
            .collect()
    }
}
