//! Recursive fan-out over placements with sibling pruning and an abort flag.
//!
//! Explored placements form a chain of per-level lists borrowed from the
//! parent frame, so a branch never copies its ancestors' lists. Placements
//! carry the serial of the snapshot that offered them, and every snapshot is
//! expanded once, so the filter never actually drops a candidate. Pruning
//! of symmetric siblings comes from the child dedup alone.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::net::Net;
use crate::surface::{CellId, Cuboid};
use crate::symmetry::equivalent;

use super::types::{NetCollection, Placement, SearchCfg, SearchObserver, SearchStats};

/// Every distinct net of `cuboid`, with the default configuration.
pub fn enumerate_distinct_nets(cuboid: &Cuboid) -> Result<Vec<Net>> {
    let results = NetCollection::new();
    Search::new(cuboid).run(&results)?;
    Ok(results.into_nets())
}

/// A configured search over one box.
///
/// ```ignore
/// let results = NetCollection::new();
/// let stats = Search::new(&cuboid).with_cfg(cfg).with_observer(&stats).run(&results)?;
/// ```
pub struct Search<'a, O: SearchObserver = ()> {
    cuboid: &'a Cuboid,
    cfg: SearchCfg,
    observer: &'a O,
}

impl<'a> Search<'a> {
    pub fn new(cuboid: &'a Cuboid) -> Self {
        Self {
            cuboid,
            cfg: SearchCfg::default(),
            observer: &(),
        }
    }
}

impl<'a, O: SearchObserver> Search<'a, O> {
    pub fn with_cfg(self, cfg: SearchCfg) -> Self {
        Self { cfg, ..self }
    }

    pub fn with_observer<P: SearchObserver>(self, observer: &'a P) -> Search<'a, P> {
        Search {
            cuboid: self.cuboid,
            cfg: self.cfg,
            observer,
        }
    }

    pub fn cfg(&self) -> SearchCfg {
        self.cfg
    }

    /// Run to completion, inserting distinct nets into `results`.
    ///
    /// `results` may be polled from other threads while this runs. Returns
    /// the first fatal placement error if any branch hit one.
    pub fn run(&self, results: &NetCollection) -> Result<SearchStats> {
        let start = Instant::now();
        let dims = self.cuboid.dims();
        tracing::info!(
            %dims,
            surface_area = self.cuboid.surface_area(),
            connections = self.cuboid.connections(),
            parallel = self.cfg.parallel,
            threads = ?self.cfg.threads,
            "search start"
        );

        let runner = SearchRunner::new(self.cuboid, self.cfg, results, self.observer);
        let mut cells = self.cuboid.cells().iter().map(|c| c.id);
        if let Some(seed) = cells.next() {
            let unplaced: Vec<CellId> = cells.collect();
            let runner = &runner;
            let root = move || runner.grow(Net::new(seed), unplaced, &Explored::default());
            match self.cfg.threads {
                Some(n) => rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?
                    .install(root),
                None => root(),
            }
        }

        if let Some(err) = runner.take_failure() {
            return Err(err);
        }
        let stats = SearchStats {
            unique: results.len(),
            generated: runner.generated.load(Ordering::Relaxed),
            elapsed: start.elapsed(),
        };
        tracing::info!(
            %dims,
            unique = stats.unique,
            generated = stats.generated,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "search finished"
        );
        Ok(stats)
    }
}

/// Shared context for every branch of one run.
pub(super) struct SearchRunner<'a, O> {
    cuboid: &'a Cuboid,
    cfg: SearchCfg,
    results: &'a NetCollection,
    observer: &'a O,
    generated: AtomicU64,
    failure: Mutex<Option<Error>>,
    aborted: AtomicBool,
}

impl<'a, O: SearchObserver> SearchRunner<'a, O> {
    pub(super) fn new(
        cuboid: &'a Cuboid,
        cfg: SearchCfg,
        results: &'a NetCollection,
        observer: &'a O,
    ) -> Self {
        Self {
            cuboid,
            cfg,
            results,
            observer,
            generated: AtomicU64::new(0),
            failure: Mutex::new(None),
            aborted: AtomicBool::new(false),
        }
    }

    pub(super) fn grow(&self, net: Net, unplaced: Vec<CellId>, explored: &Explored<'_>) {
        if self.aborted.load(Ordering::Relaxed) {
            return;
        }
        if unplaced.is_empty() {
            self.finish(net);
            return;
        }

        let here = Explored::new(
            placements(self.cuboid, &net, &unplaced, explored),
            Some(explored),
        );

        let mut children: Vec<(CellId, Net)> = Vec::with_capacity(here.level.len());
        for p in &here.level {
            let child = match net.extend(self.cuboid, p.cell, p.anchor) {
                Ok(child) => child,
                Err(err) => {
                    self.abort(err);
                    return;
                }
            };
            if !children.iter().any(|(_, seen)| equivalent(seen, &child)) {
                children.push((p.cell, child));
            }
        }
        tracing::trace!(
            placed = net.len(),
            candidates = here.level.len(),
            children = children.len(),
            "expand"
        );

        let rest = |cell: CellId| -> Vec<CellId> {
            unplaced.iter().copied().filter(|&c| c != cell).collect()
        };
        let here = &here;
        if self.cfg.parallel {
            rayon::scope(|s| {
                for (cell, child) in children {
                    let remaining = rest(cell);
                    s.spawn(move |_| self.grow(child, remaining, here));
                }
            });
        } else {
            for (cell, child) in children {
                self.grow(child, rest(cell), here);
            }
        }
    }

    fn finish(&self, net: Net) {
        self.generated.fetch_add(1, Ordering::Relaxed);
        self.observer.net_generated();
        if let Some((index, net)) = self.results.insert_unique(net) {
            tracing::debug!(
                unique = index + 1,
                rows = net.rows(),
                cols = net.cols(),
                "new unique net"
            );
            self.observer.net_found(&net, index);
        }
    }

    /// Record the first fatal error and stop further expansion.
    pub(super) fn abort(&self, err: Error) {
        tracing::error!(error = %err, "aborting search");
        let mut slot = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(err);
        }
        self.aborted.store(true, Ordering::Relaxed);
    }

    pub(super) fn take_failure(&self) -> Option<Error> {
        self.failure.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// Candidate placements for `net`: frontier pairs whose far cell is still
/// unplaced, in `unplaced` order, minus those already explored.
pub(super) fn placements(
    cuboid: &Cuboid,
    net: &Net,
    unplaced: &[CellId],
    explored: &Explored<'_>,
) -> Vec<Placement> {
    let open = net.open_connections(cuboid);
    let serial = net.serial();
    unplaced
        .iter()
        .flat_map(|&cell| {
            open.iter()
                .filter(move |&&(_, far)| far == cell)
                .map(move |&(anchor, _)| Placement {
                    cell,
                    anchor,
                    net: serial,
                })
        })
        .filter(|p| !explored.contains(p))
        .collect()
}

/// Placements offered at one level, linked to the levels above it.
#[derive(Debug, Default)]
pub(super) struct Explored<'p> {
    level: Vec<Placement>,
    parent: Option<&'p Explored<'p>>,
}

impl<'p> Explored<'p> {
    pub(super) fn new(level: Vec<Placement>, parent: Option<&'p Explored<'p>>) -> Self {
        Self { level, parent }
    }

    pub(super) fn contains(&self, p: &Placement) -> bool {
        let mut node = Some(self);
        while let Some(n) = node {
            if n.level.contains(p) {
                return true;
            }
            node = n.parent;
        }
        false
    }
}
