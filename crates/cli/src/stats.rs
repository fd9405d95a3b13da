//! Run-wide counters fed by the search's observer callbacks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use cuboids::api::{Net, SearchObserver};

/// Generated / found counters plus the run's start time.
#[derive(Debug)]
pub struct Stats {
    generated: AtomicU64,
    found: AtomicU64,
    started: Instant,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            generated: AtomicU64::new(0),
            found: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generated: self.generated.load(Ordering::Relaxed),
            found: self.found.load(Ordering::Relaxed),
            elapsed: self.started.elapsed(),
        }
    }
}

impl SearchObserver for Stats {
    fn net_generated(&self) {
        self.generated.fetch_add(1, Ordering::Relaxed);
    }

    fn net_found(&self, _net: &Net, _index: usize) {
        self.found.fetch_add(1, Ordering::Relaxed);
    }
}

/// Counter values at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub generated: u64,
    pub found: u64,
    pub elapsed: Duration,
}

impl Snapshot {
    /// Per-second rates since `earlier`: `(generated, found)`.
    pub fn rates_since(&self, earlier: &Snapshot) -> (f64, f64) {
        let dt = self.elapsed.saturating_sub(earlier.elapsed).as_secs_f64();
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        (
            self.generated.saturating_sub(earlier.generated) as f64 / dt,
            self.found.saturating_sub(earlier.found) as f64 / dt,
        )
    }
}

/// Emits one rate line per `interval` while the run is in progress.
#[derive(Debug)]
pub struct Sampler {
    interval: Duration,
    last: Snapshot,
}

impl Sampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Snapshot::default(),
        }
    }

    /// Log rates if at least one interval passed since the last line.
    /// Returns the rates that were logged.
    pub fn tick(&mut self, now: Snapshot) -> Option<(f64, f64)> {
        if now.elapsed.saturating_sub(self.last.elapsed) < self.interval {
            return None;
        }
        let (generated_per_s, found_per_s) = now.rates_since(&self.last);
        tracing::info!(
            generated = now.generated,
            found = now.found,
            generated_per_s = format_args!("{generated_per_s:.1}"),
            found_per_s = format_args!("{found_per_s:.1}"),
            "progress"
        );
        self.last = now;
        Some((generated_per_s, found_per_s))
    }
}
