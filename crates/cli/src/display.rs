//! Text presentation of nets for the console.
//!
//! Two views of the same layout: the id grid from `Net::render`, and a
//! drawn-cell grid with one two-character block per occupied slot.

use std::fmt::Write;

use cuboids::api::{Layout, Net};

use crate::stats::Snapshot;

const BLOCK: &str = "██";
const BLANK: &str = "  ";

/// One line per layout row, `██` for occupied slots.
pub fn render_blocks(layout: &Layout) -> String {
    let mut out = String::with_capacity(layout.nrows() * (layout.ncols() * BLOCK.len() + 1));
    for r in 0..layout.nrows() {
        for c in 0..layout.ncols() {
            out.push_str(if layout[(r, c)].occupied() { BLOCK } else { BLANK });
        }
        out.push('\n');
    }
    out
}

/// Steps through a growing collection, wrapping at the end.
#[derive(Debug, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Index to show now out of `len` entries; advances for the next call.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = self.index % len;
        self.index = current + 1;
        Some(current)
    }
}

fn section(out: &mut String, title: &str, net: Option<&Net>) {
    let _ = writeln!(out, "{title}");
    match net {
        Some(net) => {
            out.push_str(&net.render());
            out.push('\n');
            out.push_str(&render_blocks(net.layout()));
        }
        None => out.push_str("(none yet)\n"),
    }
    out.push('\n');
}

/// A full screen: the cursor net, the most recent net, then counters.
pub fn frame(
    cursor: Option<(usize, &Net)>,
    latest: Option<&Net>,
    total: usize,
    snap: Snapshot,
) -> String {
    let mut out = String::new();
    let title = match cursor {
        Some((i, _)) => format!("net {} of {total}", i + 1),
        None => format!("net - of {total}"),
    };
    section(&mut out, &title, cursor.map(|(_, n)| n));
    section(&mut out, "most recent", latest);
    let _ = writeln!(
        out,
        "generated: {}  found: {}  run time: {:.1?}",
        snap.generated, snap.found, snap.elapsed
    );
    out
}

/// ANSI clear-screen-and-home followed by `body`.
pub fn redraw(body: &str) -> String {
    format!("\x1b[2J\x1b[H{body}")
}
