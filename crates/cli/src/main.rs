mod display;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use cuboids::api::{
    compatible_dims, random_net_replay, shared_nets, Cuboid, Dims, Net, NetCollection,
    ReplayToken, Search, SearchCfg,
};

use crate::display::{frame, redraw, Cursor};
use crate::report::{write_json, Summary};
use crate::stats::{Sampler, Stats};

const REDRAW_EVERY: Duration = Duration::from_millis(100);
const SAMPLE_EVERY: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Enumerate the distinct nets of rectangular boxes")]
struct Cmd {
    /// Log level for stderr output
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Debug, clap::Args)]
struct SearchArgs {
    /// Worker threads in a dedicated pool (default: rayon's global pool)
    #[arg(long)]
    threads: Option<usize>,
    /// Walk the search tree on one thread
    #[arg(long)]
    sequential: bool,
}

impl SearchArgs {
    fn cfg(&self) -> SearchCfg {
        SearchCfg {
            parallel: !self.sequential,
            threads: self.threads,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate every distinct net of one box
    Enumerate {
        #[arg(long, default_value = "1x1x1")]
        dims: Dims,
        #[command(flatten)]
        search: SearchArgs,
        /// Redraw the current and most recent net while searching
        #[arg(long)]
        watch: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Print the first N nets after the summary
        #[arg(long, default_value_t = 0)]
        show: usize,
        /// Also write the JSON summary to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print one random net
    Random {
        #[arg(long, default_value = "1x1x1")]
        dims: Dims,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// List boxes that share a surface area
    Compatible {
        #[arg(long, default_value_t = 5)]
        max_edge: usize,
        #[arg(long)]
        json: bool,
    },
    /// Enumerate two boxes and print the net shapes they share
    Shared {
        #[arg(long)]
        a: Dims,
        #[arg(long)]
        b: Dims,
        #[command(flatten)]
        search: SearchArgs,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Enumerate {
            dims,
            search,
            watch,
            json,
            show,
            out,
        } => enumerate(dims, search.cfg(), watch, json, show, out),
        Action::Random { dims, seed, index } => random(dims, seed, index),
        Action::Compatible { max_edge, json } => compatible(max_edge, json),
        Action::Shared { a, b, search } => shared(a, b, search.cfg()),
    }
}

/// Run the search on a worker thread while this thread samples counters and
/// (optionally) redraws the display.
fn run_search(cuboid: &Cuboid, cfg: SearchCfg, watch: bool) -> Result<(NetCollection, Summary)> {
    let results = NetCollection::new();
    let stats = Stats::new();
    let outcome = thread::scope(|s| {
        let worker = s.spawn(|| {
            Search::new(cuboid)
                .with_cfg(cfg)
                .with_observer(&stats)
                .run(&results)
        });
        let mut sampler = Sampler::new(SAMPLE_EVERY);
        let mut cursor = Cursor::default();
        while !worker.is_finished() {
            thread::sleep(REDRAW_EVERY);
            let snap = stats.snapshot();
            sampler.tick(snap);
            if watch {
                let nets = results.snapshot();
                let shown = cursor.advance(nets.len()).map(|i| (i, nets[i].as_ref()));
                let body = frame(shown, nets.last().map(Arc::as_ref), nets.len(), snap);
                print!("{}", redraw(&body));
            }
        }
        worker.join()
    });
    let search_stats = match outcome {
        Ok(result) => result.with_context(|| format!("enumerating {}", cuboid.dims()))?,
        Err(_) => anyhow::bail!("search thread panicked"),
    };
    let summary = Summary::new(cuboid, &search_stats);
    Ok((results, summary))
}

fn enumerate(
    dims: Dims,
    cfg: SearchCfg,
    watch: bool,
    json: bool,
    show: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    let cuboid = Cuboid::from_dims(dims);
    let (results, summary) = run_search(&cuboid, cfg, watch)?;
    if let Some(path) = &out {
        write_json(path, &summary)?;
        tracing::info!(path = %path.display(), "wrote summary");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("{}", summary.line());
    for (i, net) in results.snapshot().iter().take(show).enumerate() {
        println!("\nnet {} ({}x{})", i + 1, net.rows(), net.cols());
        print!("{net}");
    }
    Ok(())
}

fn random(dims: Dims, seed: u64, index: u64) -> Result<()> {
    let cuboid = Cuboid::from_dims(dims);
    let tok = ReplayToken::new(seed, index);
    let net = random_net_replay(&cuboid, tok)
        .with_context(|| format!("drawing a random net of {dims} (seed {seed}, index {index})"))?;
    tracing::info!(%dims, seed, index, rows = net.rows(), cols = net.cols(), "random net");
    print!("{net}\n{}", display::render_blocks(net.layout()));
    Ok(())
}

fn compatible(max_edge: usize, json: bool) -> Result<()> {
    let groups = compatible_dims(max_edge);
    if json {
        let obj: Vec<_> = groups
            .iter()
            .map(|(area, dims)| {
                serde_json::json!({
                    "surface_area": area,
                    "dims": dims.iter().map(Dims::to_string).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&obj)?);
        return Ok(());
    }
    for (area, dims) in &groups {
        let names: Vec<String> = dims.iter().map(Dims::to_string).collect();
        println!("{area:>4}: {}", names.join(", "));
    }
    tracing::info!(max_edge, groups = groups.len(), "compatible boxes");
    Ok(())
}

fn shared(a: Dims, b: Dims, cfg: SearchCfg) -> Result<()> {
    if a.surface_area() != b.surface_area() {
        println!(
            "{a} (area {}) and {b} (area {}) cannot share a net",
            a.surface_area(),
            b.surface_area()
        );
        return Ok(());
    }
    let collect = |dims: Dims| -> Result<Vec<Net>> {
        let cuboid = Cuboid::from_dims(dims);
        let (results, summary) = run_search(&cuboid, cfg, false)?;
        println!("{}", summary.line());
        Ok(results.into_nets())
    };
    let nets_a = collect(a)?;
    let nets_b = collect(b)?;
    let pairs = shared_nets(&nets_a, &nets_b);
    println!("{} shared net shapes", pairs.len());
    for (i, j) in pairs {
        println!("\n{a} #{} = {b} #{}", i + 1, j + 1);
        print!("{}", nets_a[i]);
    }
    Ok(())
}
