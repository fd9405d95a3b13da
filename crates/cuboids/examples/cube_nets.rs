//! Time the unit-cube search and print every net.
//!
//! Usage:
//!   cargo run -p cuboids --release --example cube_nets
//!   cargo run -p cuboids --release --example cube_nets -- 1x1x2

use std::time::Instant;

use cuboids::search::{NetCollection, Search};
use cuboids::{Cuboid, Dims};

fn main() {
    let arg = std::env::args().nth(1).unwrap_or_else(|| "1x1x1".to_string());
    let dims: Dims = match arg.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("usage: cube_nets [LxWxH]: {e}");
            return;
        }
    };
    let cuboid = Cuboid::from_dims(dims);
    let results = NetCollection::new();
    let t0 = Instant::now();
    match Search::new(&cuboid).run(&results) {
        Ok(stats) => {
            for (i, net) in results.snapshot().iter().enumerate() {
                println!("net {i}: {}x{}", net.rows(), net.cols());
                print!("{net}");
            }
            println!(
                "{dims}: unique={} generated={} in {:.3?}",
                stats.unique,
                stats.generated,
                t0.elapsed()
            );
        }
        Err(e) => eprintln!("{dims}: search failed: {e}"),
    }
}
