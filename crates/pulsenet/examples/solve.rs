//! Run both queries against a module description file.
//!
//! ```text
//! cargo run --example solve -- path/to/network.txt [sink]
//! ```
//!
//! Prints the low/high product over 1000 presses, then the first press on
//! which `sink` (default `rx`) would receive a low pulse. The second query
//! is skipped with a message when the network has no suitable sink.

use std::error::Error;
use std::{env, fs, process};

use pulsenet::prelude::*;

const PRESSES: u64 = 1000;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: solve <network-file> [sink]");
        process::exit(2);
    };
    let sink = args.next().unwrap_or_else(|| "rx".to_string());

    let blueprint: Blueprint = fs::read_to_string(&path)?.parse()?;

    let mut engine = CycleEngine::with_defaults(blueprint.build()?);
    let totals = count_pulses(&mut engine, PRESSES)?;
    println!(
        "{PRESSES} presses: {} low, {} high, product {}",
        totals.low,
        totals.high,
        totals.product()
    );

    let mut engine = CycleEngine::with_defaults(blueprint.build()?);
    match first_low_press(&mut engine, &sink) {
        Ok(found) => println!("first low pulse to {sink}: press {}", found.press),
        Err(QueryError::Network(err)) => println!("convergence skipped: {err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
