//! Example demonstrating daily puzzle generation.
//!
//! This example shows how to:
//! - Generate the puzzle for an identifier and family
//! - Print the resulting descriptor as JSON
//! - Derive the scrambled start state for topology puzzles
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind path --id 2024-01-01
//! ```
//!
//! Print a topology puzzle together with its scrambled start masks:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind topology --id 2024-01-01 --scrambled
//! ```

use clap::{Parser, ValueEnum};
use puzzlemint_core::PuzzleDescriptor;
use puzzlemint_generator::{Mulberry32, PuzzleKind, derive_seed, generate, scramble_connections};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Path,
    Topology,
    Flow,
    Identity,
}

impl From<KindArg> for PuzzleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Path => PuzzleKind::Path,
            KindArg::Topology => PuzzleKind::Topology,
            KindArg::Flow => PuzzleKind::Flow,
            KindArg::Identity => PuzzleKind::Identity,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle family to generate.
    #[arg(long, value_name = "KIND", default_value = "path")]
    kind: KindArg,

    /// Puzzle identifier; a calendar date in practice.
    #[arg(long, value_name = "ID", default_value = "2024-01-01")]
    id: String,

    /// For topology puzzles, also print the scrambled start masks.
    #[arg(long)]
    scrambled: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let descriptor = generate(args.kind.into(), &args.id);
    println!(
        "{}",
        serde_json::to_string_pretty(&descriptor).expect("descriptors serialize")
    );

    if args.scrambled {
        if let PuzzleDescriptor::Topology(topology) = &descriptor {
            let mut rng = Mulberry32::new(derive_seed(&args.id).wrapping_add(1));
            let masks = scramble_connections(topology, &mut rng);
            println!("scrambled start masks: {masks:?}");
        } else {
            eprintln!("--scrambled only applies to topology puzzles");
        }
    }
}
