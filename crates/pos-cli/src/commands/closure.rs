use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use pos_core::SetFamily;
use pos_matroid::serde_io::circuits_from_json;
use pos_matroid::{circuits_to_bases, matroid_closure_with, ClosureOpts};
use pos_necklace::{matroid_to_grassmann_necklace, GrassmannNecklace};
use serde::Serialize;
use tracing::info;

use super::write_json_pretty;

#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// Circuit document (`{"n": .., "circuits": [..]}`).
    #[arg(long)]
    pub input: PathBuf,
    /// Ground set size; defaults to the document's `n`.
    #[arg(long)]
    pub n: Option<usize>,
    /// Abort after this many repair insertions.
    #[arg(long)]
    pub max_insertions: Option<usize>,
}

#[derive(Serialize)]
struct ClosureReport {
    n: usize,
    circuits: SetFamily,
    insertions: usize,
    bases: SetFamily,
    necklace: GrassmannNecklace,
}

pub fn run(args: &ClosureArgs) -> Result<(), Box<dyn Error>> {
    let document = circuits_from_json(&fs::read_to_string(&args.input)?)?;
    let n = args.n.unwrap_or(document.n);
    let opts = ClosureOpts {
        max_insertions: args.max_insertions,
    };
    let outcome = matroid_closure_with(&document.circuits, &opts)?;
    info!(insertions = outcome.insertions, "closure finished");
    let bases = circuits_to_bases(&outcome.circuits, n)?;
    let necklace = matroid_to_grassmann_necklace(&bases, n)?;
    let report = ClosureReport {
        n,
        circuits: outcome.circuits,
        insertions: outcome.insertions,
        bases,
        necklace,
    };
    write_json_pretty(&mut io::stdout().lock(), &report)
}
