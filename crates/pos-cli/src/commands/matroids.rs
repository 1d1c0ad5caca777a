use std::error::Error;
use std::io::{self, BufWriter};

use clap::Args;
use pos_core::SetFamily;
use pos_matroid::{canonical_hash, enumerate_matroids, EnumerationOpts};
use pos_necklace::{matroid_to_grassmann_necklace, GrassmannNecklace};
use serde::Serialize;
use tracing::info;

use super::write_json_line;

#[derive(Args, Debug)]
pub struct MatroidsArgs {
    /// Size of the ground set.
    #[arg(long)]
    pub n: usize,
    /// Rank of the matroids.
    #[arg(long)]
    pub k: usize,
    /// Evaluate bases-count slices in parallel.
    #[arg(long)]
    pub parallel: bool,
    /// Only print matroids that are positroids.
    #[arg(long)]
    pub positroids_only: bool,
    /// Smallest number of bases to enumerate.
    #[arg(long, default_value_t = 1)]
    pub min_bases: usize,
    /// Largest number of bases to enumerate.
    #[arg(long)]
    pub max_bases: Option<usize>,
}

#[derive(Serialize)]
struct MatroidRecord {
    hash: String,
    bases: SetFamily,
    necklace: GrassmannNecklace,
    positroid: bool,
}

pub fn run(args: &MatroidsArgs) -> Result<(), Box<dyn Error>> {
    let opts = EnumerationOpts {
        parallel: args.parallel,
        min_bases: args.min_bases,
        max_bases: args.max_bases,
    };
    let matroids = enumerate_matroids(args.n, args.k, &opts)?;
    let mut out = BufWriter::new(io::stdout().lock());
    let mut printed = 0usize;
    for bases in matroids {
        let necklace = matroid_to_grassmann_necklace(&bases, args.n)?;
        let positroid = necklace.positroid_bases() == bases;
        if args.positroids_only && !positroid {
            continue;
        }
        let record = MatroidRecord {
            hash: canonical_hash(&bases),
            bases,
            necklace,
            positroid,
        };
        write_json_line(&mut out, &record)?;
        printed += 1;
    }
    info!(n = args.n, k = args.k, printed, "matroid enumeration finished");
    Ok(())
}
