use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use pos_core::SetFamily;
use pos_le::positroid_dimension;
use pos_matroid::serde_io::matroid_from_json;
use pos_necklace::{matroid_to_grassmann_necklace, NecklaceDocument};
use serde::Serialize;

use super::write_json_pretty;

#[derive(Args, Debug)]
pub struct NecklaceArgs {
    /// Matroid document (`{"n": .., "bases": [..]}`).
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Serialize)]
struct NecklaceReport {
    necklace: NecklaceDocument,
    positroid: bool,
    positroid_bases: SetFamily,
    dimension: usize,
}

pub fn run(args: &NecklaceArgs) -> Result<(), Box<dyn Error>> {
    let document = matroid_from_json(&fs::read_to_string(&args.input)?)?;
    let necklace = matroid_to_grassmann_necklace(&document.bases, document.n)?;
    let positroid_bases = necklace.positroid_bases();
    let report = NecklaceReport {
        positroid: !document.bases.is_empty() && positroid_bases == document.bases,
        dimension: positroid_dimension(&necklace)?,
        necklace: NecklaceDocument::new(necklace)?,
        positroid_bases,
    };
    write_json_pretty(&mut io::stdout().lock(), &report)
}
