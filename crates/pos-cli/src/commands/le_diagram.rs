use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use pos_le::{grassmann_necklace_to_le_diagram, LeDiagram};
use pos_necklace::necklace_from_json;
use serde::Serialize;

use super::write_json_pretty;

#[derive(Args, Debug)]
pub struct LeDiagramArgs {
    /// Necklace document (`{"necklace": {"n": .., "k": .., "entries": [..]}}`).
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Serialize)]
struct DiagramReport {
    diagram: LeDiagram,
    dimension: usize,
}

pub fn run(args: &LeDiagramArgs) -> Result<(), Box<dyn Error>> {
    let document = necklace_from_json(&fs::read_to_string(&args.input)?)?;
    let diagram = grassmann_necklace_to_le_diagram(&document.necklace)?;
    let report = DiagramReport {
        dimension: diagram.plus_count(),
        diagram,
    };
    write_json_pretty(&mut io::stdout().lock(), &report)
}
