use std::error::Error;
use std::io::{self, BufWriter};

use clap::Args;
use pos_le::{le_diagram_to_grassmann_necklace, le_diagrams, LeDiagram};
use pos_necklace::GrassmannNecklace;
use serde::Serialize;

use super::write_json_line;

#[derive(Args, Debug)]
pub struct LeDiagramsArgs {
    /// Size of the ground set.
    #[arg(long)]
    pub n: usize,
    /// Rank, i.e. number of rows.
    #[arg(long)]
    pub k: usize,
}

#[derive(Serialize)]
struct DiagramRecord {
    diagram: LeDiagram,
    necklace: GrassmannNecklace,
    dimension: usize,
}

pub fn run(args: &LeDiagramsArgs) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(io::stdout().lock());
    for diagram in le_diagrams(args.n, args.k)? {
        let record = DiagramRecord {
            necklace: le_diagram_to_grassmann_necklace(&diagram)?,
            dimension: diagram.plus_count(),
            diagram,
        };
        write_json_line(&mut out, &record)?;
    }
    Ok(())
}
