use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    closure::{self, ClosureArgs},
    le_diagram::{self, LeDiagramArgs},
    le_diagrams::{self, LeDiagramsArgs},
    matroids::{self, MatroidsArgs},
    necklace::{self, NecklaceArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "positroid", about = "Matroid, Grassmann necklace and Le-diagram toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate every matroid of a given rank as JSON lines.
    Matroids(MatroidsArgs),
    /// Compute the Grassmann necklace and positroid envelope of a matroid.
    Necklace(NecklaceArgs),
    /// Close a circuit family under circuit elimination.
    Closure(ClosureArgs),
    /// Enumerate every Le-diagram of a given type as JSON lines.
    LeDiagrams(LeDiagramsArgs),
    /// Convert a Grassmann necklace into its Le-diagram.
    LeDiagram(LeDiagramArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Matroids(args) => matroids::run(&args),
        Command::Necklace(args) => necklace::run(&args),
        Command::Closure(args) => closure::run(&args),
        Command::LeDiagrams(args) => le_diagrams::run(&args),
        Command::LeDiagram(args) => le_diagram::run(&args),
    }
}
