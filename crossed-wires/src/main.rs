use std::fs;
use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use crossed_wires::solve;

/// Trace two wires over a shared grid and report their closest and
/// cheapest crossings.
#[derive(Debug, Parser)]
struct Cli {
    /// Print the map after each pass
    #[arg(short, long)]
    print: bool,

    /// Puzzle input file, one wire per line
    input: PathBuf,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let input = fs::read_to_string(&cli.input)
        .into_diagnostic()
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let report = solve::run(&input, cli.print)?;
    let maps = report.maps.as_ref();

    if let Some([map, _]) = maps {
        print!("{map}");
    }
    match report.part1 {
        Some(distance) => println!("part1: {distance}"),
        None => println!("part1: no crossing found"),
    }

    if let Some([_, map]) = maps {
        print!("{map}");
    }
    match report.part2 {
        Some(cost) => println!("part2: {cost}"),
        None => println!("part2: no crossing found"),
    }

    Ok(())
}
