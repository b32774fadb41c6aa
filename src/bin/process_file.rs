use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_solver::batch::process_lines;
use eight_puzzle_solver::solver::{Algorithm, CancelFlag};
use eight_puzzle_solver::utils::parse_search_param;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File with one digit-string configuration per line
    puzzle_file: PathBuf,

    /// Search algorithm: random, BFS, DFS, Greedy or A*
    algorithm: String,

    /// Depth limit for random/BFS/DFS (-1 for none), or heuristic for Greedy/A* (h0, h1, h2)
    #[clap(allow_hyphen_values = true)]
    param: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.puzzle_file)
        .with_context(|| format!("Failed to read file: {}", args.puzzle_file.display()))?;
    let algorithm: Algorithm = args.algorithm.parse()?;
    let param = parse_search_param(algorithm, &args.param)?;

    // Ctrl-C abandons the current puzzle only.
    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || handler_flag.cancel())
        .context("failed to install Ctrl-C handler")?;

    let summary = process_lines(&content, algorithm, param, &cancel, |entry| {
        println!("{}", entry)
    })?;

    println!("\n{}", summary);
    Ok(())
}
