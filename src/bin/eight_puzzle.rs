use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{Algorithm, SearchOutcome, Searcher};
use eight_puzzle_solver::utils::parse_search_param;
use log::{debug, warn};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Initial configuration as a digit string, 0 being the blank (e.g. 142358607)
    board: String,

    /// Search algorithm: random, BFS, DFS, Greedy or A*
    algorithm: String,

    /// Depth limit for random/BFS/DFS (-1 for none), or heuristic for Greedy/A* (h0, h1, h2)
    #[clap(allow_hyphen_values = true)]
    param: String,

    /// Print the moves of the solution without asking
    #[clap(short, long)]
    show_moves: bool,

    /// Never print the moves and skip the prompt
    #[clap(long, conflicts_with = "show_moves")]
    no_prompt: bool,

    /// Seed for the random algorithm
    #[clap(long)]
    seed: Option<u64>,
}

fn ask_show_moves() -> Result<bool> {
    print!("Show the moves (y/n)? ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read answer")?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("invalid board '{}'", args.board))?;
    let algorithm: Algorithm = args.algorithm.parse().with_context(|| {
        let known: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        format!("expected one of: {}", known.join(", "))
    })?;
    let param = parse_search_param(algorithm, &args.param)?;

    let mut searcher = Searcher::<Board>::new(algorithm, param)?;
    if let Some(seed) = args.seed {
        searcher = searcher.with_seed(seed);
    }

    if !board.is_solvable() {
        warn!(
            "{} cannot reach the goal; only exhaustion or Ctrl-C will end the search",
            board.digit_string()
        );
    }

    let cancel = searcher.cancel_flag();
    ctrlc::set_handler(move || cancel.cancel()).context("failed to install Ctrl-C handler")?;

    println!("Initial board state:\n{}", board);

    let start = Instant::now();
    let outcome = searcher.find_solution(board);
    let elapsed = start.elapsed();

    if matches!(outcome, SearchOutcome::Cancelled) {
        println!("Search terminated.");
    }
    println!(
        "{} time = {:.3}s, {} states",
        algorithm,
        elapsed.as_secs_f64(),
        searcher.num_tested()
    );
    debug!("{}", searcher);

    match outcome.into_solution() {
        None => println!("Failed to find a solution."),
        Some(solution) => {
            println!("Found a solution requiring {} moves.", solution.depth());
            let show = if args.show_moves {
                true
            } else if args.no_prompt {
                false
            } else {
                ask_show_moves()?
            };
            if show {
                solution.print_moves_to()?;
            }
        }
    }

    Ok(())
}
