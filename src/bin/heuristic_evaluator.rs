use anyhow::Result;
use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{Algorithm, SearchParam, Searcher};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares heuristics on seeded scrambled boards", long_about = None)]
struct Args {
    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Random blank moves applied to the goal to build each board
    #[clap(short, long, default_value_t = 12)]
    scramble: usize,

    /// Seed of the first board; later boards use consecutive seeds
    #[clap(long, default_value_t = 0)]
    start_seed: u64,
}

/// (moves, tested) per board for one strategy.
type Runs = Vec<(u32, u64)>;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut strategies: Vec<(Algorithm, Heuristic)> = Vec::new();
    for algorithm in [Algorithm::Greedy, Algorithm::AStar] {
        for heuristic in Heuristic::ALL {
            strategies.push((algorithm, heuristic));
        }
    }

    let mut all_runs: HashMap<(Algorithm, Heuristic), Runs> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards ({} scramble moves)...",
        args.boards, args.scramble
    );

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx;
        let board = Board::new_scrambled_with_seed(seed, args.scramble);
        println!("\nEvaluating Board {} (Seed: {}): {}", board_idx, seed, board.digit_string());

        for &(algorithm, heuristic) in &strategies {
            let mut searcher =
                Searcher::<Board>::new(algorithm, SearchParam::Heuristic(heuristic))?;
            let outcome = searcher.find_solution(board.clone());
            let Some(solution) = outcome.solution() else {
                eprintln!(
                    "Warning: {} with {} found no solution for seed {}",
                    algorithm, heuristic, seed
                );
                continue;
            };
            println!(
                "  {:<6} {:<3}: {:>3} moves, {:>8} tested",
                algorithm,
                heuristic,
                solution.depth(),
                searcher.num_tested()
            );
            all_runs
                .entry((algorithm, heuristic))
                .or_default()
                .push((solution.depth(), searcher.num_tested()));
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("\n--- Averages ---");

    let mut averages: Vec<(Algorithm, Heuristic, f64, f64)> = all_runs
        .iter()
        .filter(|(_, runs)| !runs.is_empty())
        .map(|(&(algorithm, heuristic), runs)| {
            let n = runs.len() as f64;
            let moves = runs.iter().map(|&(m, _)| f64::from(m)).sum::<f64>() / n;
            let tested = runs.iter().map(|&(_, t)| t as f64).sum::<f64>() / n;
            (algorithm, heuristic, moves, tested)
        })
        .collect();

    // Fewest tested nodes first.
    averages.sort_by(|a, b| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal));

    for (algorithm, heuristic, moves, tested) in averages {
        println!(
            "{:<6} {:<3}: Average Moves = {:.2}, Average Tested = {:.2}",
            algorithm, heuristic, moves, tested
        );
    }
    Ok(())
}
