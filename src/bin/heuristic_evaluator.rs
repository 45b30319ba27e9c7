use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::HeuristicKind;
use eight_puzzle_solver::solver::search;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares the built-in heuristics on seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to solve
    #[clap(long, default_value_t = 20)]
    boards: usize,

    /// Number of random moves used to scramble each board
    #[clap(long, default_value_t = 40)]
    steps: usize,

    /// Seed of the first board; board `i` uses `seed + i`
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Leave out uniform-cost search (the `zero` heuristic), which is slow on long scrambles
    #[clap(long)]
    skip_zero: bool,
}

#[derive(Clone, Copy, Debug)]
struct RunStats {
    cost: usize,
    expanded: usize,
    elapsed: Duration,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let strategies: Vec<HeuristicKind> = HeuristicKind::ALL
        .into_iter()
        .filter(|&kind| !(args.skip_zero && kind == HeuristicKind::Zero))
        .collect();

    let mut all_stats: HashMap<HeuristicKind, Vec<RunStats>> = HashMap::new();
    for kind in &strategies {
        all_stats.insert(*kind, Vec::new());
    }

    let goal = Board::solved();
    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let start = Board::shuffled_with_seed(&goal, args.steps, current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);
        let mut costs = Vec::new();

        for kind in &strategies {
            let started = Instant::now();
            let solution = match search(&start, &goal, kind, None) {
                Ok(solution) => solution,
                Err(e) => {
                    // Scrambles are reachable by construction, so this is a solver bug.
                    log::error!("Heuristic {} failed on board {} (Seed: {}): {}", kind, board_idx, current_seed, e);
                    continue;
                }
            };
            let stats = RunStats {
                cost: solution.cost(),
                expanded: solution.expanded,
                elapsed: started.elapsed(),
            };
            println!(
                "  Heuristic: {:<10}, Moves: {:<3}, Expanded: {:<7}, Time: {:.3?}",
                kind.to_string(),
                stats.cost,
                stats.expanded,
                stats.elapsed
            );
            costs.push(stats.cost);
            if let Some(runs) = all_stats.get_mut(kind) {
                runs.push(stats);
            }
        }

        if costs.windows(2).any(|pair| pair[0] != pair[1]) {
            log::warn!(
                "Heuristics disagree on the optimal length of board {} (Seed: {}): {:?}",
                board_idx,
                current_seed,
                costs
            );
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!(
        "Heuristics evaluated: {}",
        strategies.iter().map(|kind| kind.to_string()).collect::<Vec<String>>().join(", ")
    );
    println!("\n--- Averages ---");

    let mut averages: Vec<(HeuristicKind, f64, f64, Duration)> = Vec::new();
    for (kind, runs) in &all_stats {
        if runs.is_empty() {
            println!("Heuristic {}: No runs recorded.", kind);
            continue;
        }
        let n = runs.len() as f64;
        let avg_cost = runs.iter().map(|r| r.cost).sum::<usize>() as f64 / n;
        let avg_expanded = runs.iter().map(|r| r.expanded).sum::<usize>() as f64 / n;
        let avg_time = runs.iter().map(|r| r.elapsed).sum::<Duration>() / runs.len() as u32;
        averages.push((*kind, avg_cost, avg_expanded, avg_time));
    }

    // Fewest expansions first
    averages.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    for (kind, avg_cost, avg_expanded, avg_time) in averages {
        println!(
            "Heuristic {:<10}: Average Moves = {:.2}, Average Expanded = {:.1}, Average Time = {:.3?}",
            kind.to_string(),
            avg_cost,
            avg_expanded,
            avg_time
        );
    }
}
