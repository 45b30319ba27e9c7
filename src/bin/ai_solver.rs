use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::HeuristicKind;
use eight_puzzle_solver::solver::search;
use eight_puzzle_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic guiding the search
    #[clap(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Give up after expanding this many boards
    #[clap(long)]
    max_expansions: Option<usize>,

    /// Goal configuration, e.g. "123456780" (defaults to the solved board)
    #[clap(long)]
    goal: Option<String>,

    /// Scramble the goal with this many random moves instead of reading a board file
    #[clap(long, conflicts_with = "board_file")]
    shuffle: Option<usize>,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Path to the board file (nine cells, e.g. three rows of "1 2 3")
    #[clap(required_unless_present = "shuffle")]
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn load_start(args: &Args, goal: &Board) -> Result<Board, String> {
    match (&args.board_file, args.shuffle) {
        (Some(path), _) => {
            let board = read_board_file(path)?;
            println!("Loaded board from {}\n", path.display());
            Ok(board)
        }
        (None, Some(steps)) => {
            println!("Scrambled the goal with {} moves (seed {})\n", steps, args.seed);
            Ok(Board::shuffled_with_seed(goal, steps, args.seed))
        }
        (None, None) => Err("Either a board file or --shuffle is required".to_string()),
    }
}

fn run(args: &Args) -> Result<(), String> {
    let goal = match &args.goal {
        Some(text) => board_from_str(text).map_err(|e| format!("Invalid goal: {}", e))?,
        None => Board::solved(),
    };
    let start = load_start(args, &goal)?;

    println!("Initial board state:\n{}\n", start);
    println!("Goal board state:\n{}\n", goal);
    if !start.is_reachable_from(&goal) {
        log::warn!("Start and goal have different parity; the search will exhaust the reachable states");
    }
    println!("Searching with the {} heuristic...\n", args.heuristic);

    let started = Instant::now();
    let result = search(&start, &goal, &args.heuristic, args.max_expansions);
    let elapsed = started.elapsed();

    let solution = result.map_err(|e| format!("{} ({:.3?})", e, elapsed))?;
    println!("Solution found:\n");
    println!("Moves ({}):", solution.cost());
    if solution.moves.is_empty() {
        println!("  No moves needed.");
    } else {
        for (i, (mv, board)) in solution.moves.iter().zip(&solution.path[1..]).enumerate() {
            println!("  Move {}: {}", i + 1, mv);
            for line in board.to_string().lines() {
                println!("    {}", line);
            }
        }
    }
    let compact: String = solution.moves.iter().map(|mv| mv.to_char()).collect();
    println!("\nMove string: {}", if compact.is_empty() { "-" } else { compact.as_str() });
    println!("Boards expanded: {}", solution.expanded);
    println!("Nodes generated: {}", solution.generated);
    println!("Peak frontier size: {}", solution.peak_frontier);
    println!("Time: {:.3?}", elapsed);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
