use clap::Parser;
use eight_puzzle_solver::engine::{Game, Move};
use eight_puzzle_solver::heuristics::HeuristicKind;
use eight_puzzle_solver::solver::search;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the 8-puzzle in the terminal", long_about = None)]
struct Args {
    /// Number of random moves used to scramble the board
    #[clap(long, default_value_t = 20)]
    steps: usize,

    /// Seed for the scramble
    #[clap(long, default_value_t = 514514)]
    seed: u64,
}

fn parse_move(input: &str) -> Option<Move> {
    match input {
        "w" | "up" => Some(Move::Up),
        "s" | "down" => Some(Move::Down),
        "a" | "left" => Some(Move::Left),
        "d" | "right" => Some(Move::Right),
        _ => None,
    }
}

fn show_hint(game: &Game) {
    match search(game.board(), game.goal(), &HeuristicKind::Manhattan, None) {
        Ok(solution) => match solution.moves.first() {
            Some(mv) => println!("Hint: slide {} ({} moves left with best play).", mv, solution.cost()),
            None => println!("Hint: the board is already solved."),
        },
        Err(e) => println!("No hint available: {}", e),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut game = Game::new_with_seed(args.steps, args.seed);
    println!("Welcome to the 8-puzzle!");
    println!("Goal:\n{}", game.goal());

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.board());

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        print!("Slide the blank (w/a/s/d or up/down/left/right), 'h' for a hint, 'u' to undo, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        let trimmed_input = input.trim().to_lowercase();
        match trimmed_input.as_str() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (no moves made).");
                }
            }
            "h" => show_hint(&game),
            other => match parse_move(other) {
                Some(mv) => {
                    if !game.slide(mv) {
                        println!("Invalid move: the blank cannot slide {} from here.", mv);
                    }
                }
                None => println!("Invalid input. Use w/a/s/d, 'h', 'u', or 'q'."),
            },
        }
    }
}
