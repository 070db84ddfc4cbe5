mod config;
mod logger;

use std::io::Write as _;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_engine::{Board, Difficulty, GameOutcome, GameState, Mark, SearchStrategy};

use config::{Config, Validate, load_config};
use logger::game_log;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to a YAML config file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Board size N for an NxN game (3 to 20), overriding the config file.
    #[arg(long)]
    size: Option<usize>,

    /// Computer strength: easy, medium, hard, or expert.
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Fix the search depth in plies, overriding the engine's own policy.
    #[arg(long)]
    depth_limit: Option<usize>,

    /// RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Print timestamped engine events to stderr.
    #[arg(long)]
    verbose: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    match s.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        "expert" => Ok(Difficulty::Expert),
        _ => Err(format!(
            "unknown difficulty '{}', expected easy, medium, hard, or expert",
            s
        )),
    }
}

fn main() {
    let args = Args::parse();
    logger::init(args.verbose);

    let mut config = match load_config(&args.config) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(depth_limit) = args.depth_limit {
        config.depth_limit = Some(depth_limit);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        std::process::exit(1);
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    game_log!("rng seed: {}", seed);

    if let Err(err) = run_game(&config, &mut rng) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run_game(config: &Config, rng: &mut StdRng) -> Result<(), String> {
    let mut state = GameState::new(config.board_size).map_err(|e| e.to_string())?;
    println!(
        "Tic-tac-toe on a {0}x{0} board. You are X; enter moves as `row col` (0-indexed).",
        config.board_size
    );

    loop {
        print_board(state.board());

        match state.outcome() {
            GameOutcome::Win(mark) => {
                println!("Player {} wins!", mark.symbol());
                break;
            }
            GameOutcome::Draw => {
                println!("The game is a draw!");
                break;
            }
            GameOutcome::InProgress => {}
        }

        if state.current_mark() == Mark::X {
            let (row, col) = read_move(state.board().size())?;
            if let Err(err) = state.place(row, col) {
                println!("Invalid move: {}", err);
            }
        } else {
            println!("Computer's turn:");
            let pos = match config.depth_limit {
                Some(max_depth) => state.choose_computer_move_with_strategy(
                    config.difficulty,
                    SearchStrategy::DepthLimited { max_depth },
                    rng,
                ),
                None => state.choose_computer_move(config.difficulty, rng),
            }
            .map_err(|e| e.to_string())?;
            game_log!("computer plays ({}, {})", pos.row, pos.col);
            state.place(pos.row, pos.col).map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

fn read_move(size: usize) -> Result<(usize, usize), String> {
    loop {
        print!("Your move (row col, 0 to {}): ", size - 1);
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("input closed".to_string());
        }

        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        match (parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col))) => return Ok((row, col)),
            _ => println!("Invalid input. Please enter two numbers."),
        }
    }
}

fn print_board(board: &Board) {
    let n = board.size();
    let header: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    println!("   {}", header.join(" "));
    for row in 0..n {
        let cells: Vec<String> = (0..n)
            .map(|col| board.mark_at(row, col).symbol().to_string())
            .collect();
        println!("{:>2} {}", row, cells.join(" "));
    }
}
