//! Connect4-Rust: play Connect-Four in the terminal.
//!
//! ## Usage
//!
//! - `connect4-rust` - Watch minimax play against MCTS
//! - `connect4-rust play` - Human vs human
//! - `connect4-rust play --opponent monte-carlo --difficulty 3` - Human vs AI
//! - `connect4-rust watch --player1 minimax --player2 minimax` - AI vs AI

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use connect4_rust::board::{Board, Player, TerminalValue};
use connect4_rust::config::{Difficulty, EngineConfig, Opponent};
use connect4_rust::constants::{DEPTH_STEP, ITERATION_STEP, ITERMAX, MAX_DEPTH, MAX_INPUT_ATTEMPTS};
use connect4_rust::game::{Game, parse_column};
use connect4_rust::selector::MoveSelector;

/// Connect4-Rust: a Connect-Four engine with minimax and MCTS opponents
#[derive(Parser)]
#[command(name = "connect4-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Minimax depth at medium difficulty
    #[arg(long, global = true, default_value_t = MAX_DEPTH)]
    depth: usize,

    /// MCTS iterations at medium difficulty
    #[arg(long, global = true, default_value_t = ITERMAX)]
    iterations: usize,

    /// Seed for the AI's random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, against another person or an AI
    Play {
        /// AI playing Player2; omit for human vs human
        #[arg(long, value_enum)]
        opponent: Option<Opponent>,

        /// 1 = easy, 2 = medium, 3 = hard
        #[arg(long, default_value_t = 2)]
        difficulty: u8,
    },
    /// Watch two AIs play each other
    Watch {
        #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
        player1: Opponent,

        #[arg(long, value_enum, default_value_t = Opponent::MonteCarlo)]
        player2: Opponent,

        /// 1 = easy, 2 = medium, 3 = hard
        #[arg(long, default_value_t = 2)]
        difficulty: u8,
    },
}

/// Who decides the moves for one side.
#[derive(Copy, Clone)]
enum Seat {
    Human,
    Ai(Opponent),
}

impl Seat {
    fn label(self, player: Player) -> String {
        match self {
            Seat::Human => format!("{player}"),
            Seat::Ai(opponent) => format!("{player} ({opponent})"),
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = EngineConfig {
        max_depth: cli.depth,
        iterations: cli.iterations,
        depth_step: DEPTH_STEP,
        iteration_step: ITERATION_STEP,
    };
    let mut selector = match cli.seed {
        Some(seed) => MoveSelector::with_seed(config, seed),
        None => MoveSelector::new(config),
    };

    let command = cli.command.unwrap_or(Commands::Watch {
        player1: Opponent::Minimax,
        player2: Opponent::MonteCarlo,
        difficulty: 2,
    });

    let (seats, difficulty) = match command {
        Commands::Play {
            opponent,
            difficulty,
        } => {
            let second = opponent.map_or(Seat::Human, Seat::Ai);
            ([Seat::Human, second], difficulty)
        }
        Commands::Watch {
            player1,
            player2,
            difficulty,
        } => ([Seat::Ai(player1), Seat::Ai(player2)], difficulty),
    };
    let difficulty = Difficulty::try_from(difficulty)?;

    println!("Welcome to Connect-Four!");
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&mut game, seats, difficulty, &mut selector, &mut input)
}

/// Play one game to the end.
fn run_session(
    game: &mut Game,
    seats: [Seat; 2],
    difficulty: Difficulty,
    selector: &mut MoveSelector,
    input: &mut impl BufRead,
) -> Result<()> {
    info!(?difficulty, "new game");

    while !game.is_over() {
        let player = game.to_move();
        let seat = match player {
            Player::Player1 => seats[0],
            Player::Player2 => seats[1],
        };

        println!("\n{}", game.board());
        let column = match seat {
            Seat::Human => {
                println!("{} it's your turn!", seat.label(player));
                read_column(input, game.board())?
            }
            Seat::Ai(opponent) => {
                println!("{} is thinking...", seat.label(player));
                let column = selector
                    .select_move(game.board(), player, opponent, difficulty)
                    .context("AI could not pick a move")?;
                println!("{} plays column {}", seat.label(player), column + 1);
                column
            }
        };
        game.play(column)?;
    }

    println!("\n{}", game.board());
    match game.outcome() {
        TerminalValue::Player1Wins => println!("{} wins!", seats[0].label(Player::Player1)),
        TerminalValue::Player2Wins => println!("{} wins!", seats[1].label(Player::Player2)),
        _ => println!("Game ended in a draw!"),
    }
    Ok(())
}

/// Prompt until a playable column is entered, giving up after
/// `MAX_INPUT_ATTEMPTS` bad entries.
fn read_column(input: &mut impl BufRead, board: &Board) -> Result<usize> {
    let mut stdout = io::stdout();

    for _ in 0..MAX_INPUT_ATTEMPTS {
        print!("Choose a column: ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }

        match parse_column(&line) {
            Ok(column) if board.valid_moves().contains(&column) => return Ok(column),
            Ok(column) => println!("Column {} is full!", column + 1),
            Err(e) => println!("{e}"),
        }
    }

    bail!("no valid column after {MAX_INPUT_ATTEMPTS} attempts")
}
