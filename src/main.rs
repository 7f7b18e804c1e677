use anyhow::Result;
use rand::thread_rng;

use std::io::{stdin, stdout, Write};
use std::str::FromStr;

use connect_four::{
    arena::{run_experiment, Experiment, Policy},
    board::{Board, Side},
    policy::quick_cpu_move,
    DEFAULT_COLUMNS, DEFAULT_DEPTH, DEFAULT_ROWS,
};

mod display;
use display::*;

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin().read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

// empty input picks the default
fn ask_number<T: FromStr + std::fmt::Display + Copy>(question: &str, default: T) -> Result<T> {
    loop {
        let mut buffer = String::new();
        print!("{} [{}]: ", question, default);
        stdout().flush().expect("failed to flush to stdout!");
        stdin().read_line(&mut buffer)?;
        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number: {}", answer),
        }
    }
}

fn ask_board() -> Result<Board> {
    loop {
        let rows = ask_number("Number of rows", DEFAULT_ROWS)?;
        let columns = ask_number("Number of columns", DEFAULT_COLUMNS)?;
        match Board::new(rows, columns) {
            Ok(board) => return Ok(board),
            Err(err) => println!("{}", err),
        }
    }
}

fn experiment(board: &Board) -> Result<()> {
    let depth = ask_number("Search depth for YOU", DEFAULT_DEPTH)?;
    let games = ask_number("Number of games", 1000usize)?;

    for &cpu in [Policy::Quick, Policy::Random].iter() {
        let tally = run_experiment(&Experiment {
            rows: board.rows(),
            columns: board.columns(),
            you: Policy::Search { depth },
            cpu,
            games,
            seed: 0,
            show_progress: true,
        })?;
        println!(
            "YOU (depth {}) vs CPU ({:?}): YOU won {:.1}%, CPU won {:.1}%, drawn {:.1}%",
            depth,
            cpu,
            tally.win_rate(Side::You) * 100.0,
            tally.win_rate(Side::Cpu) * 100.0,
            tally.draw_rate() * 100.0,
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    println!("Welcome to Connect 4\n");

    let mut board = ask_board()?;

    if ask_yes_no("Run a win-rate experiment instead of a game?")? {
        return experiment(&board);
    }

    // choose whether YOU is played by the search engine
    let optimal_depth = if ask_yes_no("Should YOU play optimally?")? {
        Some(ask_number("Search depth", DEFAULT_DEPTH)?)
    } else {
        None
    };

    let mut rng = thread_rng();
    let mut side = Side::You;
    let mut turns = 0;

    // game loop
    loop {
        display(&board).expect("Failed to draw board!");

        if let Some(winner) = board.winner() {
            match winner {
                Side::You => println!("YOU win after {} turns!", turns),
                Side::Cpu => println!("CPU wins after {} turns!", turns),
            }
            break;
        }
        if board.is_full() {
            println!("Draw after {} turns!", turns);
            break;
        }

        let next_move = match (side, optimal_depth) {
            (Side::Cpu, _) => quick_cpu_move(&mut board, &mut rng),
            (Side::You, Some(depth)) => {
                println!("YOU is thinking...");
                Policy::Search { depth }.choose(&mut board, Side::You, &mut rng)
            }
            (Side::You, None) => {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin().read_line(&mut input_str)?;

                match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                    Ok(column) => Some(column),
                }
            }
        };

        // only a full board leaves no move, and that was handled above
        let column = match next_move {
            Some(column) => column,
            None => continue,
        };

        if let Err(err) = board.apply_move(column, side) {
            println!("{}", err);
            // try the move again
            continue;
        }
        if side == Side::Cpu {
            println!("CPU plays column {}", column);
        }
        turns += 1;
        side = side.opponent();
    }
    Ok(())
}
