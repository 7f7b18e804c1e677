//! Headless games between two policies, and experiments tallying their results

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use std::time::Instant;

use crate::{
    board::{Board, Side},
    policy::{quick_move, random_move},
    search::search,
    Error,
};

/// How a side picks its moves
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Policy {
    /// Minimax search to a fixed depth
    Search { depth: u32 },
    /// Immediate win, else center with some probability, else random
    Quick,
    /// Uniformly random legal column
    Random,
}

impl Policy {
    /// Chooses a column for `side`, `None` only when no legal move exists
    ///
    /// A depth 0 search never yields a column, so it plays the lowest legal
    /// column instead.
    pub fn choose<R: Rng + ?Sized>(&self, board: &mut Board, side: Side, rng: &mut R) -> Option<usize> {
        match *self {
            Policy::Search { depth } => search(board, side, depth)
                .column
                .or_else(|| board.possible_moves().first().copied()),
            Policy::Quick => quick_move(board, side, rng),
            Policy::Random => random_move(board, rng),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// A finished game
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Every move in the order played
    pub moves: Vec<(Side, usize)>,
    pub outcome: Outcome,
    /// The final position
    pub board: Board,
}

/// Plays one game to completion, YOU moving first
pub fn play_game<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    you: Policy,
    cpu: Policy,
    rng: &mut R,
) -> Result<GameRecord, Error> {
    let mut board = Board::new(rows, columns)?;
    let mut moves = Vec::new();
    let mut side = Side::You;

    let outcome = loop {
        if let Some(winner) = board.winner() {
            break Outcome::Win(winner);
        }
        let policy = match side {
            Side::You => you,
            Side::Cpu => cpu,
        };
        let column = match policy.choose(&mut board, side, rng) {
            Some(column) => column,
            None => break Outcome::Draw,
        };
        board.apply_move(column, side)?;
        moves.push((side, column));
        side = side.opponent();
    };

    Ok(GameRecord {
        moves,
        outcome,
        board,
    })
}

/// Game counts per result
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Tally {
    pub you_wins: usize,
    pub cpu_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::You) => self.you_wins += 1,
            Outcome::Win(Side::Cpu) => self.cpu_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.you_wins + self.cpu_wins + self.draws
    }

    /// The fraction of games won by `side`, 0 when no games were played
    pub fn win_rate(&self, side: Side) -> f64 {
        let wins = match side {
            Side::You => self.you_wins,
            Side::Cpu => self.cpu_wins,
        };
        self.rate(wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: usize) -> f64 {
        match self.games() {
            0 => 0.0,
            games => count as f64 / games as f64,
        }
    }
}

/// A batch of independent games between two fixed policies
#[derive(Clone, Debug)]
pub struct Experiment {
    pub rows: usize,
    pub columns: usize,
    pub you: Policy,
    pub cpu: Policy,
    pub games: usize,
    /// game `i` is seeded with `seed + i`, so results do not depend on thread scheduling
    pub seed: u64,
    pub show_progress: bool,
}

/// Plays every game of the experiment in parallel and tallies the outcomes
pub fn run_experiment(experiment: &Experiment) -> Result<Tally, Error> {
    // reject bad dimensions before spawning any work
    Board::new(experiment.rows, experiment.columns)?;

    let start = Instant::now();
    let progress = if experiment.show_progress {
        ProgressBar::new(experiment.games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let outcomes = (0..experiment.games)
        .into_par_iter()
        .map(|game| -> Result<Outcome, Error> {
            let mut rng = StdRng::seed_from_u64(experiment.seed.wrapping_add(game as u64));
            let record = play_game(
                experiment.rows,
                experiment.columns,
                experiment.you,
                experiment.cpu,
                &mut rng,
            )?;
            progress.inc(1);
            Ok(record.outcome)
        })
        .collect::<Result<Vec<Outcome>, Error>>()?;
    progress.finish();

    let mut tally = Tally::default();
    for outcome in outcomes {
        tally.record(outcome);
    }

    info!(
        "{} games of {:?} vs {:?} on {}x{} in {:.1}s: YOU {:.1}%, CPU {:.1}%, draws {:.1}%",
        tally.games(),
        experiment.you,
        experiment.cpu,
        experiment.rows,
        experiment.columns,
        start.elapsed().as_secs_f64(),
        tally.win_rate(Side::You) * 100.0,
        tally.win_rate(Side::Cpu) * 100.0,
        tally.draw_rate() * 100.0,
    );
    Ok(tally)
}
