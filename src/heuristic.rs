//! Static evaluation of undecided positions at the search horizon

use crate::board::{Board, Cell, Direction, Window};
use crate::{CONNECT_NUMBER, PER_YOU_SCORE};

/// Which windows contribute to the static evaluation
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WindowScope {
    /// Sum every window in every direction
    All,
    /// Only the first window of each direction's scan, i.e. the windows
    /// anchored at the top of the board. Much weaker, kept so games against
    /// the narrow evaluator can be reproduced.
    FirstPerDirection,
}

impl Default for WindowScope {
    fn default() -> Self {
        WindowScope::All
    }
}

/// Scores a single window from YOU's perspective
pub fn score_window(window: &Window) -> i32 {
    let you = window.iter().filter(|&&cell| cell == Cell::You).count() as i32;
    let cpu = window.iter().filter(|&&cell| cell == Cell::Cpu).count() as i32;

    if you == CONNECT_NUMBER as i32 {
        CONNECT_NUMBER as i32 * PER_YOU_SCORE * 100
    } else if cpu > 0 && you == 0 {
        -cpu + CONNECT_NUMBER as i32
    } else if you > 0 && cpu == 0 {
        you * PER_YOU_SCORE + CONNECT_NUMBER as i32
    } else {
        // mixed or empty
        0
    }
}

/// Evaluates the board from YOU's perspective, positive values favouring YOU
pub fn evaluate(board: &Board, scope: WindowScope) -> i32 {
    Direction::ALL
        .iter()
        .map(|&direction| {
            let windows = board.windows(direction);
            match scope {
                WindowScope::All => windows.map(|window| score_window(&window)).sum::<i32>(),
                WindowScope::FirstPerDirection => windows
                    .take(1)
                    .map(|window| score_window(&window))
                    .sum::<i32>(),
            }
        })
        .sum()
}
