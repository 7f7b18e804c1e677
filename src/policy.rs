//! Cheap move choices that do not search the game tree

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, Side},
    CENTER_PREFERENCE,
};

/// Returns the first column that wins the game for `side` on the spot
pub fn immediate_win(board: &mut Board, side: Side) -> Option<usize> {
    board.possible_moves().into_iter().find(|&column| {
        board.play(column, side);
        let won = board.has_won(side);
        board.undo_move(column);
        won
    })
}

/// The center column, 1-based
pub fn center_column(board: &Board) -> usize {
    board.columns() / 2 + 1
}

/// Picks uniformly among the legal columns, `None` on a full board
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.possible_moves().choose(rng).copied()
}

/// The quick-move policy for either side
///
/// Takes an immediate win when one exists, otherwise prefers the center
/// column with probability `CENTER_PREFERENCE`, otherwise plays a uniformly
/// random legal column. Returns `None` when there is no legal move.
pub fn quick_move<R: Rng + ?Sized>(board: &mut Board, side: Side, rng: &mut R) -> Option<usize> {
    if let Some(column) = immediate_win(board, side) {
        trace!("{} takes the winning column {}", side, column);
        return Some(column);
    }

    let center = center_column(board);
    if rng.gen_bool(CENTER_PREFERENCE) && board.is_move_valid(center) {
        trace!("{} prefers the center column {}", side, center);
        return Some(center);
    }

    let column = random_move(board, rng);
    trace!("{} picks column {:?} at random", side, column);
    column
}

/// The default CPU policy
pub fn quick_cpu_move<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<usize> {
    quick_move(board, Side::Cpu, rng)
}
