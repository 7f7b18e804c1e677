//! Depth-limited minimax search with alpha-beta pruning

use log::debug;

use crate::{
    board::{Board, Side},
    heuristic::{self, WindowScope},
    WIN_SCORE,
};

/// The outcome of a search: the chosen column and its minimax value
///
/// Scores are always from YOU's perspective: `WIN_SCORE` for a YOU win,
/// `-WIN_SCORE` for a CPU win, 0 for a draw, and the static heuristic in
/// between. `column` is `None` when the searched position is already decided,
/// has no legal moves, or was evaluated at depth 0.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// A minimax searcher working on a single borrowed board
///
/// # Notes
/// Moves are tried in ascending column order and a later column only replaces
/// the best move on a strict improvement, so ties go to the lowest column.
/// Every speculative move is undone before the next is tried, so the board
/// is left exactly as it was found.
pub struct Searcher<'a> {
    board: &'a mut Board,
    scope: WindowScope,
    pruning: bool,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Searcher<'a> {
    /// Creates a new `Searcher` with alpha-beta pruning and the full heuristic
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            scope: WindowScope::default(),
            pruning: true,
            node_count: 0,
        }
    }

    /// Selects which windows the static heuristic scores
    pub fn with_scope(mut self, scope: WindowScope) -> Self {
        self.scope = scope;
        self
    }

    /// Disables alpha-beta pruning, turning the search into plain minimax
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Searches `depth` plies ahead with `side` to move
    pub fn search(&mut self, side: Side, depth: u32) -> SearchResult {
        self.node_count = 0;
        let result = self.minimax(depth, i32::MIN, i32::MAX, side.is_maximizing());
        debug!(
            "depth {} search for {}: column {:?}, score {}, {} nodes",
            depth, side, result.column, result.score, self.node_count
        );
        result
    }

    fn minimax(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        if let Some(winner) = self.board.winner() {
            return SearchResult {
                column: None,
                score: winner.sign() * WIN_SCORE,
            };
        }

        let moves = self.board.possible_moves();
        if moves.is_empty() {
            return SearchResult {
                column: None,
                score: 0,
            };
        }

        if depth == 0 {
            return SearchResult {
                column: None,
                score: heuristic::evaluate(&*self.board, self.scope),
            };
        }

        let side = if maximizing { Side::You } else { Side::Cpu };
        let mut best = moves[0];
        let mut value = if maximizing { i32::MIN } else { i32::MAX };

        for &column in moves.iter() {
            self.board.play(column, side);
            let child = self.minimax(depth - 1, alpha, beta, !maximizing).score;
            let undone = self.board.undo_move(column);
            debug_assert_eq!(undone, Some(side));

            if maximizing {
                if child > value {
                    value = child;
                    best = column;
                }
                alpha = alpha.max(value);
            } else {
                if child < value {
                    value = child;
                    best = column;
                }
                beta = beta.min(value);
            }

            // the opponent already has a better option elsewhere
            if self.pruning && alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best),
            score: value,
        }
    }
}

impl std::ops::Deref for Searcher<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

/// Searches with the default settings: pruning on, every heuristic window scored
pub fn search(board: &mut Board, side: Side, depth: u32) -> SearchResult {
    Searcher::new(board).search(side, depth)
}
