//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search alternates between a maximizing frame (the computer to move)
//! and a minimizing frame (its opponent to move), implemented as a single
//! recursive function with a `maximizing` flag.
//!
//! A frame that has run out of depth, or whose side to move has no legal
//! move, returns [`Eval::NoMove`] instead of a score. The parent then
//! evaluates the child board directly with the configured heuristic. Scores
//! coming back from a deeper frame are used as they are and tighten the
//! alpha-beta window.
//!
//! The root frame never prunes, so every legal root move gets a score.
//! Move order is shuffled at every node from a caller-supplied
//! [`fastrand::Rng`]; the same seed reproduces the same search.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Coord, Side};
use crate::capture::{legal_captures, place};
use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::error::ConfigError;
use crate::heuristics::HeuristicConfig;

/// Outcome of one search frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Eval {
    /// A backed-up heuristic score
    Value(i32),
    /// Depth exhausted, or the side to move must pass
    NoMove,
}

impl Eval {
    /// The numeric form: `NoMove` maps to the sentinel of the frame that produced it.
    pub fn score_or(self, sentinel: i32) -> i32 {
        match self {
            Eval::Value(score) => score,
            Eval::NoMove => sentinel,
        }
    }
}

/// Everything the search needs besides the position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: HeuristicConfig,
    /// Plies to search, must be positive
    pub depth: u32,
    pub alpha_beta: bool,
}

impl SearchConfig {
    pub fn new(heuristic: HeuristicConfig, depth: u32, alpha_beta: bool) -> Self {
        Self {
            heuristic,
            depth,
            alpha_beta,
        }
    }

    /// Reject configurations that would make the search meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::NonPositiveDepth);
        }
        self.heuristic.weights.validate()
    }
}

/// Result of a top-level search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Move to play, `None` if the computer must pass
    pub best_move: Option<Coord>,
    pub score: Eval,
    /// Number of moves evaluated across the whole tree
    pub nodes: u64,
}

/// Per-search state threaded through the recursion.
struct Searcher<'a> {
    config: &'a SearchConfig,
    /// The side the search is choosing a move for
    computer: Side,
    rng: &'a mut Rng,
    nodes: u64,
}

/// Choose a move for `side` on `board`.
///
/// The configuration is validated before any traversal. The board itself is
/// never modified; every branch works on its own copy.
pub fn choose_move(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    rng: &mut Rng,
) -> Result<SearchResult, ConfigError> {
    config.validate()?;

    let mut searcher = Searcher {
        config,
        computer: side,
        rng,
        nodes: 0,
    };
    let (best_move, score) = searcher.search(board, config.depth, true, MIN_SCORE, MAX_SCORE, true);

    debug!(
        side = %side,
        heuristic = %config.heuristic.kind,
        depth = config.depth,
        alpha_beta = config.alpha_beta,
        nodes = searcher.nodes,
        best = ?best_move.map(|c| c.to_string()),
        score = ?score,
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    })
}

impl Searcher<'_> {
    /// One minimax frame.
    ///
    /// `alpha` and `beta` are owned by this frame: narrowing them here never
    /// affects the caller.
    fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        root: bool,
    ) -> (Option<Coord>, Eval) {
        if depth == 0 {
            return (None, Eval::NoMove);
        }

        let to_move = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut moves = legal_captures(board, to_move);
        self.rng.shuffle(&mut moves);
        if moves.is_empty() {
            return (None, Eval::NoMove);
        }

        let prune = self.config.alpha_beta;
        let mut best_move = None;
        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for (mv, flips) in moves {
            self.nodes += 1;

            let mut child = *board;
            place(&mut child, to_move, mv, &flips);

            let (_, eval) = self.search(&child, depth - 1, !maximizing, alpha, beta, false);
            let score = match eval {
                Eval::NoMove => self.config.heuristic.evaluate(&child, self.computer),
                Eval::Value(score) => {
                    if prune {
                        if maximizing {
                            alpha = alpha.max(score);
                        } else {
                            beta = beta.min(score);
                        }
                    }
                    score
                }
            };

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_move = Some(mv);
                best_score = score;
            }

            if prune && !root {
                let cutoff = if maximizing {
                    best_score >= beta
                } else {
                    best_score <= alpha
                };
                if cutoff {
                    break;
                }
            }
        }

        match best_move {
            Some(_) => (best_move, Eval::Value(best_score)),
            None => (None, Eval::NoMove),
        }
    }
}
