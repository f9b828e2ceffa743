//! Othello-Minimax: an Othello (Reversi) engine with minimax search.
//!
//! This crate finds legal moves, applies their captures, scores positions
//! with a family of heuristics, and searches a fixed number of plies with
//! alpha-beta pruning to choose a move for the computer.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, sentinel scores, positional weights, defaults
//! - [`board`] - Cells, sides, coordinates, and the 8x8 board
//! - [`capture`] - Move legality, flips, and move application
//! - [`heuristics`] - Position evaluation functions and their configuration
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`game`] - Human vs computer sessions and self-play
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_minimax::board::{Board, Side};
//! use othello_minimax::capture::{apply_move, legal_moves};
//! use othello_minimax::heuristics::{HeuristicConfig, HeuristicKind, Weights};
//! use othello_minimax::search::{SearchConfig, choose_move};
//!
//! let mut board = Board::new();
//! assert_eq!(legal_moves(&board, Side::Dark).len(), 4);
//!
//! // Let the engine pick Dark's opening move
//! let heuristic = HeuristicConfig::new(HeuristicKind::StableHybrid, Weights::default());
//! let config = SearchConfig::new(heuristic, 3, true);
//! let mut rng = fastrand::Rng::with_seed(2024);
//! let result = choose_move(&board, Side::Dark, &config, &mut rng).unwrap();
//!
//! let best = result.best_move.unwrap();
//! apply_move(&mut board, Side::Dark, best).unwrap();
//! println!("Dark plays {best}, score {:?}", result.score);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod heuristics;
pub mod search;
