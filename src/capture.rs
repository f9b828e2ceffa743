//! Move legality and capture detection.
//!
//! A placement is legal when, in at least one of the eight directions, it
//! brackets a contiguous run of opponent discs against one of the mover's own
//! discs. The union of all bracketed runs is the move's [`FlipSet`]; an empty
//! union means the move is illegal.

use crate::board::{Board, Cell, Coord, Side, on_board};
use crate::constants::{DIRECTIONS, N};
use crate::error::MoveError;

/// Cells that change colour as the result of one move. Never empty for a legal move.
pub type FlipSet = Vec<Coord>;

/// Compute the discs captured by `side` playing at `coord`.
///
/// Returns `None` if the move is illegal: the target is off the board or
/// occupied, or no direction brackets an opponent run.
pub fn compute_flips(board: &Board, side: Side, coord: Coord) -> Option<FlipSet> {
    if coord.row >= N || coord.col >= N || board.get(coord) != Cell::Empty {
        return None;
    }

    let own = side.cell();
    let theirs = side.opponent().cell();
    let mut flips = FlipSet::new();
    let mut run = Vec::with_capacity(6);

    for (dr, dc) in DIRECTIONS {
        run.clear();
        let mut r = coord.row as isize + dr;
        let mut c = coord.col as isize + dc;

        while on_board(r, c) {
            let here = Coord {
                row: r as usize,
                col: c as usize,
            };
            match board.get(here) {
                cell if cell == theirs => run.push(here),
                cell if cell == own => {
                    flips.extend_from_slice(&run);
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }

    if flips.is_empty() { None } else { Some(flips) }
}

/// Whether `side` may legally play at `coord`.
#[inline]
pub fn is_legal(board: &Board, side: Side, coord: Coord) -> bool {
    compute_flips(board, side, coord).is_some()
}

/// All legal moves for `side`, in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Coord> {
    Coord::all().filter(|&c| is_legal(board, side, c)).collect()
}

/// All legal moves for `side` paired with their flip sets, in row-major order.
pub fn legal_captures(board: &Board, side: Side) -> Vec<(Coord, FlipSet)> {
    Coord::all()
        .filter_map(|c| compute_flips(board, side, c).map(|flips| (c, flips)))
        .collect()
}

/// Play `side` at `coord`, flipping every captured disc.
///
/// Returns the flipped cells. An illegal request leaves the board unchanged.
pub fn apply_move(board: &mut Board, side: Side, coord: Coord) -> Result<FlipSet, MoveError> {
    let flips = compute_flips(board, side, coord).ok_or(MoveError::Illegal { coord })?;
    place(board, side, coord, &flips);
    Ok(flips)
}

/// Write a move whose flips were already computed on this board.
pub(crate) fn place(board: &mut Board, side: Side, coord: Coord, flips: &[Coord]) {
    board.set(coord, side.cell());
    for &c in flips {
        board.set(c, side.cell());
    }
}

/// Number of cells whose contents differ between two boards.
pub fn boards_differ(a: &Board, b: &Board) -> i32 {
    Coord::all().filter(|&c| a.get(c) != b.get(c)).count() as i32
}
