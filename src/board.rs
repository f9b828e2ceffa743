//! Board model: cells, sides, coordinates, and structural queries.
//!
//! The board is a plain 8x8 row-major grid of three-state cells. It is
//! `Copy`, so the search can branch by value without sharing state between
//! siblings. Only the capture engine mutates it during play.

use std::fmt;
use std::ops::Index;

use crate::constants::{CORNERS, N};

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// Character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }
}

/// A player's tile colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// The cell state owned by this side.
    pub fn cell(self) -> Cell {
        match self {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "X"),
            Side::Light => write!(f, "O"),
        }
    }
}

/// A cell address, both coordinates in `0..8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Build a coordinate, or `None` if it falls off the board.
    pub fn new(row: usize, col: usize) -> Option<Coord> {
        if row < N && col < N {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Whether this is one of the four corner cells.
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&(self.row, self.col))
    }

    /// Parse a human move such as `"18"`: row digit then column digit, 1-based.
    ///
    /// Returns `None` for anything that is not exactly two digits in `1..=8`.
    pub fn parse(s: &str) -> Option<Coord> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let digit = |b: u8| match b {
            b'1'..=b'8' => Some((b - b'1') as usize),
            _ => None,
        };
        Coord::new(digit(bytes[0])?, digit(bytes[1])?)
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..N).flat_map(|row| (0..N).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, self.col + 1)
    }
}

/// True iff both signed coordinates are inside the board.
#[inline]
pub fn on_board(row: isize, col: isize) -> bool {
    (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
}

/// Disc counts per side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub dark: i32,
    pub light: i32,
}

impl Index<Side> for Tally {
    type Output = i32;

    fn index(&self, side: Side) -> &i32 {
        match side {
            Side::Dark => &self.dark,
            Side::Light => &self.light,
        }
    }
}

/// An 8x8 Othello board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the canonical starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Reset to the canonical four-disc start.
    ///
    /// - (3,3) and (4,4) are Dark
    /// - (3,4) and (4,3) are Light
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; N]; N];
        self.cells[3][3] = Cell::Dark;
        self.cells[3][4] = Cell::Light;
        self.cells[4][3] = Cell::Light;
        self.cells[4][4] = Cell::Dark;
    }

    /// Build a board from eight text rows: `X` Dark, `O` Light, anything else empty.
    ///
    /// Rows shorter than eight characters are padded with empty cells.
    pub fn from_diagram(rows: [&str; N]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(N).enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::Dark,
                    'O' => Cell::Light,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    /// Contents of `coord`. Panics if it is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Count discs per side.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Dark => tally.dark += 1,
                Cell::Light => tally.light += 1,
                Cell::Empty => {}
            }
        }
        tally
    }

    /// Total occupied cells, used as the game-phase signal.
    pub fn piece_count(&self) -> i32 {
        let tally = self.tally();
        tally.dark + tally.light
    }

    /// Draw the board as a boxed grid with 1-8 labels on every side.
    ///
    /// Cells listed in `hints` that are empty are drawn as `.`.
    pub fn render(&self, hints: &[Coord]) -> String {
        const HLINE: &str = "  +-------+-------+-------+-------+-------+-------+-------+-------+";
        const VLINE: &str = "  |       |       |       |       |       |       |       |       |";
        const LABELS: &str = "      1       2       3       4       5       6       7       8";

        let mut out = String::new();
        out.push('\n');
        out.push_str(LABELS);
        out.push('\n');
        out.push_str(HLINE);
        out.push('\n');
        for row in 0..N {
            out.push_str(VLINE);
            out.push('\n');
            out.push_str(&format!("{} ", row + 1));
            for col in 0..N {
                let coord = Coord { row, col };
                let cell = self.get(coord);
                let symbol = if cell == Cell::Empty && hints.contains(&coord) {
                    '.'
                } else {
                    cell.symbol()
                };
                out.push_str(&format!("|   {symbol}   "));
            }
            out.push_str(&format!("| {}\n", row + 1));
            out.push_str(VLINE);
            out.push('\n');
            out.push_str(HLINE);
            out.push('\n');
        }
        out.push_str(LABELS);
        out.push('\n');
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.piece_count(), 0);
        assert!(Coord::all().all(|c| board.get(c) == Cell::Empty));
    }

    #[test]
    fn test_reset_to_start() {
        let mut board = Board::from_diagram(["XXXXXXXX"; 8]);
        board.reset();
        assert_eq!(board.get(Coord { row: 3, col: 3 }), Cell::Dark);
        assert_eq!(board.get(Coord { row: 3, col: 4 }), Cell::Light);
        assert_eq!(board.get(Coord { row: 4, col: 3 }), Cell::Light);
        assert_eq!(board.get(Coord { row: 4, col: 4 }), Cell::Dark);
        assert_eq!(board.piece_count(), 4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_tally() {
        let board = Board::new();
        let tally = board.tally();
        assert_eq!(tally[Side::Dark], 2);
        assert_eq!(tally[Side::Light], 2);
    }

    #[test]
    fn test_on_board() {
        assert!(on_board(0, 0));
        assert!(on_board(7, 7));
        assert!(!on_board(-1, 0));
        assert!(!on_board(0, 8));
        assert!(!on_board(8, 3));
    }

    #[test]
    fn test_corners() {
        let corners: Vec<Coord> = Coord::all().filter(|c| c.is_corner()).collect();
        assert_eq!(corners.len(), 4);
        assert!(Coord { row: 0, col: 7 }.is_corner());
        assert!(!Coord { row: 0, col: 6 }.is_corner());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Dark.opponent(), Side::Light);
        assert_eq!(Side::Light.opponent(), Side::Dark);
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(Coord::parse("18"), Some(Coord { row: 0, col: 7 }));
        assert_eq!(Coord::parse(" 81\n"), Some(Coord { row: 7, col: 0 }));
        assert_eq!(Coord::parse("09"), None);
        assert_eq!(Coord::parse("123"), None);
        assert_eq!(Coord::parse("ab"), None);
        assert_eq!(Coord::parse(""), None);
    }

    #[test]
    fn test_coord_display_roundtrip() {
        for coord in Coord::all() {
            assert_eq!(Coord::parse(&coord.to_string()), Some(coord));
        }
    }

    #[test]
    fn test_render_marks_hints() {
        let board = Board::new();
        let text = board.render(&[Coord { row: 2, col: 4 }]);
        assert!(text.contains("3 |       |       |       |       |   .   |"));
        assert!(text.contains("4 |       |       |       |   X   |   O   |"));
        assert!(text.contains("5 |       |       |       |   O   |   X   |"));
        // Occupied cells are never overdrawn by a hint
        let text = board.render(&[Coord { row: 3, col: 3 }]);
        assert!(!text.contains('.'));
    }
}
