//! Position evaluation.
//!
//! Every heuristic scores a board from the point of view of one side (the
//! computer). Scores are plain integers and always land strictly between
//! [`MIN_SCORE`] and [`MAX_SCORE`], so the search can never confuse a real
//! evaluation with a sentinel.
//!
//! ## Heuristics
//!
//! - `coin` - own disc count
//! - `weighted` - [`POSITION_WEIGHTS`] summed over own discs
//! - `corner` - own corners (0 to 4)
//! - `mobility` - own legal moves minus the opponent's
//! - `stability` - own discs minus the most cells any single opponent reply changes
//! - `adaptive` - weighted sum of coin, corner and mobility
//! - `stable_adaptive` - adaptive plus weighted stability
//! - `hybrid` - `weighted` in the opening and midgame, `adaptive` once the
//!   piece count reaches the phase threshold
//! - `stable_hybrid` - as `hybrid`, switching to `stable_adaptive`

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Coord, Side};
use crate::capture::{apply_move, boards_differ, legal_moves};
use crate::constants::{CORNERS, DEFAULT_WEIGHTS, MAX_SCORE, MIN_SCORE, N, POSITION_WEIGHTS};
use crate::error::ConfigError;

/// Which evaluation function to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    Coin,
    Weighted,
    Corner,
    Mobility,
    Stability,
    Adaptive,
    StableAdaptive,
    Hybrid,
    StableHybrid,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 9] = [
        HeuristicKind::Coin,
        HeuristicKind::Weighted,
        HeuristicKind::Corner,
        HeuristicKind::Mobility,
        HeuristicKind::Stability,
        HeuristicKind::Adaptive,
        HeuristicKind::StableAdaptive,
        HeuristicKind::Hybrid,
        HeuristicKind::StableHybrid,
    ];

    /// The tag accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Coin => "coin",
            HeuristicKind::Weighted => "weighted",
            HeuristicKind::Corner => "corner",
            HeuristicKind::Mobility => "mobility",
            HeuristicKind::Stability => "stability",
            HeuristicKind::Adaptive => "adaptive",
            HeuristicKind::StableAdaptive => "stable_adaptive",
            HeuristicKind::Hybrid => "hybrid",
            HeuristicKind::StableHybrid => "stable_hybrid",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    /// Unknown tags are rejected rather than mapped to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if tag == "greedy" {
            return Ok(HeuristicKind::Coin);
        }
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name() == tag)
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_string()))
    }
}

/// Blend weights for the composite heuristics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Weights {
    pub coin: i32,
    pub corner: i32,
    pub mobility: i32,
    pub stability: i32,
    /// Piece count at which the hybrids leave the positional table
    pub phase_threshold: i32,
}

impl Default for Weights {
    fn default() -> Self {
        // DEFAULT_WEIGHTS is well-formed
        Self::from_array(DEFAULT_WEIGHTS)
    }
}

impl Weights {
    fn from_array([coin, corner, mobility, stability, phase_threshold]: [i32; 5]) -> Self {
        Weights {
            coin,
            corner,
            mobility,
            stability,
            phase_threshold,
        }
    }

    /// Build from an ordered tuple: coin, corner, mobility, stability, phase threshold.
    pub fn from_slice(values: &[i32]) -> Result<Self, ConfigError> {
        let array: [i32; 5] = values.try_into().map_err(|_| {
            ConfigError::MalformedWeights(format!("expected 5 values, got {}", values.len()))
        })?;
        let weights = Self::from_array(array);
        weights.validate()?;
        Ok(weights)
    }

    /// Parse a comma-separated tuple such as `"1,80,30,10,50"`.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let values = s
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<i32>()
                    .map_err(|_| ConfigError::MalformedWeights(format!("'{v}' is not an integer")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&values)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=(N * N) as i32).contains(&self.phase_threshold) {
            return Err(ConfigError::MalformedWeights(format!(
                "phase threshold {} outside 0..=64",
                self.phase_threshold
            )));
        }
        Ok(())
    }
}

/// A heuristic together with its weights.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeuristicConfig {
    pub kind: HeuristicKind,
    pub weights: Weights,
}

impl HeuristicConfig {
    pub fn new(kind: HeuristicKind, weights: Weights) -> Self {
        Self { kind, weights }
    }

    /// Score `board` for `side` with the configured heuristic.
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        evaluate(self.kind, board, side, &self.weights)
    }
}

/// Score `board` for `side`, clamped strictly inside the sentinel range.
pub fn evaluate(kind: HeuristicKind, board: &Board, side: Side, w: &Weights) -> i32 {
    let raw = match kind {
        HeuristicKind::Coin => coin(board, side),
        HeuristicKind::Weighted => weighted(board, side),
        HeuristicKind::Corner => corners(board, side),
        HeuristicKind::Mobility => mobility(board, side),
        HeuristicKind::Stability => stability(board, side),
        HeuristicKind::Adaptive => adaptive(board, side, w),
        HeuristicKind::StableAdaptive => stable_adaptive(board, side, w),
        HeuristicKind::Hybrid => {
            if board.piece_count() < w.phase_threshold {
                weighted(board, side)
            } else {
                adaptive(board, side, w)
            }
        }
        HeuristicKind::StableHybrid => {
            if board.piece_count() < w.phase_threshold {
                weighted(board, side)
            } else {
                stable_adaptive(board, side, w)
            }
        }
    };
    clamp_score(raw)
}

/// Pull a value strictly inside `(MIN_SCORE, MAX_SCORE)`.
#[inline]
pub fn clamp_score(score: i64) -> i32 {
    score.clamp(MIN_SCORE as i64 + 1, MAX_SCORE as i64 - 1) as i32
}

// =============================================================================
// Components
// =============================================================================

/// Raw disc count.
pub fn coin(board: &Board, side: Side) -> i64 {
    board.tally()[side] as i64
}

/// Positional weight table summed over `side`'s discs.
pub fn weighted(board: &Board, side: Side) -> i64 {
    let own = side.cell();
    Coord::all()
        .filter(|&c| board.get(c) == own)
        .map(|c| POSITION_WEIGHTS[c.row][c.col] as i64)
        .sum()
}

/// Number of corners held by `side`.
pub fn corners(board: &Board, side: Side) -> i64 {
    CORNERS
        .iter()
        .filter(|&&(row, col)| board.get(Coord { row, col }) == side.cell())
        .count() as i64
}

/// Own legal moves minus the opponent's.
pub fn mobility(board: &Board, side: Side) -> i64 {
    legal_moves(board, side).len() as i64 - legal_moves(board, side.opponent()).len() as i64
}

/// Own discs minus the largest number of cells a single opponent reply changes.
///
/// A cheap vulnerability proxy, not true disc stability.
pub fn stability(board: &Board, side: Side) -> i64 {
    let opponent = side.opponent();
    let worst = legal_moves(board, opponent)
        .into_iter()
        .filter_map(|mv| {
            let mut reply = *board;
            apply_move(&mut reply, opponent, mv).ok()?;
            Some(boards_differ(board, &reply))
        })
        .max()
        .unwrap_or(0);
    coin(board, side) - worst as i64
}

fn adaptive(board: &Board, side: Side, w: &Weights) -> i64 {
    w.coin as i64 * coin(board, side)
        + w.corner as i64 * corners(board, side)
        + w.mobility as i64 * mobility(board, side)
}

fn stable_adaptive(board: &Board, side: Side, w: &Weights) -> i64 {
    adaptive(board, side, w) + w.stability as i64 * stability(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(values: [i32; 5]) -> Weights {
        Weights::from_slice(&values).unwrap()
    }

    #[test]
    fn test_parse_tags() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.name().parse::<HeuristicKind>(), Ok(kind));
        }
        assert_eq!("greedy".parse::<HeuristicKind>(), Ok(HeuristicKind::Coin));
        assert_eq!("Stable_Hybrid".parse::<HeuristicKind>(), Ok(HeuristicKind::StableHybrid));
        assert_eq!(
            "minimaxish".parse::<HeuristicKind>(),
            Err(ConfigError::UnknownHeuristic("minimaxish".into()))
        );
    }

    #[test]
    fn test_weights_parse() {
        assert_eq!(Weights::parse("1, 80,30,10,50"), Ok(Weights::default()));
        assert!(matches!(Weights::parse("1,2,3"), Err(ConfigError::MalformedWeights(_))));
        assert!(matches!(Weights::parse("1,2,x,4,5"), Err(ConfigError::MalformedWeights(_))));
        assert!(matches!(Weights::parse("1,2,3,4,65"), Err(ConfigError::MalformedWeights(_))));
        assert!(matches!(Weights::parse("1,2,3,4,-1"), Err(ConfigError::MalformedWeights(_))));
    }

    #[test]
    fn test_start_position_components() {
        let board = Board::new();
        assert_eq!(coin(&board, Side::Dark), 2);
        // The four centre cells all weigh 1
        assert_eq!(weighted(&board, Side::Dark), 2);
        assert_eq!(corners(&board, Side::Dark), 0);
        assert_eq!(mobility(&board, Side::Dark), 0);
        // Every opening reply changes exactly two cells
        assert_eq!(stability(&board, Side::Dark), 0);
    }

    #[test]
    fn test_weighted_corner_and_x_square() {
        let board = Board::from_diagram([
            "X      O",
            " X      ",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(weighted(&board, Side::Dark), 4 - 4);
        assert_eq!(weighted(&board, Side::Light), 4);
        assert_eq!(corners(&board, Side::Dark), 1);
        assert_eq!(corners(&board, Side::Light), 1);
    }

    #[test]
    fn test_mobility_differential() {
        let mut board = Board::new();
        apply_move(&mut board, Side::Dark, Coord { row: 2, col: 4 }).unwrap();
        // Light has three replies, Dark would have three moves as well
        assert_eq!(legal_moves(&board, Side::Light).len(), 3);
        assert_eq!(
            mobility(&board, Side::Light),
            3 - legal_moves(&board, Side::Dark).len() as i64
        );
    }

    #[test]
    fn test_stability_uses_worst_reply() {
        // Light can take the whole top row run from the right, changing 5 cells
        let board = Board::from_diagram([
            "OXXXX   ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(stability(&board, Side::Dark), 4 - 5);
    }

    #[test]
    fn test_adaptive_blend() {
        let board = Board::new();
        let w = weights([2, 80, 30, 10, 0]);
        assert_eq!(evaluate(HeuristicKind::Adaptive, &board, Side::Dark, &w), 4);
        assert_eq!(evaluate(HeuristicKind::StableAdaptive, &board, Side::Dark, &w), 4);
    }

    #[test]
    fn test_hybrid_phase_switch() {
        let board = Board::new();
        let early = weights([3, 0, 0, 0, 5]);
        let late = weights([3, 0, 0, 0, 4]);
        // Four pieces: below 5 uses the table, at 4 switches to adaptive
        assert_eq!(evaluate(HeuristicKind::Hybrid, &board, Side::Dark, &early), 2);
        assert_eq!(evaluate(HeuristicKind::Hybrid, &board, Side::Dark, &late), 6);
        assert_eq!(evaluate(HeuristicKind::StableHybrid, &board, Side::Dark, &early), 2);
        assert_eq!(evaluate(HeuristicKind::StableHybrid, &board, Side::Dark, &late), 6);
    }

    #[test]
    fn test_scores_stay_inside_sentinels() {
        let board = Board::from_diagram(["XXXXXXXX"; 8]);
        let huge = Weights {
            coin: i32::MAX,
            corner: i32::MAX,
            mobility: 0,
            stability: 0,
            phase_threshold: 0,
        };
        let score = evaluate(HeuristicKind::Adaptive, &board, Side::Dark, &huge);
        assert_eq!(score, MAX_SCORE - 1);
        let negative = Weights {
            coin: i32::MIN,
            ..huge
        };
        let score = evaluate(HeuristicKind::Coin, &board, Side::Dark, &negative);
        assert_eq!(score, 64);
        let score = evaluate(HeuristicKind::Adaptive, &board, Side::Dark, &Weights { corner: 0, ..negative });
        assert_eq!(score, MIN_SCORE + 1);
    }
}
