//! Constants for board geometry, score bounds, and default engine settings.
//!
//! Everything the engine treats as fixed lives here: the 8x8 geometry, the
//! sentinel scores that double as alpha-beta bounds, the positional weight
//! matrix, and the default heuristic configuration.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Othello is always played on 8x8.
pub const N: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// The four corner cells as (row, col).
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, N - 1), (N - 1, 0), (N - 1, N - 1)];

/// Ray directions as (row delta, col delta).
/// Order: E, SE, S, SW, W, NW, N, NE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

// =============================================================================
// Score Bounds
// =============================================================================

/// Lower sentinel. Also the initial alpha of a search.
pub const MIN_SCORE: i32 = -5000;

/// Upper sentinel. Also the initial beta of a search.
pub const MAX_SCORE: i32 = 5000;

// =============================================================================
// Positional Weights
// =============================================================================

/// Per-cell weights for the weighted-positional heuristic.
///
/// Corners are worth the most since they can never be flipped. The X- and
/// C-squares next to a corner are negative: occupying them while the corner
/// is empty hands the corner to the opponent.
pub const POSITION_WEIGHTS: [[i32; N]; N] = [
    [4, -3, 2, 2, 2, 2, -3, 4],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [4, -3, 2, 2, 2, 2, -3, 4],
];

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Default heuristic tag.
pub const DEFAULT_HEURISTIC: &str = "stable_hybrid";

/// Default weight tuple: coin, corner, mobility, stability, phase threshold.
pub const DEFAULT_WEIGHTS: [i32; 5] = [1, 80, 30, 10, 50];
