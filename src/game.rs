//! Game orchestration: human vs computer sessions and computer self-play.
//!
//! The engine core only answers questions about positions. This module owns
//! the turn order, pass handling, score display, and the text protocol for
//! human moves:
//!
//! - `RC` - play at row `R`, column `C` (both `1`-`8`), e.g. `18` is the top-right corner
//! - `hints` - toggle marking legal moves with `.`
//! - `quit` - abandon the game
//!
//! Input and output are generic so sessions can be scripted in tests.
//!
//! ## Example
//!
//! ```ignore
//! use std::io;
//! use othello_minimax::game::{FirstMover, Session};
//!
//! let stdin = io::stdin();
//! let mut session = Session::new(stdin.lock(), io::stdout(), config, Side::Dark, FirstMover::Computer, rng)?;
//! session.run()?;
//! ```

use std::io::{BufRead, Write};

use fastrand::Rng;
use tracing::info;

use crate::board::{Board, Coord, Side, Tally};
use crate::capture::{apply_move, is_legal, legal_moves};
use crate::error::SessionError;
use crate::search::{SearchConfig, choose_move};

/// Who takes the first turn of a human vs computer game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FirstMover {
    Computer,
    Human,
    Random,
}

/// How a single game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Neither side could move; final disc counts
    Finished(Tally),
    /// The human typed `quit` or input ran out
    Quit,
}

/// True when neither side has a legal move.
pub fn is_game_over(board: &Board) -> bool {
    legal_moves(board, Side::Dark).is_empty() && legal_moves(board, Side::Light).is_empty()
}

/// One parsed line of human input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Play(Coord),
    Hints,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Turn {
    Computer,
    Human,
}

/// Interactive human vs computer session.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SearchConfig,
    human: Side,
    first: FirstMover,
    rng: Rng,
    show_hints: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session. The search configuration is checked here, before any game starts.
    pub fn new(
        input: R,
        output: W,
        config: SearchConfig,
        human: Side,
        first: FirstMover,
        rng: Rng,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            input,
            output,
            config,
            human,
            first,
            rng,
            show_hints: false,
        })
    }

    /// Play games until the human declines another one or quits.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\n--WELCOME TO OTHELLO--")?;
        writeln!(self.output, "----------------------\n")?;
        loop {
            if self.play_game()? == GameOutcome::Quit {
                writeln!(self.output, "Thank you for playing!")?;
                return Ok(());
            }
            if !self.play_again()? {
                return Ok(());
            }
        }
    }

    /// Play one game from the starting position.
    pub fn play_game(&mut self) -> Result<GameOutcome, SessionError> {
        let mut board = Board::new();
        let computer = self.human.opponent();

        writeln!(self.output, "You will place the {} tiles.", self.human)?;
        writeln!(
            self.output,
            "To move, type the row digit (1-8), then the column digit (1-8). For example, 18 will be the top-right corner."
        )?;

        let computer_first = match self.first {
            FirstMover::Computer => true,
            FirstMover::Human => false,
            FirstMover::Random => self.rng.bool(),
        };
        let mut turn = if computer_first {
            Turn::Computer
        } else {
            Turn::Human
        };
        writeln!(
            self.output,
            "The {} will move first.",
            if turn == Turn::Computer { "computer" } else { "player" }
        )?;

        let mut computer_moves = 0u32;
        loop {
            match turn {
                Turn::Human => {
                    let hints = if self.show_hints {
                        legal_moves(&board, self.human)
                    } else {
                        Vec::new()
                    };
                    write!(self.output, "{}", board.render(&hints))?;
                    self.show_points(&board)?;

                    match self.read_command(&board)? {
                        Command::Quit => return Ok(GameOutcome::Quit),
                        Command::Hints => {
                            self.show_hints = !self.show_hints;
                            continue;
                        }
                        Command::Play(coord) => {
                            apply_move(&mut board, self.human, coord)?;
                        }
                    }

                    if !legal_moves(&board, computer).is_empty() {
                        turn = Turn::Computer;
                    } else if !legal_moves(&board, self.human).is_empty() {
                        writeln!(self.output, "The computer has no moves. Your turn again.")?;
                    } else {
                        break;
                    }
                }
                Turn::Computer => {
                    computer_moves += 1;
                    write!(self.output, "{}", board)?;
                    self.show_points(&board)?;

                    let result = choose_move(&board, computer, &self.config, &mut self.rng)?;
                    if let Some(coord) = result.best_move {
                        apply_move(&mut board, computer, coord)?;
                        writeln!(self.output, "Computer move was: {coord}")?;
                    }

                    if !legal_moves(&board, self.human).is_empty() {
                        turn = Turn::Human;
                    } else if !legal_moves(&board, computer).is_empty() {
                        writeln!(
                            self.output,
                            "You have no moves. It is the computer's turn again."
                        )?;
                    } else {
                        break;
                    }
                }
            }
        }

        let tally = board.tally();
        info!(
            computer_moves,
            dark = tally.dark,
            light = tally.light,
            "game finished"
        );

        write!(self.output, "{}", board)?;
        writeln!(
            self.output,
            "X scored {} points. O scored {} points.",
            tally[Side::Dark],
            tally[Side::Light]
        )?;
        let (mine, theirs) = (tally[self.human], tally[computer]);
        if mine > theirs {
            writeln!(
                self.output,
                "You won. You beat the computer by {} points! Congratulations!",
                mine - theirs
            )?;
        } else if mine < theirs {
            writeln!(
                self.output,
                "You lost. The computer beat you by {} points.",
                theirs - mine
            )?;
        } else {
            writeln!(self.output, "The game was a tie!")?;
        }
        Ok(GameOutcome::Finished(tally))
    }

    fn show_points(&mut self, board: &Board) -> Result<(), SessionError> {
        let tally = board.tally();
        writeln!(self.output, "Current score:")?;
        writeln!(self.output, "  Player = {}", tally[self.human])?;
        writeln!(self.output, "Computer = {}", tally[self.human.opponent()])?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Read lines until one is a legal move, `hints`, or `quit`. End of input counts as `quit`.
    fn read_command(&mut self, board: &Board) -> Result<Command, SessionError> {
        loop {
            writeln!(
                self.output,
                "Enter your move (row number then column number, for example 18 will be the top right corner), or type quit to end the game, or hints to turn off/on hints."
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            let line = line.trim().to_ascii_lowercase();
            match line.as_str() {
                "quit" => return Ok(Command::Quit),
                "hints" => return Ok(Command::Hints),
                _ => {}
            }

            match Coord::parse(&line) {
                Some(coord) if is_legal(board, self.human, coord) => return Ok(Command::Play(coord)),
                Some(_) => writeln!(self.output, "Invalid move.\n")?,
                None => {
                    writeln!(
                        self.output,
                        "To move, type the row digit (1-8), then the column digit (1-8). [row,column]"
                    )?;
                    writeln!(self.output, "For example, 18 will be the top-right corner.")?;
                }
            }
        }
    }

    fn play_again(&mut self) -> Result<bool, SessionError> {
        writeln!(self.output, "Do you want to play again? (yes or no)")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_ascii_lowercase().starts_with('y'))
    }
}

/// Play a full computer vs computer game and return the final tally.
///
/// Dark moves first. Each side searches with its own configuration; a side
/// with no legal move passes.
pub fn self_play<W: Write>(
    output: &mut W,
    dark: &SearchConfig,
    light: &SearchConfig,
    rng: &mut Rng,
) -> Result<Tally, SessionError> {
    dark.validate()?;
    light.validate()?;

    let mut board = Board::new();
    let mut side = Side::Dark;
    let mut plies = 0u32;

    while !is_game_over(&board) {
        if legal_moves(&board, side).is_empty() {
            writeln!(output, "{side} has no moves and passes.")?;
            side = side.opponent();
            continue;
        }

        let config = match side {
            Side::Dark => dark,
            Side::Light => light,
        };
        let result = choose_move(&board, side, config, rng)?;
        if let Some(coord) = result.best_move {
            apply_move(&mut board, side, coord)?;
            plies += 1;
            writeln!(
                output,
                "{side} ({}) plays {coord}  score={:?} nodes={}",
                config.heuristic.kind, result.score, result.nodes
            )?;
        }
        side = side.opponent();
    }

    let tally = board.tally();
    info!(plies, dark = tally.dark, light = tally.light, "self-play finished");

    write!(output, "{board}")?;
    writeln!(output, "X = {}  O = {}", tally.dark, tally.light)?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{HeuristicConfig, HeuristicKind, Weights};

    fn config(kind: HeuristicKind, depth: u32) -> SearchConfig {
        SearchConfig::new(HeuristicConfig::new(kind, Weights::default()), depth, true)
    }

    fn session(script: &str, first: FirstMover) -> Session<&[u8], Vec<u8>> {
        Session::new(
            script.as_bytes(),
            Vec::new(),
            config(HeuristicKind::Coin, 1),
            Side::Dark,
            first,
            Rng::with_seed(5),
        )
        .unwrap()
    }

    #[test]
    fn test_game_over_detection() {
        assert!(!is_game_over(&Board::new()));
        assert!(is_game_over(&Board::from_diagram(["XXXXXXXX"; 8])));
        assert!(is_game_over(&Board::empty()));
    }

    #[test]
    fn test_quit_immediately() {
        let mut s = session("quit\n", FirstMover::Human);
        assert_eq!(s.play_game().unwrap(), GameOutcome::Quit);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut s = session("", FirstMover::Human);
        assert_eq!(s.play_game().unwrap(), GameOutcome::Quit);
    }

    #[test]
    fn test_invalid_then_hints_then_move() {
        let mut s = session("11\nzz\nhints\n35\nquit\n", FirstMover::Human);
        assert_eq!(s.play_game().unwrap(), GameOutcome::Quit);
        let text = String::from_utf8(s.output).unwrap();
        assert!(text.contains("Invalid move."));
        assert!(text.contains("[row,column]"));
        // The board after `hints` marks Dark's opening moves
        assert!(text.contains("|   .   "));
        assert!(text.contains("Computer move was:"));
    }

    #[test]
    fn test_computer_moves_first() {
        let mut s = session("quit\n", FirstMover::Computer);
        assert_eq!(s.play_game().unwrap(), GameOutcome::Quit);
        let text = String::from_utf8(s.output).unwrap();
        assert!(text.contains("The computer will move first."));
        assert!(text.contains("Computer move was:"));
    }

    #[test]
    fn test_invalid_depth_rejected_up_front() {
        let result = Session::new(
            "".as_bytes(),
            Vec::new(),
            config(HeuristicKind::Coin, 0),
            Side::Dark,
            FirstMover::Human,
            Rng::with_seed(1),
        );
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn test_self_play_fills_tally() {
        let mut out = Vec::new();
        let mut rng = Rng::with_seed(42);
        let tally = self_play(
            &mut out,
            &config(HeuristicKind::Weighted, 2),
            &config(HeuristicKind::Coin, 1),
            &mut rng,
        )
        .unwrap();
        assert!(tally.dark + tally.light <= 64);
        assert!(tally.dark + tally.light > 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("X = {}  O = {}", tally.dark, tally.light)));
    }
}
