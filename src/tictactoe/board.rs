//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    game::{GameOutcome, Move},
    lines::LineAnalyzer,
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "first" | "a" => Ok(Player::X),
            "o" | "second" | "b" => Ok(Player::O),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
                expected: "x/first, o/second".to_string(),
            }),
        }
    }
}

/// Board cells plus whose turn it is.
///
/// The game tree never stores boards on its nodes; a `BoardState` is rebuilt
/// on demand by replaying the moves along a node's ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move for the player to move and return the new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        self.apply(Move::at(self.to_move, pos)?)
    }

    /// Apply an explicit move.
    ///
    /// The move's player must be the one to move and its cell must be empty.
    #[must_use = "apply returns a new board state; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Result<BoardState, crate::Error> {
        let pos = mv.position();
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        if mv.player != self.to_move {
            return Err(crate::Error::WrongPlayer {
                player: mv.player,
                expected: self.to_move,
            });
        }

        let mut new_state = *self;
        new_state.cells[pos] = mv.player.to_cell();
        new_state.to_move = mv.player.opponent();
        Ok(new_state)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Terminal classification: a completed line wins, otherwise a full board
    /// is a draw, otherwise the game goes on.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_make_move() {
        let board = BoardState::new();

        let new_board = board.make_move(4).unwrap();
        assert_eq!(new_board.cells[4], Cell::X);
        assert_eq!(new_board.to_move, Player::O);

        let err = new_board.make_move(4).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_rejects_wrong_player() {
        let board = BoardState::new();
        let mv = Move::new(Player::O, 1, 1);
        assert!(matches!(
            board.apply(mv),
            Err(crate::Error::WrongPlayer {
                player: Player::O,
                expected: Player::X,
            })
        ));
    }

    #[test]
    fn test_make_move_out_of_bounds() {
        let board = BoardState::new();
        assert!(matches!(
            board.make_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = BoardState::new();
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(3).unwrap(); // O
        board = board.make_move(1).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(2).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = BoardState::new();
        // O wins on middle column (1, 4, 7)
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(2).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(5).unwrap(); // X
        board = board.make_move(7).unwrap(); // O

        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = BoardState::new();
        for pos in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            board = board.make_move(pos).unwrap();
        }

        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // XOX
        // OXO
        // OXX  <- X completes the main diagonal with the ninth move
        let mut board = BoardState::new();
        for pos in [0, 1, 2, 3, 4, 5, 7, 6, 8] {
            board = board.make_move(pos).unwrap();
        }

        assert!(board.is_full());
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_display() {
        let board = BoardState::new().make_move(0).unwrap().make_move(4).unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
