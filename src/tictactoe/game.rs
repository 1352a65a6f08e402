//! Moves and game outcomes

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::Player;

/// A move: who plays and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub row: u8,
    pub col: u8,
}

impl Move {
    /// Create a move from row/column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn new(player: Player, row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "move ({row}, {col}) is off the board");
        Move { player, row, col }
    }

    /// Create a move from a row-major position (0-8)
    pub fn at(player: Player, position: usize) -> Result<Self, crate::Error> {
        if position >= 9 {
            return Err(crate::Error::InvalidPosition { position });
        }
        Ok(Move {
            player,
            row: (position / 3) as u8,
            col: (position % 3) as u8,
        })
    }

    /// Row-major cell index
    pub fn position(&self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} to ({}, {})", self.player, self.row, self.col)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Every outcome, in table order
    pub const ALL: [GameOutcome; 3] = [
        GameOutcome::Win(Player::X),
        GameOutcome::Win(Player::O),
        GameOutcome::Draw,
    ];

    /// Slot of this outcome in a three-entry table
    pub(crate) fn index(self) -> usize {
        match self {
            GameOutcome::Win(Player::X) => 0,
            GameOutcome::Win(Player::O) => 1,
            GameOutcome::Draw => 2,
        }
    }

    /// Kebab-case label, also accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::Win(Player::X) => "x-wins",
            GameOutcome::Win(Player::O) => "o-wins",
            GameOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameOutcome {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x-wins" | "x_wins" | "x" | "player1" => Ok(GameOutcome::Win(Player::X)),
            "o-wins" | "o_wins" | "o" | "player2" => Ok(GameOutcome::Win(Player::O)),
            "draw" | "tie" => Ok(GameOutcome::Draw),
            _ => Err(crate::Error::ParseOutcome {
                input: s.to_string(),
                expected: "x-wins, o-wins, draw".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_position_is_row_major() {
        let mv = Move::new(Player::O, 2, 1);
        assert_eq!(mv.position(), 7);
        assert_eq!(Move::at(Player::O, 7).unwrap(), mv);
        assert!(Move::at(Player::X, 9).is_err());
    }

    #[test]
    fn move_display_names_player_and_cell() {
        assert_eq!(Move::new(Player::X, 0, 2).to_string(), "Player X to (0, 2)");
    }

    #[test]
    fn outcome_parses_its_own_labels() {
        for outcome in GameOutcome::ALL {
            assert_eq!(outcome.as_str().parse::<GameOutcome>().unwrap(), outcome);
        }
        assert!("nobody".parse::<GameOutcome>().is_err());
    }

    #[test]
    fn outcome_indices_are_distinct() {
        let mut seen = [false; 3];
        for outcome in GameOutcome::ALL {
            assert!(!seen[outcome.index()]);
            seen[outcome.index()] = true;
        }
    }
}
