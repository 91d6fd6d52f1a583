use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    PlayerA,
    PlayerB,
    Draw,
}

impl Winner {
    pub fn from_player(player: Player) -> Winner {
        match player {
            Player::A => Winner::PlayerA,
            Player::B => Winner::PlayerB,
        }
    }

    pub fn is_win_for(self, player: Player) -> bool {
        self == Winner::from_player(player)
    }
}
