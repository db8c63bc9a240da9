//! Player identification.
//!
//! The game is strictly two-player. Players are numbered the way they are
//! shown on screen: player 1 always opens a round, player 2 answers.

use serde::{Deserialize, Serialize};

/// One of the two players, numbered 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

/// A player number outside 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no player {0}, expected 1 or 2")]
pub struct InvalidPlayer(pub u8);

impl PlayerId {
    /// The player who opens every round.
    pub const ONE: Self = Self(1);

    /// The answering player.
    pub const TWO: Self = Self(2);

    /// Create a player ID from its on-screen number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    ///
    /// ```
    /// use monster_echo::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::new(3), None);
    /// ```
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the on-screen player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The other player.
    ///
    /// ```
    /// use monster_echo::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 1 {
            Self::TWO
        } else {
            Self::ONE
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayer;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(InvalidPlayer(number))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
