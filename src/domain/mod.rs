//! Доменная модель блэкджека: карты, колода, участники, записи о взятых картах, очки.

pub mod card;
pub mod deck;
pub mod game;
pub mod hand;
pub mod player;

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Непрозрачный уникальный идентификатор матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub Uuid);

impl MatchId {
    /// Новый случайный id (UUID v4).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(MatchId)
    }
}

pub type ParticipantId = u64;
/// Номер карты внутри колоды матча (0..52), см. `Card::id`.
pub type CardId = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use game::*;
pub use hand::*;
pub use player::*;
