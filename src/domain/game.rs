use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId};

/// Матч: одна партия игрока против дилера.
/// После создания не меняется, всё состояние живёт в дочерних записях.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Match {
    pub id: MatchId,
}

/// Итог партии с точки зрения действующего игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    PlayerWins,
    DealerWins,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Текст статуса, который уходит клиенту.
    pub fn status_text(self) -> &'static str {
        match self {
            Outcome::Ongoing => "Game still being played",
            Outcome::PlayerWins => "Player won",
            Outcome::DealerWins => "Dealer won",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_text())
    }
}

/// Состояние матча: пока никто не выиграл, или победитель уже записан.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Decided { winner: ParticipantId },
}

impl MatchState {
    pub fn is_decided(&self) -> bool {
        matches!(self, MatchState::Decided { .. })
    }
}
