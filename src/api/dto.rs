use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId};

/// DTO матча – то, что видит клиент после любой операции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchViewDto {
    pub match_uuid: MatchId,
    pub player_id: ParticipantId,
    pub dealer_id: ParticipantId,
    /// "Player won" / "Dealer won" / "Game still being played".
    pub game: String,
    pub score: ScoreDto,
    pub cards: CardsDto,
}

/// Очки обеих сторон в виде "L: 3, H: 13, played hands: 2".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreDto {
    pub player: String,
    pub dealer: String,
}

/// Карты обеих сторон в порядке взятия ("Ah", "Td", ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardsDto {
    pub player: Vec<String>,
    pub dealer: Vec<String>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создан новый матч (после стартовой раздачи).
    MatchCreated(MatchViewDto),

    /// Состояние матча после `hit` / `stick`.
    MatchState(MatchViewDto),
}

impl CommandResponse {
    pub fn view(&self) -> &MatchViewDto {
        match self {
            CommandResponse::MatchCreated(v) | CommandResponse::MatchState(v) => v,
        }
    }

    pub fn into_view(self) -> MatchViewDto {
        match self {
            CommandResponse::MatchCreated(v) | CommandResponse::MatchState(v) => v,
        }
    }
}
