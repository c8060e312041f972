use crate::domain::{CardId, MatchId, ParticipantId};

use thiserror::Error;

/// Ошибки движка блэкджека и хранилища под ним.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Матч {0} не найден")]
    MatchNotFound(MatchId),

    #[error("Участник {participant_id} не найден в матче {match_id}")]
    ParticipantNotFound {
        match_id: MatchId,
        participant_id: ParticipantId,
    },

    #[error("В колоде матча {0} не осталось карт")]
    DeckExhausted(MatchId),

    #[error("Карта {card_id} уже взята в матче {match_id}")]
    CardAlreadyDrawn { match_id: MatchId, card_id: CardId },

    #[error("Карты {card_id} нет в колоде матча {match_id}")]
    UnknownCard { match_id: MatchId, card_id: CardId },

    #[error("Колода для матча {0} уже создана")]
    DeckAlreadyExists(MatchId),

    #[error("Блокировка движка отравлена паникой в другом запросе")]
    LockPoisoned,

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Можно ли безопасно повторить ту же операцию (`hit`/`stick`).
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::CardAlreadyDrawn { .. })
    }
}
