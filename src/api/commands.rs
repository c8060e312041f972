use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId};

/// Команда верхнего уровня (меняет состояние).
///
/// Эти команды превращаются в операции (`BlackjackOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Создать матч и сделать стартовую раздачу.
    NewMatch,

    /// Взять карту.
    Hit(MatchRef),

    /// Остановиться: дилер доигрывает.
    Stick(MatchRef),
}

/// Ссылка на участника конкретного матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRef {
    pub match_id: MatchId,
    /// Действующий игрок; дилер – второй участник матча.
    pub participant_id: ParticipantId,
}

impl MatchRef {
    pub fn new(match_id: MatchId, participant_id: ParticipantId) -> Self {
        Self {
            match_id,
            participant_id,
        }
    }
}
