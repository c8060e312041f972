use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId};

/// Роль участника. Только для отображения:
/// игровая логика находит дилера «методом исключения» (второй участник матча).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Dealer,
}

/// Участник матча (игрок или дилер).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub match_id: MatchId,
    pub role: Role,
    /// Победитель матча. Выставляется не более одного раза и больше не сбрасывается.
    pub won: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, match_id: MatchId, role: Role) -> Self {
        Self {
            id,
            match_id,
            role,
            won: false,
        }
    }
}
