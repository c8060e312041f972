use linera_sdk::views::{linera_views, MapView, RootView, ViewStorageContext};
use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::game::Match;
use crate::domain::hand::DrawRecord;
use crate::domain::player::Participant;
use crate::domain::MatchId;

/// Снэпшот матча, который можно хранить во View или в любом другом хранилище.
/// Это «замороженный» матч: всё, что нужно, чтобы продолжить игру в другом процессе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub info: Match,
    pub participants: Vec<Participant>,
    pub deck: Option<Deck>,
    pub draws: Vec<DrawRecord>,
}

impl MatchSnapshot {
    pub fn match_id(&self) -> MatchId {
        self.info.id
    }

    /// Записан ли уже победитель.
    pub fn is_decided(&self) -> bool {
        self.participants.iter().any(|p| p.won)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Состояние приложения блэкджека на Linera: матчи в виде снапшотов.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct BlackjackState {
    /// Ключ: MatchId, значение: MatchSnapshot.
    #[view(map)]
    pub matches: MapView<MatchId, MatchSnapshot>,
}
