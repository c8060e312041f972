use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{MatchId, ParticipantId};

/// Заветная сумма.
pub const BLACKJACK: u32 = 21;

/// Запись «участник взял карту» в рамках матча.
///
/// Записи только добавляются. Порядок для подсчёта очков не важен,
/// `seq` нужен лишь чтобы показать руку в порядке взятия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRecord {
    pub match_id: MatchId,
    pub participant_id: ParticipantId,
    pub card: Card,
    pub seq: u32,
}

/// Агрегированные очки участника: сумма low, сумма high и число взятых карт.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub low: u32,
    pub high: u32,
    pub count: u32,
}

impl Score {
    pub const ZERO: Score = Score { low: 0, high: 0, count: 0 };

    pub const fn new(low: u32, high: u32, count: u32) -> Self {
        Self { low, high, count }
    }

    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        cards.into_iter().fold(Score::ZERO, |acc, card| acc.with(card))
    }

    /// Очки после ещё одной карты.
    pub fn with(self, card: &Card) -> Self {
        Score {
            low: self.low + card.low_value(),
            high: self.high + card.high_value(),
            count: self.count + 1,
        }
    }

    /// Лучший счёт: high, если он не больше 21, иначе low.
    /// Граница строгая: high == 21 ещё берётся, high == 22 уже нет.
    pub fn best(&self) -> u32 {
        if self.high <= BLACKJACK {
            self.high
        } else {
            self.low
        }
    }

    /// Меньшая из двух сумм (ей пользуется политика дилера).
    pub fn min_total(&self) -> u32 {
        self.low.min(self.high)
    }

    pub fn is_bust(&self) -> bool {
        self.best() > BLACKJACK
    }

    pub fn is_natural(&self) -> bool {
        self.best() == BLACKJACK
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L: {}, H: {}, played hands: {}",
            self.low, self.high, self.count
        )
    }
}
