use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::{CardId, MatchId};

/// Сколько карт в колоде одного матча.
pub const DECK_SIZE: usize = 52;

/// Колода матча. Порядок выдачи здесь НЕ хранится:
/// что уже вышло, а что нет, выводится из записей о взятых картах.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub match_id: MatchId,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts A..K, Clubs A..K, Spades A..K, Diamonds A..K.
    pub fn standard_52(match_id: MatchId) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { match_id, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == card_id)
    }

    /// Карты колоды, которых нет среди уже взятых (в порядке колоды).
    pub fn remaining(&self, drawn: &HashSet<CardId>) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| !drawn.contains(&c.id()))
            .copied()
            .collect()
    }
}
