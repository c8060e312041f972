use std::collections::{HashMap, HashSet};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::game::Match;
use crate::domain::hand::{DrawRecord, Score};
use crate::domain::player::{Participant, Role};
use crate::domain::{CardId, MatchId, ParticipantId};
use crate::engine::EngineError;
use crate::infra::ids::IdGenerator;
use crate::state::MatchSnapshot;

/// Абстракция хранилища матчей, с которой работает движок.
///
/// Каждая операция движка (`hit`, `stick`, решение внутри `show`) выполняется
/// под одним `&mut` заимствованием репозитория, то есть как одна атомарная
/// последовательность чтение → изменение → запись.
pub trait Repository {
    /// Создать матч.
    fn create_match(&mut self) -> MatchId;

    /// Создать двух участников матча. Возвращает `(dealer_id, player_id)`.
    fn create_participants(
        &mut self,
        match_id: MatchId,
    ) -> Result<(ParticipantId, ParticipantId), EngineError>;

    /// Сохранить колоду матча (один раз на матч).
    fn create_deck(&mut self, match_id: MatchId, cards: &[Card]) -> Result<(), EngineError>;

    /// Карты колоды, которые ещё никто не взял.
    fn undrawn_cards(&self, match_id: MatchId) -> Result<Vec<Card>, EngineError>;

    /// Записать, что участник взял карту. Повторно взять ту же карту нельзя.
    fn record_draw(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
        card_id: CardId,
    ) -> Result<(), EngineError>;

    /// Сумма low, сумма high и число карт участника.
    fn aggregate_score(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<Score, EngineError>;

    /// Второй участник матча.
    fn other_participant(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<ParticipantId, EngineError>;

    fn winner_flag(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<bool, EngineError>;

    /// Отметить победителя. Если победитель уже есть, ничего не меняется.
    fn set_winner(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<(), EngineError>;

    /// Карты участника в порядке взятия.
    fn drawn_cards(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<Vec<Card>, EngineError>;

    /// Все известные матчи.
    fn match_ids(&self) -> Vec<MatchId>;
}

/// Всё, что хранится по одному матчу.
#[derive(Clone, Debug)]
struct MatchRecord {
    info: Match,
    participants: Vec<Participant>,
    deck: Option<Deck>,
    draws: Vec<DrawRecord>,
}

impl MatchRecord {
    fn new(info: Match) -> Self {
        Self {
            info,
            participants: Vec::with_capacity(2),
            deck: None,
            draws: Vec::new(),
        }
    }

    fn participant(&self, participant_id: ParticipantId) -> Result<&Participant, EngineError> {
        self.participants
            .iter()
            .find(|p| p.id == participant_id)
            .ok_or(EngineError::ParticipantNotFound {
                match_id: self.info.id,
                participant_id,
            })
    }

    fn drawn_ids(&self) -> HashSet<CardId> {
        self.draws.iter().map(|d| d.card.id()).collect()
    }

    fn draws_of(&self, participant_id: ParticipantId) -> impl Iterator<Item = &DrawRecord> {
        self.draws
            .iter()
            .filter(move |d| d.participant_id == participant_id)
    }
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    ids: IdGenerator,
    matches: HashMap<MatchId, MatchRecord>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, match_id: MatchId) -> Result<&MatchRecord, EngineError> {
        self.matches
            .get(&match_id)
            .ok_or(EngineError::MatchNotFound(match_id))
    }

    fn record_mut(&mut self, match_id: MatchId) -> Result<&mut MatchRecord, EngineError> {
        self.matches
            .get_mut(&match_id)
            .ok_or(EngineError::MatchNotFound(match_id))
    }

    /// Выгрузить матч целиком (для долговременного хранения / переноса).
    pub fn snapshot(&self, match_id: MatchId) -> Option<MatchSnapshot> {
        self.matches.get(&match_id).map(|r| MatchSnapshot {
            info: r.info,
            participants: r.participants.clone(),
            deck: r.deck.clone(),
            draws: r.draws.clone(),
        })
    }

    /// Загрузить матч из снапшота. Существующий матч с тем же id заменяется.
    pub fn restore(&mut self, snapshot: MatchSnapshot) -> Result<(), EngineError> {
        let match_id = snapshot.info.id;

        // Ровно игрок и дилер.
        let pair_ok = matches!(
            snapshot.participants.as_slice(),
            [a, b] if a.id != b.id && a.role != b.role
        );
        if !pair_ok {
            return Err(EngineError::ParticipantNotFound {
                match_id,
                participant_id: snapshot.participants.last().map(|p| p.id).unwrap_or_default(),
            });
        }

        let mut seen = HashSet::new();
        for draw in &snapshot.draws {
            let in_deck = snapshot
                .deck
                .as_ref()
                .is_some_and(|deck| deck.contains(draw.card.id()));
            if !in_deck {
                return Err(EngineError::UnknownCard {
                    match_id,
                    card_id: draw.card.id(),
                });
            }
            if !seen.insert(draw.card.id()) {
                return Err(EngineError::CardAlreadyDrawn {
                    match_id,
                    card_id: draw.card.id(),
                });
            }
            if !snapshot.participants.iter().any(|p| p.id == draw.participant_id) {
                return Err(EngineError::ParticipantNotFound {
                    match_id,
                    participant_id: draw.participant_id,
                });
            }
        }

        for p in &snapshot.participants {
            self.ids.observe_participant_id(p.id);
        }

        self.matches.insert(
            match_id,
            MatchRecord {
                info: snapshot.info,
                participants: snapshot.participants,
                deck: snapshot.deck,
                draws: snapshot.draws,
            },
        );
        Ok(())
    }
}

impl Repository for InMemoryRepository {
    fn create_match(&mut self) -> MatchId {
        let id = self.ids.next_match_id();
        self.matches.insert(id, MatchRecord::new(Match { id }));
        id
    }

    fn create_participants(
        &mut self,
        match_id: MatchId,
    ) -> Result<(ParticipantId, ParticipantId), EngineError> {
        let record = self
            .matches
            .get_mut(&match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;
        let dealer_id = self.ids.next_participant_id();
        let player_id = self.ids.next_participant_id();

        record
            .participants
            .push(Participant::new(dealer_id, match_id, Role::Dealer));
        record
            .participants
            .push(Participant::new(player_id, match_id, Role::Player));

        Ok((dealer_id, player_id))
    }

    fn create_deck(&mut self, match_id: MatchId, cards: &[Card]) -> Result<(), EngineError> {
        let record = self.record_mut(match_id)?;
        if record.deck.is_some() {
            return Err(EngineError::DeckAlreadyExists(match_id));
        }
        record.deck = Some(Deck {
            match_id,
            cards: cards.to_vec(),
        });
        Ok(())
    }

    fn undrawn_cards(&self, match_id: MatchId) -> Result<Vec<Card>, EngineError> {
        let record = self.record(match_id)?;
        Ok(record
            .deck
            .as_ref()
            .map(|deck| deck.remaining(&record.drawn_ids()))
            .unwrap_or_default())
    }

    fn record_draw(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
        card_id: CardId,
    ) -> Result<(), EngineError> {
        let record = self.record_mut(match_id)?;
        record.participant(participant_id)?;

        let card = record
            .deck
            .as_ref()
            .and_then(|deck| deck.cards.iter().find(|c| c.id() == card_id).copied())
            .ok_or(EngineError::UnknownCard { match_id, card_id })?;

        if record.draws.iter().any(|d| d.card.id() == card_id) {
            return Err(EngineError::CardAlreadyDrawn { match_id, card_id });
        }

        let seq = record.draws.len() as u32;
        record.draws.push(DrawRecord {
            match_id,
            participant_id,
            card,
            seq,
        });
        Ok(())
    }

    fn aggregate_score(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<Score, EngineError> {
        let record = self.record(match_id)?;
        record.participant(participant_id)?;
        Ok(Score::from_cards(
            record.draws_of(participant_id).map(|d| &d.card),
        ))
    }

    fn other_participant(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<ParticipantId, EngineError> {
        let record = self.record(match_id)?;
        record.participant(participant_id)?;
        record
            .participants
            .iter()
            .find(|p| p.id != participant_id)
            .map(|p| p.id)
            .ok_or(EngineError::ParticipantNotFound {
                match_id,
                participant_id,
            })
    }

    fn winner_flag(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<bool, EngineError> {
        Ok(self.record(match_id)?.participant(participant_id)?.won)
    }

    fn set_winner(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<(), EngineError> {
        let record = self.record_mut(match_id)?;
        record.participant(participant_id)?;

        if record.participants.iter().any(|p| p.won) {
            return Ok(());
        }
        if let Some(p) = record
            .participants
            .iter_mut()
            .find(|p| p.id == participant_id)
        {
            p.won = true;
        }
        Ok(())
    }

    fn drawn_cards(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<Vec<Card>, EngineError> {
        let record = self.record(match_id)?;
        record.participant(participant_id)?;
        let mut draws: Vec<&DrawRecord> = record.draws_of(participant_id).collect();
        draws.sort_by_key(|d| d.seq);
        Ok(draws.into_iter().map(|d| d.card).collect())
    }

    fn match_ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = self.matches.keys().copied().collect();
        ids.sort();
        ids
    }
}
