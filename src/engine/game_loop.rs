use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::game::{MatchState, Outcome};
use crate::domain::hand::Score;
use crate::domain::{MatchId, ParticipantId};
use crate::engine::dealer::play_dealer;
use crate::engine::draw::deal_to;
use crate::engine::errors::EngineError;
use crate::engine::scorer::score_pair;
use crate::engine::RandomSource;
use crate::eval::evaluate;
use crate::infra::persistence::Repository;

/// Сколько карт игрок получает при старте матча.
pub const PLAYER_OPENING_CARDS: usize = 2;
/// Сколько карт дилер получает при старте матча.
pub const DEALER_OPENING_CARDS: usize = 1;

/// Результат любой операции движка: текущее состояние матча глазами игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchView {
    pub match_id: MatchId,
    pub player_id: ParticipantId,
    pub dealer_id: ParticipantId,
    pub outcome: Outcome,
    pub player_score: Score,
    pub dealer_score: Score,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
}

/// Движок матчей поверх репозитория.
///
/// Состояния матча в памяти не держит: каждая операция читает
/// всё нужное из `storage` и пишет результат туда же.
/// Операции берут `&mut self`, поэтому каждая выполняется целиком и без вмешательства.
pub struct MatchEngine<S, R> {
    storage: S,
    rng: R,
}

impl<S: Repository, R: RandomSource> MatchEngine<S, R> {
    pub fn new(storage: S, rng: R) -> Self {
        Self { storage, rng }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Новый матч: колода, игрок и дилер, стартовая раздача (2 карты игроку, 1 дилеру).
    pub fn new_match(&mut self) -> Result<MatchView, EngineError> {
        let match_id = self.storage.create_match();
        let deck = Deck::standard_52(match_id);
        self.storage.create_deck(match_id, &deck.cards)?;
        let (dealer_id, player_id) = self.storage.create_participants(match_id)?;

        info!(%match_id, player_id, dealer_id, "match created");

        for _ in 0..PLAYER_OPENING_CARDS {
            self.hit(match_id, player_id)?;
        }
        // Карту дилеру сдаём без `hit(dealer)`: его `show` смотрел бы на матч
        // глазами дилера и мог бы записать победителя с перепутанными ролями.
        for _ in 0..DEALER_OPENING_CARDS {
            if self.match_state(match_id, player_id)?.is_decided() {
                break;
            }
            deal_to(&mut self.storage, &mut self.rng, match_id, dealer_id)?;
        }

        self.show(match_id, player_id)
    }

    /// Взять карту. После того как победитель записан, ничего не делает.
    pub fn hit(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        if self.match_state(match_id, participant_id)?.is_decided() {
            debug!(%match_id, participant_id, "hit ignored: match already decided");
        } else {
            deal_to(&mut self.storage, &mut self.rng, match_id, participant_id)?;
        }

        self.show(match_id, participant_id)
    }

    /// Остановиться: дилер доигрывает до конца. После решения матча ничего не делает.
    pub fn stick(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        if self.match_state(match_id, participant_id)?.is_decided() {
            debug!(%match_id, participant_id, "stick ignored: match already decided");
        } else {
            let dealer_id = self.storage.other_participant(match_id, participant_id)?;
            let dealer_score = play_dealer(&mut self.storage, &mut self.rng, match_id, dealer_id)?;
            debug!(
                %match_id,
                dealer_id,
                low = dealer_score.low,
                high = dealer_score.high,
                hands = dealer_score.count,
                "dealer finished"
            );
        }

        self.show(match_id, participant_id)
    }

    /// Текущее состояние матча.
    ///
    /// Записанный победитель важнее свежей оценки. Если оценка впервые дала
    /// итог, победитель сохраняется; дальше `show` только читает.
    pub fn show(
        &mut self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        let dealer_id = self.storage.other_participant(match_id, participant_id)?;
        let (player_score, dealer_score) =
            score_pair(&self.storage, match_id, participant_id, dealer_id)?;

        let outcome = match self.match_state(match_id, participant_id)? {
            MatchState::Decided { winner } if winner == participant_id => Outcome::PlayerWins,
            MatchState::Decided { .. } => Outcome::DealerWins,
            MatchState::InProgress => {
                let outcome = evaluate(&player_score, &dealer_score);
                if let Some(winner) = winner_of(outcome, participant_id, dealer_id) {
                    self.storage.set_winner(match_id, winner)?;
                    info!(
                        %match_id,
                        winner,
                        outcome = %outcome,
                        player_score = %player_score,
                        dealer_score = %dealer_score,
                        "match decided"
                    );
                }
                outcome
            }
        };

        Ok(MatchView {
            match_id,
            player_id: participant_id,
            dealer_id,
            outcome,
            player_score,
            dealer_score,
            player_cards: self.storage.drawn_cards(match_id, participant_id)?,
            dealer_cards: self.storage.drawn_cards(match_id, dealer_id)?,
        })
    }

    /// Записан ли уже победитель, и кто он.
    pub fn match_state(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchState, EngineError> {
        let dealer_id = self.storage.other_participant(match_id, participant_id)?;

        if self.storage.winner_flag(match_id, participant_id)? {
            Ok(MatchState::Decided {
                winner: participant_id,
            })
        } else if self.storage.winner_flag(match_id, dealer_id)? {
            Ok(MatchState::Decided { winner: dealer_id })
        } else {
            Ok(MatchState::InProgress)
        }
    }
}

fn winner_of(
    outcome: Outcome,
    player_id: ParticipantId,
    dealer_id: ParticipantId,
) -> Option<ParticipantId> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::PlayerWins => Some(player_id),
        Outcome::DealerWins => Some(dealer_id),
    }
}
