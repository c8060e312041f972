use tracing::{debug, warn};

use crate::domain::card::Card;
use crate::domain::{MatchId, ParticipantId};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::infra::persistence::Repository;

/// Вытянуть случайную карту из ещё не взятых в матче.
///
/// Равномерный выбор из оставшихся карт заменяет перемешивание колоды:
/// порядок карт хранить не нужно. Карта здесь НЕ записывается за участником.
pub fn draw_card<S, R>(storage: &S, rng: &mut R, match_id: MatchId) -> Result<Card, EngineError>
where
    S: Repository + ?Sized,
    R: RandomSource,
{
    let mut remaining = storage.undrawn_cards(match_id)?;
    take_random(&mut remaining, rng, match_id)
}

/// Убрать из `remaining` случайную карту и вернуть её.
///
/// Порядок оставшихся карт сохраняется, так что серия вызовов даёт то же,
/// что и повторные `draw_card` с записью после каждого.
pub fn take_random<R>(
    remaining: &mut Vec<Card>,
    rng: &mut R,
    match_id: MatchId,
) -> Result<Card, EngineError>
where
    R: RandomSource,
{
    if remaining.is_empty() {
        warn!(%match_id, "deck exhausted");
        return Err(EngineError::DeckExhausted(match_id));
    }

    let idx = rng.choose_index(remaining.len()).min(remaining.len() - 1);
    Ok(remaining.remove(idx))
}

/// Вытянуть карту и записать её за участником.
pub fn deal_to<S, R>(
    storage: &mut S,
    rng: &mut R,
    match_id: MatchId,
    participant_id: ParticipantId,
) -> Result<Card, EngineError>
where
    S: Repository + ?Sized,
    R: RandomSource,
{
    let card = draw_card(&*storage, rng, match_id)?;

    if let Err(err) = storage.record_draw(match_id, participant_id, card.id()) {
        if matches!(err, EngineError::CardAlreadyDrawn { .. }) {
            warn!(%match_id, participant_id, %card, "concurrent draw rejected");
        }
        return Err(err);
    }

    debug!(%match_id, participant_id, %card, "card drawn");
    Ok(card)
}
