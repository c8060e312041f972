use tracing::debug;

use crate::domain::hand::Score;
use crate::domain::{MatchId, ParticipantId};
use crate::engine::draw::take_random;
use crate::engine::errors::EngineError;
use crate::engine::scorer;
use crate::engine::RandomSource;
use crate::eval::DEALER_STAND_ABOVE;
use crate::infra::persistence::Repository;

/// Должен ли дилер брать ещё: пока меньшая из сумм не больше 17.
pub fn dealer_should_draw(score: &Score) -> bool {
    score.min_total() <= DEALER_STAND_ABOVE
}

/// Автоигра дилера: добирать карты, пока `min(low, high) <= 17`.
///
/// Карты сначала выбираются из оставшихся и записываются за дилером только
/// после того, как он доиграл. Если колоды не хватило, возвращается
/// `DeckExhausted` и в хранилище ничего не меняется.
pub fn play_dealer<S, R>(
    storage: &mut S,
    rng: &mut R,
    match_id: MatchId,
    dealer_id: ParticipantId,
) -> Result<Score, EngineError>
where
    S: Repository + ?Sized,
    R: RandomSource,
{
    let mut score = scorer::score(&*storage, match_id, dealer_id)?;
    let mut remaining = storage.undrawn_cards(match_id)?;
    let mut picked = Vec::new();

    while dealer_should_draw(&score) {
        let card = take_random(&mut remaining, rng, match_id)?;
        score = score.with(&card);
        picked.push(card);
        debug!(
            %match_id,
            dealer_id,
            %card,
            low = score.low,
            high = score.high,
            "dealer drew"
        );
    }

    for card in &picked {
        storage.record_draw(match_id, dealer_id, card.id())?;
    }

    Ok(score)
}
