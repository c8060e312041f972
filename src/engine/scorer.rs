use crate::domain::hand::Score;
use crate::domain::{MatchId, ParticipantId};
use crate::engine::errors::EngineError;
use crate::infra::persistence::Repository;

/// Очки участника в матче: (low, high, count). Без побочных эффектов.
pub fn score<S>(
    storage: &S,
    match_id: MatchId,
    participant_id: ParticipantId,
) -> Result<Score, EngineError>
where
    S: Repository + ?Sized,
{
    storage.aggregate_score(match_id, participant_id)
}

/// Очки игрока и дилера одним вызовом.
pub fn score_pair<S>(
    storage: &S,
    match_id: MatchId,
    player_id: ParticipantId,
    dealer_id: ParticipantId,
) -> Result<(Score, Score), EngineError>
where
    S: Repository + ?Sized,
{
    Ok((
        score(storage, match_id, player_id)?,
        score(storage, match_id, dealer_id)?,
    ))
}
