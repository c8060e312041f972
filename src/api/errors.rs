use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{MatchId, ParticipantId};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    #[error("participant {participant_id} not found in match {match_id}")]
    ParticipantNotFound {
        match_id: MatchId,
        participant_id: ParticipantId,
    },

    #[error("deck exhausted in match {0}")]
    DeckExhausted(MatchId),

    /// Конфликт записи. `retryable = true` – ту же операцию можно повторить.
    #[error("conflict: {message}")]
    Conflict { message: String, retryable: bool },

    /// Внутренняя ошибка сервера.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MatchNotFound(id) => ApiError::MatchNotFound(id),
            EngineError::ParticipantNotFound {
                match_id,
                participant_id,
            } => ApiError::ParticipantNotFound {
                match_id,
                participant_id,
            },
            EngineError::DeckExhausted(id) => ApiError::DeckExhausted(id),
            EngineError::CardAlreadyDrawn { .. } | EngineError::DeckAlreadyExists(_) => {
                ApiError::Conflict {
                    retryable: err.is_retryable(),
                    message: err.to_string(),
                }
            }
            EngineError::UnknownCard { .. } | EngineError::InvalidConfig(_) => {
                ApiError::BadRequest(err.to_string())
            }
            EngineError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}
