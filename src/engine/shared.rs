use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{MatchId, ParticipantId};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{MatchEngine, MatchView};
use crate::engine::RandomSource;
use crate::infra::persistence::Repository;

/// Общий движок для нескольких потоков / запросов.
///
/// Каждая операция целиком выполняется под одной блокировкой:
/// два параллельных `hit` не вытянут одну и ту же карту,
/// а два `show` не запишут победителя дважды.
pub struct SharedEngine<S, R> {
    inner: Arc<Mutex<MatchEngine<S, R>>>,
}

impl<S, R> Clone for SharedEngine<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Repository, R: RandomSource> SharedEngine<S, R> {
    pub fn new(engine: MatchEngine<S, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MatchEngine<S, R>>, EngineError> {
        self.inner.lock().map_err(|_| EngineError::LockPoisoned)
    }

    /// Выполнить произвольную работу с движком под блокировкой.
    pub fn with_engine<T>(
        &self,
        f: impl FnOnce(&mut MatchEngine<S, R>) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let mut engine = self.lock()?;
        f(&mut *engine)
    }

    pub fn new_match(&self) -> Result<MatchView, EngineError> {
        self.with_engine(|e| e.new_match())
    }

    pub fn hit(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        self.with_engine(|e| e.hit(match_id, participant_id))
    }

    pub fn stick(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        self.with_engine(|e| e.stick(match_id, participant_id))
    }

    pub fn show(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchView, EngineError> {
        self.with_engine(|e| e.show(match_id, participant_id))
    }
}
