use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{MatchId, ParticipantId};
use crate::engine::{MatchEngine, RandomSource, SharedEngine};
use crate::infra::mapping::map_match_view_to_dto;
use crate::infra::persistence::Repository;

use super::commands::{Command, MatchRef};
use super::dto::{CommandResponse, MatchViewDto};
use super::errors::ApiError;
use super::queries::{Query, QueryResponse};

/// Любой входящий запрос: команда или запрос на чтение.
///
/// JSON: `"NewMatch"`, `{"Hit":{...}}`, `{"Stick":{...}}`, `{"Show":{...}}`, `"ListMatches"`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Request {
    Command(Command),
    Query(Query),
}

/// Фасад сервиса: переводит вызовы транспорта в операции движка
/// и отдаёт ответы в клиентском виде. Ошибки движка пробрасываются как есть.
pub struct BlackjackService<S, R> {
    engine: SharedEngine<S, R>,
}

impl<S, R> Clone for BlackjackService<S, R> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<S: Repository, R: RandomSource> BlackjackService<S, R> {
    pub fn new(engine: MatchEngine<S, R>) -> Self {
        Self {
            engine: SharedEngine::new(engine),
        }
    }

    pub fn new_match(&self) -> Result<MatchViewDto, ApiError> {
        let view = self.engine.new_match()?;
        Ok(map_match_view_to_dto(&view))
    }

    pub fn hit(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchViewDto, ApiError> {
        let view = self.engine.hit(match_id, participant_id)?;
        Ok(map_match_view_to_dto(&view))
    }

    pub fn stick(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchViewDto, ApiError> {
        let view = self.engine.stick(match_id, participant_id)?;
        Ok(map_match_view_to_dto(&view))
    }

    pub fn show(
        &self,
        match_id: MatchId,
        participant_id: ParticipantId,
    ) -> Result<MatchViewDto, ApiError> {
        let view = self.engine.show(match_id, participant_id)?;
        Ok(map_match_view_to_dto(&view))
    }

    pub fn execute(&self, command: Command) -> Result<CommandResponse, ApiError> {
        debug!(?command, "executing command");
        match command {
            Command::NewMatch => self.new_match().map(CommandResponse::MatchCreated),
            Command::Hit(MatchRef {
                match_id,
                participant_id,
            }) => self.hit(match_id, participant_id).map(CommandResponse::MatchState),
            Command::Stick(MatchRef {
                match_id,
                participant_id,
            }) => self
                .stick(match_id, participant_id)
                .map(CommandResponse::MatchState),
        }
    }

    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        debug!(?query, "executing query");
        match query {
            Query::Show(MatchRef {
                match_id,
                participant_id,
            }) => self.show(match_id, participant_id).map(QueryResponse::Match),
            Query::ListMatches => {
                let ids = self.engine.with_engine(|e| Ok(e.storage().match_ids()))?;
                Ok(QueryResponse::Matches(ids))
            }
        }
    }

    /// JSON-вход для транспорта (RPC, stdin и т.п.).
    ///
    /// Успешный ответ – JSON матча (`match_uuid`, `player_id`, `dealer_id`, `game`,
    /// `score`, `cards`) или список id; ошибка – `{"error": ...}`.
    pub fn handle_json(&self, raw: &str) -> String {
        let result = serde_json::from_str::<Request>(raw)
            .map_err(|err| ApiError::BadRequest(err.to_string()))
            .and_then(|request| self.dispatch(request));

        let value = match result {
            Ok(value) => value,
            Err(err) => json!({ "error": err }),
        };
        value.to_string()
    }

    fn dispatch(&self, request: Request) -> Result<serde_json::Value, ApiError> {
        let value = match request {
            Request::Command(command) => serde_json::to_value(self.execute(command)?.into_view()),
            Request::Query(query) => match self.query(query)? {
                QueryResponse::Match(view) => serde_json::to_value(view),
                QueryResponse::Matches(ids) => serde_json::to_value(ids),
            },
        };
        value.map_err(|err| ApiError::Internal(err.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BlackjackService<crate::infra::InMemoryRepository, crate::infra::ConfiguredRng> {
    /// Сервис поверх in-memory хранилища, RNG выбирается по конфигу.
    pub fn in_memory(config: &crate::config::EngineConfig) -> Self {
        let engine = MatchEngine::new(
            crate::infra::InMemoryRepository::new(),
            crate::infra::ConfiguredRng::from_seed(config.rng_seed),
        );
        Self::new(engine)
    }
}
