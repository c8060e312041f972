use serde::{Deserialize, Serialize};

use crate::domain::MatchId;

use super::commands::MatchRef;
use super::dto::MatchViewDto;

/// Запросы "только чтение" (с точки зрения клиента).
///
/// `Show` может записать победителя, если итог появился впервые,
/// но повторные вызовы ничего не меняют.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние матча глазами игрока.
    Show(MatchRef),

    /// Список матчей (для лобби / CLI).
    ListMatches,
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Match(MatchViewDto),
    Matches(Vec<MatchId>),
}
