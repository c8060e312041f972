//! Главный модуль приложения Blackjack на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим BlackjackState.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, CommandResponse, Query, QueryResponse};
use crate::state::BlackjackState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BlackjackOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Матчи независимы, так что сообщений нет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BlackjackMessage {}

/// Запросы к сервису (read-only).
pub type BlackjackQuery = Query;

/// Ответы на запросы.
pub type BlackjackResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct BlackjackAbi;

impl ContractAbi for BlackjackAbi {
    type Operation = BlackjackOperation;
    type Response = CommandResponse;
}

impl ServiceAbi for BlackjackAbi {
    type Query = BlackjackQuery;
    type QueryResponse = BlackjackResponse;
}

/// Экспортируем тип состояния, чтобы contract.rs и service.rs могли его использовать.
pub type Storage = BlackjackState;
