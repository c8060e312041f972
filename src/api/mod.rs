//! Внешний API движка блэкджека.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет состояние (новый матч, hit, stick);
//! - запросы (queries.rs) - show и список матчей;
//! - DTO (dto.rs) - ответы в том виде, в каком их видит клиент;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - сервис (service.rs) - фасад, переводящий запросы в операции движка.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::*;
