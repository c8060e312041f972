//! Инфраструктурный слой вокруг движка блэкджека:
//! - генерация ID;
//! - RNG-реализации для политики взятия карт;
//! - абстракция хранения матчей (репозиторий) и in-memory реализация;
//! - маппинги между движком и API.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
