//! Движок блэкджека: взятие карт, подсчёт очков, автоигра дилера, матч.
//!
//! Высокоуровневый объект: `MatchEngine`
//! Основные операции:
//!   - `new_match` – создать матч и сделать стартовую раздачу
//!   - `hit` – взять карту
//!   - `stick` – остановиться, дилер доигрывает
//!   - `show` – текущее состояние (и запись победителя при первом итоге)

pub mod dealer;
pub mod draw;
pub mod errors;
pub mod game_loop;
pub mod scorer;
pub mod shared;

pub use dealer::{dealer_should_draw, play_dealer};
pub use draw::{deal_to, draw_card, take_random};
pub use errors::EngineError;
pub use game_loop::{MatchEngine, MatchView, DEALER_OPENING_CARDS, PLAYER_OPENING_CARDS};
pub use scorer::{score, score_pair};
pub use shared::SharedEngine;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно выбрать индекс из `0..len` (`len > 0`).
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}
