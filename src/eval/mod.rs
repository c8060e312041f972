//! Оценка партии блэкджека.
//!
//! Основная функция:
//!   `evaluate(player, dealer) -> Outcome`

pub mod evaluator;

pub use evaluator::{best_score, evaluate, DEALER_MIN_CARDS, DEALER_STAND_ABOVE};
