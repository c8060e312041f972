//! Тесты оценщика партии (crate::eval).

use blackjack_engine::domain::{Outcome, Score};
use blackjack_engine::eval::{best_score, evaluate};

fn s(low: u32, high: u32, count: u32) -> Score {
    Score::new(low, high, count)
}

/// Эталонные векторы: (очки игрока, очки дилера, ожидаемый итог).
#[test]
fn evaluator_reference_vectors() {
    let cases = [
        (s(18, 18, 3), s(19, 19, 2), Outcome::DealerWins),
        (s(22, 22, 3), s(19, 19, 2), Outcome::DealerWins),
        (s(20, 20, 3), s(19, 19, 2), Outcome::PlayerWins),
        (s(12, 32, 3), s(18, 18, 2), Outcome::DealerWins),
        (s(20, 20, 3), s(20, 20, 2), Outcome::PlayerWins),
        (s(12, 32, 3), s(21, 21, 2), Outcome::DealerWins),
        (s(12, 32, 3), s(20, 29, 3), Outcome::DealerWins),
        (s(12, 32, 3), s(29, 29, 3), Outcome::PlayerWins),
    ];

    for (player, dealer, expected) in cases {
        assert_eq!(
            evaluate(&player, &dealer),
            expected,
            "player={player:?} dealer={dealer:?}"
        );
    }
}

/// Правило 1: дилер ещё не играл, игрок не добрал – партия идёт.
#[test]
fn dealer_not_started_keeps_game_going() {
    assert_eq!(evaluate(&s(20, 20, 3), &s(9, 9, 1)), Outcome::Ongoing);
    assert_eq!(evaluate(&s(0, 0, 0), &s(0, 0, 0)), Outcome::Ongoing);
    // Даже если у дилера 1 карта, которая больше – всё равно ждём.
    assert_eq!(evaluate(&s(5, 5, 2), &s(1, 11, 1)), Outcome::Ongoing);
}

/// 21 у игрока выигрывает сразу, даже до игры дилера.
#[test]
fn player_twenty_one_wins_immediately() {
    assert_eq!(evaluate(&s(11, 21, 2), &s(10, 10, 1)), Outcome::PlayerWins);
    assert_eq!(evaluate(&s(21, 21, 4), &s(0, 0, 0)), Outcome::PlayerWins);
}

/// Намеренное упрощение: натуральные 21 игрока бьют натуральные 21 дилера.
#[test]
fn player_natural_beats_dealer_natural() {
    assert_eq!(evaluate(&s(11, 21, 2), &s(11, 21, 2)), Outcome::PlayerWins);
}

/// Перебор игрока – победа дилера, даже если дилер не играл.
#[test]
fn player_bust_loses_before_dealer_plays() {
    assert_eq!(evaluate(&s(25, 25, 3), &s(10, 10, 1)), Outcome::DealerWins);
}

/// Дилер с 2+ картами и 17 или меньше, больше игрока: ещё не решено.
#[test]
fn dealer_low_total_above_player_is_ongoing() {
    assert_eq!(evaluate(&s(12, 12, 2), &s(16, 16, 2)), Outcome::Ongoing);
    assert_eq!(evaluate(&s(12, 12, 2), &s(17, 17, 3)), Outcome::Ongoing);
}

/// Граница выбора туза: high = 21 берётся, high = 22 – нет.
#[test]
fn ace_value_boundary() {
    assert_eq!(best_score(&s(11, 21, 2)), 21);
    assert_eq!(best_score(&s(2, 22, 2)), 2);
}

/// Оценка – чистая функция: одни и те же входы, один и тот же итог.
#[test]
fn evaluate_is_pure() {
    let player = s(19, 19, 2);
    let dealer = s(18, 18, 3);
    let first = evaluate(&player, &dealer);
    for _ in 0..10 {
        assert_eq!(evaluate(&player, &dealer), first);
    }
    assert_eq!(first, Outcome::PlayerWins);
}
