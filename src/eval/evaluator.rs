use crate::domain::game::Outcome;
use crate::domain::hand::{Score, BLACKJACK};

/// Дилер считается «сыгравшим», когда у него хотя бы столько карт.
pub const DEALER_MIN_CARDS: u32 = 2;

/// Выше этого порога дилер может выиграть по очкам.
pub const DEALER_STAND_ABOVE: u32 = 17;

/// Лучший счёт участника (см. `Score::best`).
pub fn best_score(score: &Score) -> u32 {
    score.best()
}

/// Решение о ходе партии по очкам игрока и дилера.
///
/// Правила проверяются сверху вниз, срабатывает первое:
/// 1. игрок не добрал до 21 и дилер ещё не играл (меньше 2 карт) → партия идёт;
/// 2. игрок выиграл: у него ровно 21, или дилер перебрал,
///    или дилер сыграл и `dealer <= player <= 21`;
/// 3. дилер выиграл: игрок перебрал,
///    или дилер сыграл, `17 < dealer <= 21` и `player < dealer`;
/// 4. иначе партия идёт.
///
/// 21 у игрока побеждает всегда, даже натуральные 21 у дилера.
/// Это упрощение оставлено намеренно, ничьей здесь нет.
pub fn evaluate(player: &Score, dealer: &Score) -> Outcome {
    let player_best = best_score(player);
    let dealer_best = best_score(dealer);
    let dealer_played = dealer.count >= DEALER_MIN_CARDS;

    if player_best < BLACKJACK && !dealer_played {
        return Outcome::Ongoing;
    }

    let player_wins = player_best == BLACKJACK
        || dealer_best > BLACKJACK
        || (dealer_played && dealer_best <= player_best && player_best <= BLACKJACK);
    if player_wins {
        return Outcome::PlayerWins;
    }

    let dealer_wins = player_best > BLACKJACK
        || (dealer_played
            && DEALER_STAND_ABOVE < dealer_best
            && dealer_best <= BLACKJACK
            && player_best < dealer_best);
    if dealer_wins {
        return Outcome::DealerWins;
    }

    Outcome::Ongoing
}
