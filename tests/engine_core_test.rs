//! Интеграционные тесты матча: стартовая раздача, hit / stick / show,
//! запись победителя и идемпотентность после решения.

use blackjack_engine::{
    domain::{Card, Deck, MatchId, MatchState, Outcome, ParticipantId, BLACKJACK},
    engine::{EngineError, MatchEngine, MatchView, DEALER_OPENING_CARDS, PLAYER_OPENING_CARDS},
    eval::best_score,
    infra::{
        persistence::{InMemoryRepository, Repository},
        rng::DeterministicRng,
    },
};

type Engine = MatchEngine<InMemoryRepository, DeterministicRng>;

fn engine(seed: u64) -> Engine {
    MatchEngine::new(InMemoryRepository::new(), DeterministicRng::from_seed(seed))
}

/// Матч без стартовой раздачи: колода и два участника.
fn setup(engine: &mut Engine) -> (MatchId, ParticipantId, ParticipantId) {
    let repo = engine.storage_mut();
    let match_id = repo.create_match();
    repo.create_deck(match_id, &Deck::standard_52(match_id).cards)
        .expect("deck");
    let (dealer_id, player_id) = repo.create_participants(match_id).expect("participants");
    (match_id, player_id, dealer_id)
}

fn give(engine: &mut Engine, match_id: MatchId, who: ParticipantId, cards: &[&str]) {
    for c in cards {
        let card: Card = c.parse().expect("card notation");
        engine
            .storage_mut()
            .record_draw(match_id, who, card.id())
            .expect("record draw");
    }
}

fn total_draws(view: &MatchView) -> usize {
    view.player_cards.len() + view.dealer_cards.len()
}

//
// ---------- new_match ----------
//

#[test]
fn new_match_deals_opening_cards() {
    for seed in 0..300 {
        let mut e = engine(seed);
        let view = e.new_match().unwrap();

        assert_eq!(view.player_cards.len(), PLAYER_OPENING_CARDS);
        assert_eq!(view.player_score.count as usize, PLAYER_OPENING_CARDS);
        assert_ne!(view.player_id, view.dealer_id);

        match view.outcome {
            Outcome::Ongoing => {
                assert_eq!(view.dealer_cards.len(), DEALER_OPENING_CARDS);
                assert!(best_score(&view.player_score) < BLACKJACK);
            }
            // Натуральный блэкджек: дилеру уже не сдают.
            Outcome::PlayerWins => {
                assert_eq!(best_score(&view.player_score), BLACKJACK);
                assert!(view.dealer_cards.is_empty());
            }
            Outcome::DealerWins => panic!("seed {seed}: two cards can never bust"),
        }
    }
}

#[test]
fn new_match_is_listed_and_uses_fresh_ids() {
    let mut e = engine(9);
    let a = e.new_match().unwrap();
    let b = e.new_match().unwrap();

    assert_ne!(a.match_id, b.match_id);
    assert_ne!(a.player_id, b.player_id);

    let ids = e.storage().match_ids();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.match_id) && ids.contains(&b.match_id));
}

//
// ---------- show / evaluate ----------
//

#[test]
fn show_is_ongoing_while_dealer_has_one_card() {
    let mut e = engine(1);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["Th", "5c", "5d"]);
    give(&mut e, m, dealer, &["9s"]);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::Ongoing);
    assert_eq!(e.match_state(m, player).unwrap(), MatchState::InProgress);
}

#[test]
fn show_records_player_win_once() {
    let mut e = engine(2);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["Th", "Qc"]);
    give(&mut e, m, dealer, &["9s", "Tc"]);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::PlayerWins);
    assert!(e.storage().winner_flag(m, player).unwrap());
    assert!(!e.storage().winner_flag(m, dealer).unwrap());
    assert_eq!(
        e.match_state(m, player).unwrap(),
        MatchState::Decided { winner: player }
    );
}

#[test]
fn player_natural_wins_before_dealer_plays() {
    let mut e = engine(3);
    let (m, player, _) = setup(&mut e);
    give(&mut e, m, player, &["Ah", "Kd"]);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::PlayerWins);
    assert!(view.dealer_cards.is_empty());
}

#[test]
fn player_bust_is_dealer_win() {
    let mut e = engine(4);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["Th", "Qc", "5d"]);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::DealerWins);
    assert!(e.storage().winner_flag(m, dealer).unwrap());
}

#[test]
fn stored_winner_beats_fresh_evaluation() {
    let mut e = engine(5);
    let (m, player, dealer) = setup(&mut e);
    // По картам игрок выиграл бы (21), но победитель уже записан.
    e.storage_mut().set_winner(m, dealer).unwrap();
    give(&mut e, m, player, &["Ah", "Kd"]);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::DealerWins);
    assert!(!e.storage().winner_flag(m, player).unwrap());
}

//
// ---------- hit / stick ----------
//

#[test]
fn hit_adds_exactly_one_card() {
    let mut e = engine(6);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["2h", "3c"]);
    give(&mut e, m, dealer, &["9s"]);

    let before = e.show(m, player).unwrap();
    let after = e.hit(m, player).unwrap();

    assert_eq!(after.player_cards.len(), before.player_cards.len() + 1);
    assert_eq!(after.dealer_cards, before.dealer_cards);
    assert_eq!(after.player_cards[..2], before.player_cards[..]);
}

#[test]
fn stick_lets_dealer_finish_and_decides_match() {
    for seed in 0..200 {
        let mut e = engine(seed);
        let (m, player, dealer) = setup(&mut e);
        give(&mut e, m, player, &["Th", "7c"]);
        give(&mut e, m, dealer, &["2d"]);

        let view = e.stick(m, player).unwrap();

        assert!(view.dealer_score.min_total() > 17, "seed {seed}");
        assert!(view.dealer_cards.len() >= 2);
        assert!(view.outcome.is_decided(), "seed {seed}: {view:?}");
        assert_eq!(view.player_cards.len(), 2);
        assert!(e.match_state(m, dealer).unwrap().is_decided());
    }
}

#[test]
fn dealer_with_high_total_does_not_draw_on_stick() {
    let mut e = engine(7);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["Th", "9c"]);
    give(&mut e, m, dealer, &["Td", "8s"]);

    let view = e.stick(m, player).unwrap();
    assert_eq!(view.dealer_cards.len(), 2);
    // 19 против 18
    assert_eq!(view.outcome, Outcome::PlayerWins);
}

#[test]
fn operations_after_decision_change_nothing() {
    let mut e = engine(8);
    let (m, player, dealer) = setup(&mut e);
    give(&mut e, m, player, &["Th", "Qc", "5d"]);
    give(&mut e, m, dealer, &["9s"]);

    let decided = e.show(m, player).unwrap();
    assert_eq!(decided.outcome, Outcome::DealerWins);
    let left = e.storage().undrawn_cards(m).unwrap().len();

    for _ in 0..3 {
        assert_eq!(e.hit(m, player).unwrap(), decided);
        assert_eq!(e.stick(m, player).unwrap(), decided);
        assert_eq!(e.show(m, player).unwrap(), decided);
    }
    assert_eq!(e.storage().undrawn_cards(m).unwrap().len(), left);
    assert_eq!(total_draws(&decided), 4);
}

//
// ---------- errors ----------
//

#[test]
fn unknown_match_and_participant_are_errors() {
    let mut e = engine(10);
    let (m, _, _) = setup(&mut e);
    let missing = MatchId::new_random();

    assert_eq!(e.hit(missing, 1), Err(EngineError::MatchNotFound(missing)));
    assert_eq!(e.stick(missing, 1), Err(EngineError::MatchNotFound(missing)));
    assert_eq!(e.show(missing, 1), Err(EngineError::MatchNotFound(missing)));

    assert_eq!(
        e.hit(m, 999),
        Err(EngineError::ParticipantNotFound {
            match_id: m,
            participant_id: 999
        })
    );
}

#[test]
fn hit_on_empty_deck_is_exhausted() {
    let mut e = engine(11);
    let repo = e.storage_mut();
    let m = repo.create_match();
    let small: Vec<Card> = ["2h", "3h"].iter().map(|s| s.parse().unwrap()).collect();
    repo.create_deck(m, &small).unwrap();
    let (_, player) = repo.create_participants(m).unwrap();
    give(&mut e, m, player, &["2h", "3h"]);

    assert_eq!(e.hit(m, player), Err(EngineError::DeckExhausted(m)));
    // Ничего не записано, матч всё ещё идёт.
    let view = e.show(m, player).unwrap();
    assert_eq!(view.player_cards.len(), 2);
    assert_eq!(view.outcome, Outcome::Ongoing);
}

#[test]
fn stick_on_short_deck_changes_nothing() {
    let mut e = engine(12);
    let repo = e.storage_mut();
    let m = repo.create_match();
    let small: Vec<Card> = ["Th", "8h", "2c", "3c"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    repo.create_deck(m, &small).unwrap();
    let (dealer, player) = repo.create_participants(m).unwrap();
    give(&mut e, m, player, &["Th", "8h"]);

    // 2 + 3 = 5: дилеру не хватает карт, чтобы доиграть.
    assert_eq!(e.stick(m, player), Err(EngineError::DeckExhausted(m)));

    assert_eq!(
        e.storage().aggregate_score(m, dealer).unwrap(),
        blackjack_engine::domain::Score::ZERO
    );
    assert_eq!(e.storage().undrawn_cards(m).unwrap().len(), 2);
    assert_eq!(e.match_state(m, player).unwrap(), MatchState::InProgress);

    let view = e.show(m, player).unwrap();
    assert_eq!(view.outcome, Outcome::Ongoing);
    assert!(view.dealer_cards.is_empty());
}
