use crate::api::dto::{CardsDto, MatchViewDto, ScoreDto};
use crate::domain::card::Card;
use crate::domain::game::Outcome;
use crate::engine::MatchView;

/// Маппинг итога между domain и API (текст статуса).
pub fn outcome_to_api(outcome: Outcome) -> String {
    outcome.status_text().to_string()
}

pub fn outcome_from_api(status: &str) -> Option<Outcome> {
    [Outcome::Ongoing, Outcome::PlayerWins, Outcome::DealerWins]
        .into_iter()
        .find(|o| o.status_text() == status)
}

fn cards_to_api(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

/// Утилита: маппинг MatchView движка -> MatchViewDto.
pub fn map_match_view_to_dto(view: &MatchView) -> MatchViewDto {
    MatchViewDto {
        match_uuid: view.match_id,
        player_id: view.player_id,
        dealer_id: view.dealer_id,
        game: outcome_to_api(view.outcome),
        score: ScoreDto {
            player: view.player_score.to_string(),
            dealer: view.dealer_score.to_string(),
        },
        cards: CardsDto {
            player: cards_to_api(&view.player_cards),
            dealer: cards_to_api(&view.dealer_cards),
        },
    }
}
