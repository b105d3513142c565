use serde_json::{json, Value};

use crate::card_game::{
    models::{CardType, Hand, Player},
    session::GameSession,
};

/// Placeholder image served for a card face.
pub fn card_image_url(card: CardType) -> String {
    format!("/api/placeholder/100/140?text={card}")
}

/// A dealt card as the hand panel shows it. `id` is the position in the hand,
/// so duplicate card types stay distinct.
fn hand_card(id: usize, card: CardType) -> Value {
    json!({ "id": id, "card": card.label(), "image": card_image_url(card) })
}

fn hand_panel(player: Player, hand: &Hand) -> Value {
    let cards: Vec<Value> = hand
        .iter()
        .enumerate()
        .map(|(i, &c)| hand_card(i, c))
        .collect();
    json!({ "player": player.name(), "cards": cards })
}

/// The "Available Cards" gallery: every card type once.
fn available_cards() -> Value {
    Value::Array(
        CardType::ALL
            .iter()
            .map(|&c| json!({ "card": c.label(), "image": card_image_url(c) }))
            .collect(),
    )
}

/// Map a session to the JSON view state a front end renders from.
pub fn to_view_state(session: &GameSession) -> Value {
    let hands: Vec<Value> = session
        .player_hands()
        .iter()
        .map(|(player, hand)| hand_panel(player, hand))
        .collect();
    let players: Vec<&str> = Player::ALL.iter().map(|p| p.name()).collect();

    json!({
        "phase": session.phase().to_string(),
        "players": players,
        "selected_player": session.selected_player().map(Player::name),
        "cards_per_player": session.cards_per_player(),
        "deck_size": session.deck().len(),
        "error": session.error(),
        "hands": hands,
        "can_export": !session.player_hands().is_empty(),
        "export_file_name": session.config().export_file_name,
        "available_cards": available_cards(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_game::config::GameConfig;

    #[test]
    fn image_url_embeds_card_label() {
        assert_eq!(
            card_image_url(CardType::Queen),
            "/api/placeholder/100/140?text=Queen"
        );
    }

    #[test]
    fn fresh_session_view_has_no_hands() {
        let session = GameSession::new(GameConfig::seeded(5)).unwrap();
        let view = to_view_state(&session);
        assert_eq!(view["players"].as_array().unwrap().len(), 8);
        assert_eq!(view["available_cards"].as_array().unwrap().len(), 11);
        assert_eq!(view["hands"], json!([]));
        assert_eq!(view["selected_player"], Value::Null);
        assert_eq!(view["error"], Value::Null);
        assert_eq!(view["can_export"], json!(false));
        assert_eq!(view["cards_per_player"], json!(5));
        assert_eq!(view["export_file_name"], json!("card_game_results.txt"));
    }
}
