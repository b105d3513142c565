use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::card_game::{
    error::{Error, Result},
    models::PlayerHands,
};

/// Format hands as `"<player>: <card>, <card>"`, one line per player,
/// newline-joined with no trailing newline.
pub fn serialize_hands(hands: &PlayerHands) -> String {
    hands
        .iter()
        .map(|(player, cards)| {
            let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
            format!("{player}: {cards}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the serialized hands to `path`, replacing any existing file.
pub fn save_to_file(hands: &PlayerHands, path: impl Into<PathBuf>) -> Result<PathBuf> {
    let path = path.into();
    let content = serialize_hands(hands);
    fs::write(&path, &content).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), players = hands.len(), "results saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_game::models::{CardType, Player};

    #[test]
    fn serializes_in_mapping_order() {
        let hands: PlayerHands = [
            (Player::Alice, vec![CardType::Ace, CardType::King]),
            (Player::Bob, vec![CardType::Ten]),
        ]
        .into_iter()
        .collect();
        assert_eq!(serialize_hands(&hands), "Alice: Ace, King\nBob: Ten");
    }

    #[test]
    fn empty_mapping_is_empty_text() {
        assert_eq!(serialize_hands(&PlayerHands::new()), "");
    }

    #[test]
    fn duplicate_card_types_are_listed_individually() {
        let hands: PlayerHands =
            [(Player::Henry, vec![CardType::Four, CardType::Four, CardType::Six])]
                .into_iter()
                .collect();
        assert_eq!(serialize_hands(&hands), "Henry: Four, Four, Six");
    }
}
