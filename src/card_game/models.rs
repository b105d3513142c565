use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card_game::error::ParseError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// One of the eleven card labels. No suit, no rank arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
}

impl CardType {
    /// All card types in deck construction order.
    pub const ALL: [CardType; 11] = [
        CardType::Ace,
        CardType::King,
        CardType::Queen,
        CardType::Jack,
        CardType::Ten,
        CardType::Nine,
        CardType::Eight,
        CardType::Seven,
        CardType::Six,
        CardType::Five,
        CardType::Four,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CardType::Ace   => "Ace",
            CardType::King  => "King",
            CardType::Queen => "Queen",
            CardType::Jack  => "Jack",
            CardType::Ten   => "Ten",
            CardType::Nine  => "Nine",
            CardType::Eight => "Eight",
            CardType::Seven => "Seven",
            CardType::Six   => "Six",
            CardType::Five  => "Five",
            CardType::Four  => "Four",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CardType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseError::UnknownCardType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// A member of the fixed eight-name roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Alice,
    Bob,
    Charlie,
    David,
    Eve,
    Frank,
    Grace,
    Henry,
}

impl Player {
    /// The roster in display order.
    pub const ALL: [Player; 8] = [
        Player::Alice,
        Player::Bob,
        Player::Charlie,
        Player::David,
        Player::Eve,
        Player::Frank,
        Player::Grace,
        Player::Henry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Player::Alice   => "Alice",
            Player::Bob     => "Bob",
            Player::Charlie => "Charlie",
            Player::David   => "David",
            Player::Eve     => "Eve",
            Player::Frank   => "Frank",
            Player::Grace   => "Grace",
            Player::Henry   => "Henry",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParseError::UnknownPlayer(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Hands
// ---------------------------------------------------------------------------

/// The most recent draw for one player.
pub type Hand = Vec<CardType>;

/// Player → hand mapping.
///
/// Iterates in first-insertion order; overwriting a player keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHands {
    entries: Vec<(Player, Hand)>,
}

impl PlayerHands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace `player`'s hand. Returns the previous hand, if any.
    pub fn insert(&mut self, player: Player, hand: Hand) -> Option<Hand> {
        match self.entries.iter_mut().find(|(p, _)| *p == player) {
            Some((_, slot)) => Some(std::mem::replace(slot, hand)),
            None => {
                self.entries.push((player, hand));
                None
            }
        }
    }

    pub fn get(&self, player: Player) -> Option<&Hand> {
        self.entries
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Player, &Hand)> {
        self.entries.iter().map(|(p, h)| (*p, h))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(Player, Hand)> for PlayerHands {
    fn from_iter<I: IntoIterator<Item = (Player, Hand)>>(iter: I) -> Self {
        let mut hands = PlayerHands::new();
        for (player, hand) in iter {
            hands.insert(player, hand);
        }
        hands
    }
}

// ---------------------------------------------------------------------------
// Draw request / session phase
// ---------------------------------------------------------------------------

/// Transient input to a draw, validated before any cards are dealt.
///
/// `count` is signed so that zero and negative requests from the UI's number
/// input can reach validation and be rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    pub player: Option<Player>,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Deck built, no hands dealt.
    DeckReady,
    /// At least one player holds a hand.
    HandsPresent,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::DeckReady    => write!(f, "Deck Ready"),
            SessionPhase::HandsPresent => write!(f, "Hands Present"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_round_trips_through_label() {
        for card in CardType::ALL {
            assert_eq!(card.to_string().parse::<CardType>(), Ok(card));
        }
        assert_eq!(
            "Joker".parse::<CardType>(),
            Err(ParseError::UnknownCardType("Joker".into()))
        );
    }

    #[test]
    fn player_parse_is_case_sensitive() {
        assert_eq!("Alice".parse::<Player>(), Ok(Player::Alice));
        assert_eq!(
            "alice".parse::<Player>(),
            Err(ParseError::UnknownPlayer("alice".into()))
        );
        assert!("".parse::<Player>().is_err());
    }

    #[test]
    fn overwrite_keeps_original_slot() {
        let mut hands = PlayerHands::new();
        hands.insert(Player::Bob, vec![CardType::Ace]);
        hands.insert(Player::Alice, vec![CardType::King]);
        let prev = hands.insert(Player::Bob, vec![CardType::Ten, CardType::Four]);

        assert_eq!(prev, Some(vec![CardType::Ace]));
        assert_eq!(hands.len(), 2);
        let order: Vec<Player> = hands.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Player::Bob, Player::Alice]);
        assert_eq!(
            hands.get(Player::Bob),
            Some(&vec![CardType::Ten, CardType::Four])
        );
    }
}
