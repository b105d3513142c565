//! # card_draw_game
//!
//! The core of a small card-drawing game: a fixed 110-card deck (11 card
//! types × 10 copies) is shuffled and dealt to a chosen player on demand, and
//! the results can be shown or exported as plain text.
//!
//! ## How it works
//!
//! 1. Build a [`GameSession`] from a [`GameConfig`]. The session constructs
//!    the deck once and owns a seedable RNG.
//! 2. Select a player and a card count, then call
//!    [`GameSession::draw_cards`]. Each draw shuffles a copy of the full deck
//!    and takes cards from the front; the player's previous hand is replaced.
//! 3. Render from [`to_view_state`], export with [`serialize_hands`] or
//!    [`GameSession::save_results`], and start over with
//!    [`GameSession::reset_game`].
//!
//! ## Quick start
//!
//! ```rust
//! use card_draw_game::{serialize_hands, GameConfig, GameSession, Player};
//!
//! let mut session = GameSession::new(GameConfig::seeded(42)).unwrap();
//! let hand = session.draw_for(Player::Alice, 5).unwrap();
//! assert_eq!(hand.len(), 5);
//!
//! // Rejected draws record a message and leave the hands alone.
//! assert!(session.draw_for(Player::Bob, 0).is_err());
//! assert_eq!(session.error(), Some("Please select a valid number of cards"));
//!
//! println!("{}", serialize_hands(session.player_hands()));
//! ```

pub mod card_game;

// Convenience re-exports so callers can use `card_draw_game::GameSession`
// directly without reaching into `card_game::`.
pub use card_game::{
    card_image_url, draw_hand, save_to_file, serialize_hands, shuffle, to_view_state, CardType,
    Deck, DrawRequest, Error, GameConfig, GameSession, Hand, ParseError, Player, PlayerHands, Result,
    SessionPhase, ValidationError,
};
