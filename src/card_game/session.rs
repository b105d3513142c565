//! The deck & hand manager.
//!
//! [`draw_hand`] is the pure validate-shuffle-take step. [`GameSession`]
//! wraps it with the state a UI binds to: the selected player, the requested
//! count, every player's latest hand and the current error message.

use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{info, warn};

use crate::card_game::{
    config::GameConfig,
    deck::Deck,
    error::{Error, Result, ValidationError},
    export,
    models::{DrawRequest, Hand, Player, PlayerHands, SessionPhase},
};

/// Validate a request against `deck` and deal a hand from a fresh shuffle.
///
/// Checks run in order and stop at the first failure: player present,
/// count at least one, count no larger than the deck. Every call shuffles
/// the full deck; nothing is removed between draws.
pub fn draw_hand<R: Rng + ?Sized>(
    request: DrawRequest,
    deck: &Deck,
    rng: &mut R,
) -> Result<(Player, Hand), ValidationError> {
    let player = request.player.ok_or(ValidationError::NoPlayerSelected)?;

    if request.count < 1 {
        return Err(ValidationError::InvalidCardCount {
            requested: request.count,
        });
    }

    let available = deck.len();
    let count = usize::try_from(request.count).unwrap_or(usize::MAX);
    if count > available {
        return Err(ValidationError::InsufficientCards {
            requested: request.count,
            available,
        });
    }

    let mut hand = deck.shuffled(rng);
    hand.truncate(count);
    Ok((player, hand))
}

/// One interactive session: an immutable deck plus the mutable UI-bound state.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    deck: Deck,
    rng: StdRng,
    player_hands: PlayerHands,
    selected_player: Option<Player>,
    cards_per_player: i64,
    error: Option<String>,
}

impl GameSession {
    /// Build a session, seeding the RNG from `config.rng_seed` or entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Build a session around a caller-supplied RNG.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let deck = Deck::initialize(config.cards_per_type);
        Ok(GameSession {
            cards_per_player: config.default_cards_per_player,
            config,
            deck,
            rng,
            player_hands: PlayerHands::new(),
            selected_player: None,
            error: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player_hands(&self) -> &PlayerHands {
        &self.player_hands
    }

    pub fn selected_player(&self) -> Option<Player> {
        self.selected_player
    }

    pub fn cards_per_player(&self) -> i64 {
        self.cards_per_player
    }

    /// Message from the last rejected draw, cleared by a good draw or reset.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.player_hands.is_empty() {
            SessionPhase::DeckReady
        } else {
            SessionPhase::HandsPresent
        }
    }

    /// Select a roster player by name. An empty name clears the selection;
    /// an unknown one is rejected and the selection is left as it was.
    pub fn select_player(&mut self, name: &str) -> Result<Option<Player>> {
        if name.is_empty() {
            self.selected_player = None;
            return Ok(None);
        }
        let player: Player = name
            .parse()
            .map_err(|_| Error::UnknownPlayer(name.to_string()))?;
        self.selected_player = Some(player);
        Ok(Some(player))
    }

    /// Store the requested count. Validated only when drawing.
    pub fn set_cards_per_player(&mut self, count: i64) {
        self.cards_per_player = count;
    }

    /// Draw for the selected player using the stored count.
    ///
    /// On success the player's previous hand is replaced and the error is
    /// cleared. On failure the error message is recorded and nothing else
    /// changes.
    pub fn draw_cards(&mut self) -> Result<Hand, ValidationError> {
        let request = DrawRequest {
            player: self.selected_player,
            count: self.cards_per_player,
        };

        match draw_hand(request, &self.deck, &mut self.rng) {
            Ok((player, hand)) => {
                self.error = None;
                let replaced = self.player_hands.insert(player, hand.clone());
                info!(
                    %player,
                    cards = hand.len(),
                    replaced = replaced.is_some(),
                    "cards drawn"
                );
                Ok(hand)
            }
            Err(err) => {
                warn!(?request, %err, "draw rejected");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Select `player`, set `count`, then draw.
    pub fn draw_for(&mut self, player: Player, count: i64) -> Result<Hand, ValidationError> {
        self.selected_player = Some(player);
        self.cards_per_player = count;
        self.draw_cards()
    }

    /// Drop every hand, the error and the selection. The deck and the
    /// requested count stay.
    pub fn reset_game(&mut self) {
        let cleared = self.player_hands.len();
        self.player_hands.clear();
        self.error = None;
        self.selected_player = None;
        info!(cleared, "game reset");
    }

    /// Current hands as export text.
    pub fn results_text(&self) -> String {
        export::serialize_hands(&self.player_hands)
    }

    /// Write the results to `dir/<export_file_name>`.
    pub fn save_results(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        export::save_to_file(
            &self.player_hands,
            dir.as_ref().join(&self.config.export_file_name),
        )
    }
}
