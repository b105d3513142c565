//! Core card game: deck model, shuffling, dealing, reset and export.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Card types, roster players, hands and the draw request |
//! | `deck`       | 110-card deck construction and Fisher-Yates shuffle |
//! | `session`    | `GameSession` state object: draw validation, hands, reset |
//! | `export`     | Text serialization of hands and file export |
//! | `config`     | `GameConfig` defaults and JSON loading |
//! | `error`      | `ValidationError` and the crate `Error` |
//! | `ui_adapter` | JSON view state for a front end |

pub mod config;
pub mod deck;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod ui_adapter;

pub use config::GameConfig;
pub use deck::{shuffle, Deck};
pub use error::{Error, ParseError, Result, ValidationError};
pub use export::{save_to_file, serialize_hands};
pub use models::{CardType, DrawRequest, Hand, Player, PlayerHands, SessionPhase};
pub use session::{draw_hand, GameSession};
pub use ui_adapter::{card_image_url, to_view_state};
