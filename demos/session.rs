//! Walk through one game session end to end.
//!
//! Run with: `cargo run --example session`
//!
//! 1. Build a seeded session (same seed = same hands every run).
//! 2. Deal to a few players, including one rejected request.
//! 3. Print the hands, the export text, and the JSON view state.
//! 4. Save the results next to the system temp dir, then reset.
//!
//! Draws, resets and exports are logged at `info`.

use card_draw_game::{
    serialize_hands, to_view_state, GameConfig, GameSession, Player,
};
use tracing::Level;

fn main() -> card_draw_game::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut session = GameSession::new(GameConfig::seeded(2024))?;
    println!("Deck: {} cards, phase: {}", session.deck().len(), session.phase());

    for (player, count) in [(Player::Alice, 5), (Player::Bob, 3), (Player::Charlie, 8)] {
        let hand = session.draw_for(player, count)?;
        let cards: Vec<String> = hand.iter().map(|c| c.to_string()).collect();
        println!("{player:<8} drew {count}: {}", cards.join(" "));
    }

    // Rejected: stays on screen as an error, hands untouched.
    if let Err(err) = session.draw_for(Player::David, 111) {
        println!("Rejected: {err}");
    }

    // Redraw replaces Alice's hand.
    session.draw_for(Player::Alice, 2)?;

    println!("\n── export text ──\n{}", serialize_hands(session.player_hands()));
    println!(
        "\n── view state ──\n{:#}",
        to_view_state(&session)
    );

    let path = session.save_results(std::env::temp_dir())?;
    println!("\nSaved to {}", path.display());

    session.reset_game();
    println!("After reset: phase = {}", session.phase());
    Ok(())
}
