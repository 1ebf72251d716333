//! Console Round
//!
//! This example plays one seeded session the way a presentation layer would:
//! it forwards intents to the game and renders the snapshot it gets back.
//!
//! Key concepts:
//! - The game owns all state; the caller only renders snapshots
//! - A rejected draw becomes a prompt, not a failure
//! - Cues are fire-and-forget
//!
//! Run with: RUST_LOG=debug cargo run --example console_round

use menagerie::core::{DisplayNames, GameState};
use menagerie::effects::{Cue, CueSink};
use menagerie::{GameBuilder, GameConfig, Locale, TokenId};
use tracing_subscriber::EnvFilter;

/// Prints a bell instead of playing a sound.
struct Bell;

impl CueSink for Bell {
    fn emit(&mut self, cue: &Cue) {
        match cue {
            Cue::Win { token } => println!("  *ding* ({token})"),
        }
    }
}

fn render(state: &GameState, names: &impl DisplayNames) {
    println!("Points: {}", state.points());
    for token in state.tokens().iter().filter(|t| t.count > 0) {
        let color = token.color.map_or("-", |c| c.css_class());
        println!(
            "  {} {:<8} x{} [{}]",
            token.id,
            names.label_or_symbol(&token.id),
            token.count,
            color
        );
    }
    if let Some(message) = state.message() {
        println!("  {message}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Console Round ===\n");

    let config = GameConfig {
        locale: Locale::Hinglish,
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut game = GameBuilder::from_config(config).cues(Bell).build()?;

    if let Err(rejection) = game.draw() {
        println!("Play pressed too early: {}\n", game.prompt_for(&rejection));
    }

    for symbol in ["🐼", "🐼", "🦊", "🐸", "🐼"] {
        game.select(&TokenId::new(symbol))?;
    }
    game.decrement(&TokenId::new("🐸"))?;

    for round in 1..=3 {
        println!("Round {round}");
        let state = game.draw()?;
        render(&state, game.roster());
        println!();
    }

    let json = game.checkpoint().to_json()?;
    println!("Checkpoint is {} bytes of JSON", json.len());

    let state = game.reset();
    println!("After reset: {} points", state.points());

    println!("\n=== Example Complete ===");
    Ok(())
}
