//! Play a batch of games with the knowledge-based AI and log the results.
//!
//! Usage: `autoplay [config.json]`
//!
//! The config file is optional; missing fields fall back to an 8x8 board
//! with 8 mines, a single game and an entropy-seeded RNG. Set `RUST_LOG`
//! to `debug` to follow each move and inference pass.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use minesweeper_ai::game::{self, Outcome};
use minesweeper_ai::rng::GameRng;
use minesweeper_ai::{Board, GameConfig};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    #[serde(flatten)]
    game: GameConfig,
    games: usize,
    seed: Option<u64>,
    /// Print each board's mine layout before playing it.
    show_board: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: 1,
            seed: None,
            show_board: false,
        }
    }
}

fn load_config() -> Result<RunConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(RunConfig::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse {}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    config.game.validate().context("invalid game configuration")?;
    tracing::info!(
        height = config.game.height,
        width = config.game.width,
        mines = config.game.mines,
        games = config.games,
        "starting"
    );

    let mut rng = match config.seed {
        Some(seed) => GameRng::from_seed(seed),
        None => GameRng::new(),
    };

    let mut won = 0usize;
    let mut stuck = 0usize;
    for index in 0..config.games {
        let board = Board::generate(&config.game, &mut rng)?;
        if config.show_board {
            print!("{}", board);
        }
        let report = game::play(&board, &mut rng)
            .with_context(|| format!("game {} failed", index))?;
        match report.outcome {
            Outcome::Won => won += 1,
            Outcome::NoMovesAvailable => stuck += 1,
            Outcome::HitMine(_) => {}
        }
        tracing::info!(
            game = index,
            outcome = ?report.outcome,
            moves = report.moves.len(),
            guesses = report.random_moves(),
            "result"
        );
    }

    tracing::info!(won, stuck, lost = config.games - won - stuck, "done");
    Ok(())
}
