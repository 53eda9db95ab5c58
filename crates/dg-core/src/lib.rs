//! Rules engine for a dice scoring game.
//!
//! Provides seeded dice rolling, the fixed-priority scoring rules that turn a
//! roll into points, and a game session that accumulates rounds and reports
//! the per-round average.

pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod history;
pub mod scoring;

pub use config::GameConfig;
pub use dice::{Dice, Die, Sampling};
pub use error::{GameError, GameResult};
pub use game::{Game, Summary};
pub use history::{History, RoundRecord};
pub use scoring::{Category, Score};
