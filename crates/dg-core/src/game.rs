//! Game session: roll, score, and accumulate across rounds.
//!
//! `Game` owns its dice and its seeded RNG, so independent sessions never
//! share state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::GameResult;
use crate::history::{History, RoundRecord};
use crate::scoring;

/// End-of-session totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Rounds played.
    pub rounds: u32,
    /// Points won across all rounds.
    pub total_points: i64,
    /// Points per round rounded to one decimal, if any round was played.
    pub average_points: Option<f64>,
}

/// A single player's game session.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    dice: Dice,
    rng: StdRng,
    rounds: u32,
    total_points: i64,
    history: History,
}

impl Game {
    /// Start a session with `dice_count` dice.
    ///
    /// The count must fall within the config's dice range, and the config's
    /// face bounds must form a valid die.
    pub fn new(dice_count: usize, config: GameConfig) -> GameResult<Self> {
        config.check_dice_count(dice_count)?;
        let dice = Dice::with_sampling(
            dice_count,
            config.face_lower,
            config.face_upper,
            config.sampling,
        )?;
        let rng = StdRng::seed_from_u64(config.seed);

        log::info!(
            "new game: {dice_count} dice, faces {}..={}, {} sampling, seed {}",
            config.face_lower,
            config.face_upper,
            config.sampling,
            config.seed
        );

        Ok(Self {
            config,
            dice,
            rng,
            rounds: 0,
            total_points: 0,
            history: History::new(),
        })
    }

    /// The configuration this session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The session's dice.
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Play one round: roll every die, score the roll, and add the points.
    pub fn play_round(&mut self) -> RoundRecord {
        self.rounds += 1;

        self.dice.roll_all(&mut self.rng);
        let roll = self.dice.last_roll().to_vec();
        let sum = self.dice.sum_values();

        let score = scoring::score(&roll, sum);
        self.total_points = self.total_points.saturating_add(score.points);

        let record = RoundRecord {
            round: self.rounds,
            roll,
            sum,
            category: score.category,
            points: score.points,
        };
        log::debug!("{record}; total {}", self.total_points);
        self.history.append(record.clone());
        record
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Points won so far.
    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    /// The most recent round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Every round played so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Points per round rounded to one decimal place.
    ///
    /// `None` before the first round.
    pub fn average_points(&self) -> Option<f64> {
        average_points(self.total_points, self.rounds)
    }

    /// Totals for the end-of-game display.
    pub fn summary(&self) -> Summary {
        Summary {
            rounds: self.rounds,
            total_points: self.total_points,
            average_points: self.average_points(),
        }
    }
}

/// `total / rounds` rounded half away from zero to one decimal place.
pub fn average_points(total_points: i64, rounds: u32) -> Option<f64> {
    if rounds == 0 {
        return None;
    }
    let average = total_points as f64 / f64::from(rounds);
    Some((average * 10.0).round() / 10.0)
}
