//! A fixed cluster of dice rolled together.

use rand::rngs::StdRng;

use super::{Die, Sampling};
use crate::error::{GameError, GameResult};
use crate::scoring;

/// A fixed-size cluster of dice sharing one face range.
///
/// The cluster keeps the values of its most recent roll, in die order.
#[derive(Debug, Clone)]
pub struct Dice {
    dice: Vec<Die>,
    lower: i32,
    upper: i32,
    current_roll: Vec<i32>,
}

impl Dice {
    /// Build `count` uniformly sampled dice with faces `lower..=upper`.
    pub fn new(count: usize, lower: i32, upper: i32) -> GameResult<Self> {
        Self::with_sampling(count, lower, upper, Sampling::Uniform)
    }

    /// Build `count` dice with an explicit sampling mode.
    ///
    /// The cluster only checks `lower <= upper`; each die then applies its
    /// own stricter check, so equal bounds still fail with
    /// [`GameError::InvalidDieBounds`].
    pub fn with_sampling(
        count: usize,
        lower: i32,
        upper: i32,
        sampling: Sampling,
    ) -> GameResult<Self> {
        if lower > upper {
            return Err(GameError::InvalidDiceBounds { lower, upper });
        }
        if count == 0 {
            return Err(GameError::EmptyDice);
        }

        let dice = (0..count)
            .map(|_| Die::with_sampling(lower, upper, sampling))
            .collect::<GameResult<Vec<_>>>()?;

        Ok(Self {
            dice,
            lower,
            upper,
            current_roll: Vec::new(),
        })
    }

    /// Number of dice in the cluster.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// The shared face range as `(lower, upper)`.
    pub fn bounds(&self) -> (i32, i32) {
        (self.lower, self.upper)
    }

    /// The dice in this cluster.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Roll every die once, replacing the stored roll.
    pub fn roll_all(&mut self, rng: &mut StdRng) {
        self.current_roll = self.dice.iter().map(|die| die.roll(rng)).collect();
        log::debug!("rolled {:?}", self.current_roll);
    }

    /// Values of the most recent roll. Empty before the first roll.
    pub fn last_roll(&self) -> &[i32] {
        &self.current_roll
    }

    /// Sum of the most recent roll. Zero before the first roll.
    pub fn sum_values(&self) -> i64 {
        scoring::roll_sum(&self.current_roll)
    }
}
