//! Dice types and rolling.
//!
//! A [`Die`] produces one face value per roll from a closed, sequential
//! range of integers. A [`Dice`] cluster owns several dice sharing one
//! range and remembers its most recent roll.
//!
//! Randomness is always injected by the caller as a seeded [`StdRng`], so
//! every roll sequence can be reproduced.

pub mod pool;

pub use pool::Dice;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// How a die turns randomness into a face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Every face in `lower..=upper` is equally likely.
    #[default]
    Uniform,
    /// `floor(u * upper) + lower` for `u` in `[0, 1)`.
    ///
    /// Kept for compatibility with the original browser game. The span depends
    /// on `upper` alone, so with `lower > 1` it can exceed `upper` and the
    /// weighting is not uniform over the declared faces.
    Legacy,
}

impl std::fmt::Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// A single die with sequential faces from `lower` to `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    lower: i32,
    upper: i32,
    sampling: Sampling,
}

impl Die {
    /// Create a uniformly sampled die.
    ///
    /// Fails with [`GameError::InvalidDieBounds`] unless `lower < upper`.
    /// A single-faced die such as `3..=3` is rejected.
    pub fn new(lower: i32, upper: i32) -> GameResult<Self> {
        Self::with_sampling(lower, upper, Sampling::Uniform)
    }

    /// Create a die with an explicit sampling mode.
    ///
    /// Legacy dice can roll as high as `lower + upper`, so that sum must
    /// fit in an `i32`.
    pub fn with_sampling(lower: i32, upper: i32, sampling: Sampling) -> GameResult<Self> {
        if lower >= upper {
            return Err(GameError::InvalidDieBounds { lower, upper });
        }
        if sampling == Sampling::Legacy && lower.checked_add(upper).is_none() {
            return Err(GameError::LegacyRangeOverflow { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            sampling,
        })
    }

    /// Lowest face value.
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// Highest face value.
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// The sampling mode used by [`Die::roll`].
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Roll the die once.
    pub fn roll(&self, rng: &mut StdRng) -> i32 {
        match self.sampling {
            Sampling::Uniform => rng.random_range(self.lower..=self.upper),
            Sampling::Legacy => {
                let face = legacy_face(rng.random::<f64>(), self.lower, self.upper);
                // Between lower and lower + upper, both checked to fit at construction.
                face.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d[{}..={}]", self.lower, self.upper)
    }
}

/// Map a unit sample `u` in `[0, 1)` to a face with the legacy formula.
///
/// Computed in `i64`, so extreme bounds cannot overflow.
pub fn legacy_face(u: f64, lower: i32, upper: i32) -> i64 {
    (u * f64::from(upper)).floor() as i64 + i64::from(lower)
}
